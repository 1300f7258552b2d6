use serde::{Deserialize, Serialize};

/// Outcome of an authentication check.
///
/// The discriminants are stable and part of the external contract: consumers may
/// persist or transmit the ordinal, so new variants must never reuse a value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum AuthStatus {
    /// No credentials were presented
    #[default]
    Unauthenticated = 0,
    /// Credentials were presented but did not check out
    Invalid = 1,
    /// Credentials were valid once but are past their expiry
    Expired = 2,
    /// Credentials were accepted
    Authenticated = 3,
}

impl AuthStatus {
    /// Every status, in ordinal order.
    pub const ALL: [AuthStatus; 4] = [
        AuthStatus::Unauthenticated,
        AuthStatus::Invalid,
        AuthStatus::Expired,
        AuthStatus::Authenticated,
    ];

    /// Returns the stable ordinal of this status.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether the check let the caller through.
    pub const fn is_authenticated(self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

impl From<AuthStatus> for u8 {
    fn from(status: AuthStatus) -> Self {
        status.ordinal()
    }
}

impl TryFrom<u8> for AuthStatus {
    type Error = AuthError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AuthStatus::Unauthenticated),
            1 => Ok(AuthStatus::Invalid),
            2 => Ok(AuthStatus::Expired),
            3 => Ok(AuthStatus::Authenticated),
            other => {
                log::debug!("Rejecting unknown auth status ordinal {}", other);
                Err(AuthError::InvalidStatus(other))
            }
        }
    }
}

/// Custom error type for authentication-related errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The ordinal does not name any auth status
    #[error("Invalid auth status ordinal: {0}")]
    InvalidStatus(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unauthenticated() {
        let status = AuthStatus::default();
        assert_eq!(status, AuthStatus::Unauthenticated);
        assert_eq!(status.ordinal(), 0);
        assert!(!status.is_authenticated());
    }

    #[test]
    fn test_ordinals_are_stable() {
        assert_eq!(AuthStatus::Unauthenticated.ordinal(), 0);
        assert_eq!(AuthStatus::Invalid.ordinal(), 1);
        assert_eq!(AuthStatus::Expired.ordinal(), 2);
        assert_eq!(AuthStatus::Authenticated.ordinal(), 3);

        for (index, status) in AuthStatus::ALL.iter().enumerate() {
            assert_eq!(u8::from(*status) as usize, index);
        }
    }

    #[test]
    fn test_variants_are_pairwise_distinct() {
        for (i, a) in AuthStatus::ALL.iter().enumerate() {
            for (j, b) in AuthStatus::ALL.iter().enumerate() {
                assert_eq!(i == j, a == b, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_ordering_follows_ordinals() {
        assert!(AuthStatus::Unauthenticated < AuthStatus::Invalid);
        assert!(AuthStatus::Invalid < AuthStatus::Expired);
        assert!(AuthStatus::Expired < AuthStatus::Authenticated);
    }

    #[test]
    fn test_try_from_ordinal() {
        assert_eq!(AuthStatus::try_from(2), Ok(AuthStatus::Expired));
        assert_eq!(AuthStatus::try_from(4), Err(AuthError::InvalidStatus(4)));
        assert_eq!(
            AuthStatus::try_from(u8::MAX).unwrap_err().to_string(),
            "Invalid auth status ordinal: 255"
        );
    }

    #[test]
    fn test_only_authenticated_passes() {
        let passing: Vec<_> = AuthStatus::ALL
            .into_iter()
            .filter(|s| s.is_authenticated())
            .collect();
        assert_eq!(passing, vec![AuthStatus::Authenticated]);
    }

    #[test]
    fn test_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&AuthStatus::Expired).unwrap(), "2");
        assert_eq!(
            serde_json::from_str::<AuthStatus>("3").unwrap(),
            AuthStatus::Authenticated
        );
        assert!(serde_json::from_str::<AuthStatus>("7").is_err());
        assert!(serde_json::from_str::<AuthStatus>("\"Expired\"").is_err());
    }
}
