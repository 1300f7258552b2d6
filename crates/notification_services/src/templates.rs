use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::types::NotificationError;

/// Identifier of the plain-text contact confirmation email
pub const CONFIRM_CONTACT_TEXT_EMAIL: &str = "confirmcontact-text-email";
/// Identifier of the HTML contact confirmation email
pub const CONFIRM_CONTACT_HTML_EMAIL: &str = "confirmcontact-html-email";
/// Identifier of the plain-text password reset email
pub const PASSWORD_RESET_TEXT_EMAIL: &str = "passwordreset-text-email";
/// Identifier of the HTML password reset email
pub const PASSWORD_RESET_HTML_EMAIL: &str = "passwordreset-html-email";
/// Identifier of the plain-text magic login email
pub const MAGIC_LOGIN_TEXT_EMAIL: &str = "magiclogin-text-email";
/// Identifier of the HTML magic login email
pub const MAGIC_LOGIN_HTML_EMAIL: &str = "magiclogin-html-email";

/// Body registered for `confirmcontact-text-email`.
pub const CONFIRM_CONTACT_TEXT_EMAIL_BODY: &str = "Thank you for registering this email with {{ .ServiceName }}. Please go to the link below to confirm your contact:\n\t\n\t{{ .ConfirmLink }}";

/// Account-registration wording of the contact confirmation email.
///
/// Not registered against any identifier; the HTML counterpart has not been written yet.
pub const CONFIRM_CONTACT_EMAIL_TEMPLATE_PLAIN_TEXT: &str = "\nThank you for registering an account with {{ .ServiceName }}! \nPlease use the link below to confirm your account.\n\n{{ .ConfirmLink }}\n";

/// Whether a template body is plain text or HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    /// Plain text body
    Text,
    /// HTML body
    Html,
}

impl TemplateType {
    /// The lowercase tag used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            TemplateType::Text => "text",
            TemplateType::Html => "html",
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateType {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TemplateType::Text),
            "html" => Ok(TemplateType::Html),
            other => Err(NotificationError::UnknownTemplateType(other.to_string())),
        }
    }
}

/// The known email templates.
///
/// Serializes as the identifier string, e.g. `"magiclogin-html-email"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TemplateId {
    /// `confirmcontact-text-email`
    ConfirmContactText,
    /// `confirmcontact-html-email`
    ConfirmContactHtml,
    /// `passwordreset-text-email`
    PasswordResetText,
    /// `passwordreset-html-email`
    PasswordResetHtml,
    /// `magiclogin-text-email`
    MagicLoginText,
    /// `magiclogin-html-email`
    MagicLoginHtml,
}

impl TemplateId {
    /// Every registered template.
    pub const ALL: [TemplateId; 6] = [
        TemplateId::ConfirmContactText,
        TemplateId::ConfirmContactHtml,
        TemplateId::PasswordResetText,
        TemplateId::PasswordResetHtml,
        TemplateId::MagicLoginText,
        TemplateId::MagicLoginHtml,
    ];

    /// The registry identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            TemplateId::ConfirmContactText => CONFIRM_CONTACT_TEXT_EMAIL,
            TemplateId::ConfirmContactHtml => CONFIRM_CONTACT_HTML_EMAIL,
            TemplateId::PasswordResetText => PASSWORD_RESET_TEXT_EMAIL,
            TemplateId::PasswordResetHtml => PASSWORD_RESET_HTML_EMAIL,
            TemplateId::MagicLoginText => MAGIC_LOGIN_TEXT_EMAIL,
            TemplateId::MagicLoginHtml => MAGIC_LOGIN_HTML_EMAIL,
        }
    }

    /// Whether this template renders plain text or HTML.
    pub const fn template_type(self) -> TemplateType {
        match self {
            TemplateId::ConfirmContactText
            | TemplateId::PasswordResetText
            | TemplateId::MagicLoginText => TemplateType::Text,
            TemplateId::ConfirmContactHtml
            | TemplateId::PasswordResetHtml
            | TemplateId::MagicLoginHtml => TemplateType::Html,
        }
    }

    /// The body defined in this crate, if any. Callers resolve the rest elsewhere.
    pub fn inline_body(self) -> Option<&'static str> {
        match self {
            TemplateId::ConfirmContactText => Some(CONFIRM_CONTACT_TEXT_EMAIL_BODY),
            other => {
                log::debug!("No inline body for email template {}", other);
                None
            }
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                log::debug!("Unknown email template identifier: {:?}", s);
                NotificationError::UnknownTemplate(s.to_string())
            })
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        id.as_str().to_string()
    }
}

impl TryFrom<String> for TemplateId {
    type Error = NotificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Looks up the inline body for a raw template identifier.
pub fn inline_template_body(id: &str) -> Option<&'static str> {
    id.parse::<TemplateId>().ok()?.inline_body()
}

/// Values bound into the contact confirmation template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmContactTemplateParams {
    /// Name of the service that originated the registration
    pub service_name: String,
    /// URL the recipient must visit to confirm
    pub confirm_link: String,
}

impl ConfirmContactTemplateParams {
    /// Creates a new parameter set.
    pub fn new(service_name: impl Into<String>, confirm_link: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            confirm_link: confirm_link.into(),
        }
    }
}
