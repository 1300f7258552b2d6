//! # Notification Services
//!
//! This crate provides the shared notification vocabulary for the application.
//! It includes the email template registry, the inline template bodies, and the
//! message records handed to the email dispatcher.

/// Email template types, identifiers, inline bodies and template parameters.
pub mod templates;
/// Types and structures used in notification services.
pub mod types;

pub use templates::{
    CONFIRM_CONTACT_EMAIL_TEMPLATE_PLAIN_TEXT, ConfirmContactTemplateParams, TemplateId,
    TemplateType, inline_template_body,
};
pub use types::{EmailContentInfo, EmailRecipientInfo, NotificationError};
