use serde::{Deserialize, Serialize};

use crate::templates::TemplateType;

/// Errors raised when converting external input into notification types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    /// The identifier is not in the template registry.
    #[error("Unknown email template: {0}")]
    UnknownTemplate(String),

    /// The tag is neither "text" nor "html".
    #[error("Unknown template type: {0}")]
    UnknownTemplateType(String),
}

/// Recipients of an email, grouped by header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecipientInfo {
    /// Blind carbon copy addresses
    #[serde(default)]
    pub bcc: Vec<String>,
    /// Carbon copy addresses
    #[serde(default)]
    pub cc: Vec<String>,
    /// Primary addresses
    #[serde(default)]
    pub to: Vec<String>,
}

impl EmailRecipientInfo {
    /// True when no list holds an address.
    pub fn is_empty(&self) -> bool {
        self.bcc.is_empty() && self.cc.is_empty() && self.to.is_empty()
    }

    /// Total number of addresses across `to`, `cc` and `bcc`.
    pub fn len(&self) -> usize {
        self.bcc.len() + self.cc.len() + self.to.len()
    }
}

/// Envelope and body of an email, as consumed by the dispatcher.
///
/// The recipient lists are flattened into the same JSON object as the body and
/// subject:
///
/// ```json
/// { "body": "...", "isHtmlBody": false, "subject": "...", "bcc": [], "cc": [], "to": ["a@x"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContentInfo {
    /// Template text or rendered output
    pub body: String,
    /// Whether `body` is HTML
    pub is_html_body: bool,
    /// Subject line
    pub subject: String,
    /// Recipients, serialized inline
    #[serde(flatten)]
    pub recipients: EmailRecipientInfo,
}

impl EmailContentInfo {
    /// Creates content with no recipients, marking the body as HTML when `body_type` is `Html`.
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        body_type: TemplateType,
    ) -> Self {
        Self {
            body: body.into(),
            is_html_body: body_type == TemplateType::Html,
            subject: subject.into(),
            recipients: EmailRecipientInfo::default(),
        }
    }

    /// Replaces the recipients.
    pub fn with_recipients(mut self, recipients: EmailRecipientInfo) -> Self {
        self.recipients = recipients;
        self
    }

    /// The template type matching `is_html_body`.
    pub fn body_type(&self) -> TemplateType {
        if self.is_html_body {
            TemplateType::Html
        } else {
            TemplateType::Text
        }
    }
}
