use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
    Text,
    Any,
}

impl ContactMethod {
    pub const ALL: [Self; 4] = [Self::Email, Self::Phone, Self::Text, Self::Any];

    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Text => "text",
            Self::Any => "any",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone Call",
            Self::Text => "Text Message",
            Self::Any => "Any Method",
        }
    }
}

/// A lead submitted through the contact form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// One of the offered service interests, e.g. "Property Buying".
    pub subject: Option<String>,
    pub message: String,
    pub contact_method: Option<ContactMethod>,
}

/// What the caller gets back after a (simulated) submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub reference: Uuid,
    pub message: String,
    pub received_at: DateTime<Utc>,
}
