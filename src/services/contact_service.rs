//! Domain service for the contact form.
//!
//! Submissions are validated and acknowledged; nothing is stored or sent.

use thiserror::Error;

use crate::models::{ContactReceipt, ContactRequest};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Unknown service interest: {0}")]
    UnknownInterest(String),
}

#[async_trait::async_trait]
pub trait ContactService: Send + Sync {
    /// Accepts a lead and returns the acknowledgement shown to the visitor.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] when a required field is blank, the email
    /// is malformed, or the service interest is not one the agency offers.
    async fn submit(&self, request: ContactRequest) -> Result<ContactReceipt, ContactError>;
}
