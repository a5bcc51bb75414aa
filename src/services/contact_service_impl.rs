use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use tracing::info;
use uuid::Uuid;

use crate::data::site::SERVICE_INTERESTS;
use crate::models::{ContactMethod, ContactReceipt, ContactRequest};
use crate::services::contact_service::{ContactError, ContactService};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"))
}

/// Validates submissions and answers with a fixed acknowledgement.
pub struct SimulatedContactService {
    acknowledgement: String,
}

impl SimulatedContactService {
    #[must_use]
    pub const fn new(acknowledgement: String) -> Self {
        Self { acknowledgement }
    }

    fn validate(request: &ContactRequest) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &request.name),
            ("email", &request.email),
            ("message", &request.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        let email = request.email.trim();
        if !email_regex().is_match(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        if let Some(subject) = request.subject.as_deref().map(str::trim)
            && !subject.is_empty()
            && !SERVICE_INTERESTS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(subject))
        {
            return Err(ContactError::UnknownInterest(subject.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl ContactService for SimulatedContactService {
    async fn submit(&self, request: ContactRequest) -> Result<ContactReceipt, ContactError> {
        if let Err(e) = Self::validate(&request) {
            metrics::counter!("contact_submissions_total", "outcome" => "rejected").increment(1);
            return Err(e);
        }

        let reference = Uuid::new_v4();
        info!(
            %reference,
            name = %request.name.trim(),
            subject = request.subject.as_deref().unwrap_or("General"),
            method = request.contact_method.unwrap_or(ContactMethod::Email).value(),
            "Contact form submitted"
        );
        metrics::counter!("contact_submissions_total", "outcome" => "accepted").increment(1);

        Ok(ContactReceipt {
            reference,
            message: self.acknowledgement.clone(),
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SimulatedContactService {
        SimulatedContactService::new("Thanks!".to_string())
    }

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Jane Buyer".to_string(),
            email: "jane@example.com".to_string(),
            message: "Interested in the villa.".to_string(),
            subject: Some("Property Buying".to_string()),
            contact_method: Some(ContactMethod::Phone),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn accepts_a_complete_submission() {
        let receipt = service().submit(valid()).await.unwrap();
        assert_eq!(receipt.message, "Thanks!");
        assert!(!receipt.reference.is_nil());
    }

    #[tokio::test]
    async fn each_submission_gets_its_own_reference() {
        let svc = service();
        let a = svc.submit(valid()).await.unwrap();
        let b = svc.submit(valid()).await.unwrap();
        assert_ne!(a.reference, b.reference);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let request = ContactRequest {
            name: "   ".to_string(),
            ..valid()
        };
        assert!(matches!(
            service().submit(request).await,
            Err(ContactError::MissingField("name"))
        ));
    }

    #[tokio::test]
    async fn missing_message_is_rejected() {
        let request = ContactRequest {
            message: String::new(),
            ..valid()
        };
        assert!(matches!(
            service().submit(request).await,
            Err(ContactError::MissingField("message"))
        ));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        for email in ["jane", "jane@", "jane@example", "ja ne@example.com"] {
            let request = ContactRequest {
                email: email.to_string(),
                ..valid()
            };
            assert!(
                matches!(
                    service().submit(request).await,
                    Err(ContactError::InvalidEmail(_))
                ),
                "{email} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn unknown_interest_is_rejected() {
        let request = ContactRequest {
            subject: Some("Car Sales".to_string()),
            ..valid()
        };
        assert!(matches!(
            service().submit(request).await,
            Err(ContactError::UnknownInterest(_))
        ));
    }

    #[tokio::test]
    async fn optional_fields_may_be_omitted() {
        let request = ContactRequest {
            subject: None,
            contact_method: None,
            phone: None,
            ..valid()
        };
        assert!(service().submit(request).await.is_ok());
    }
}
