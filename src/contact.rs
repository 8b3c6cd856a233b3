use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RelayConfig;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MessageRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::MessageRequired => Field::Message,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Some fields need attention")]
    Invalid(Vec<FieldError>),
    #[error("The contact form is not configured")]
    NotConfigured,
    #[error("Couldn't build request: {0}")]
    Encode(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

impl ContactForm {
    /// Every failing field, in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageRequired);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|s| s.is_empty())
    }

    /// Applies a submission outcome: success clears the form, failure keeps it.
    pub fn settle(&mut self, outcome: &Result<(), ContactError>) {
        if outcome.is_ok() {
            *self = Self::default();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub to_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, form: &ContactForm) -> Self {
        let name = form.name.trim().to_string();
        let email = form.email.trim().to_string();
        let subject = match form.subject.trim() {
            "" => format!("New message from {}", name),
            s => s.to_string(),
        };
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: name,
                reply_to: email.clone(),
                from_email: email,
                subject,
                message: form.message.trim().to_string(),
                to_name: config.to_name.clone(),
                to_email: config.to_email.clone(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, ContactError> {
        serde_json::to_string(self).map_err(|e| ContactError::Encode(e.to_string()))
    }
}

/// Checks the form and relay settings and builds the outbound payload.
pub fn prepare(config: &RelayConfig, form: &ContactForm) -> Result<RelayRequest, ContactError> {
    form.validate().map_err(ContactError::Invalid)?;
    if !config.is_configured() {
        return Err(ContactError::NotConfigured);
    }
    Ok(RelayRequest::new(config, form))
}

#[cfg(feature = "hydrate")]
pub async fn send(config: &RelayConfig, form: &ContactForm) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    let payload = prepare(config, form)?;
    let response = Request::post(&config.endpoint)
        .json(&payload)
        .map_err(|e| ContactError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("mail relay returned {}: {}", status, body);
        return Err(ContactError::Rejected { status, body });
    }

    log::info!("contact message relayed for {}", payload.template_params.from_email);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

impl Toast {
    pub fn from_outcome(outcome: &Result<(), ContactError>) -> Self {
        match outcome {
            Ok(()) => Self {
                kind: ToastKind::Success,
                title: "Message sent!".to_string(),
                body: "Thanks for reaching out. I'll get back to you soon.".to_string(),
            },
            Err(ContactError::Invalid(errors)) => Self {
                kind: ToastKind::Error,
                title: "Please check the form".to_string(),
                body: errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(". "),
            },
            Err(e) => Self {
                kind: ToastKind::Error,
                title: "Failed to send message".to_string(),
                body: format!("{e}. Please try again or email me directly."),
            },
        }
    }
}

/// The toast currently on screen. Each `show` starts a new generation so a
/// stale auto-dismiss timer can't hide a newer toast, even an identical one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.generation += 1;
        self.current = Some(toast);
        self.generation
    }

    /// Auto-dismiss for the toast shown at `generation`.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RELAY_ENDPOINT;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    fn relay() -> RelayConfig {
        RelayConfig {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "public_1".to_string(),
            to_name: "Owner".to_string(),
            to_email: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["", "ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(vec![FieldError::InvalidEmail]), "{email}");
        }
        assert!(is_valid_email("  ada@example.co.uk "));
    }

    #[test]
    fn rejects_blank_name_and_message() {
        let form = ContactForm {
            name: "   ".to_string(),
            message: "\n".to_string(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::NameRequired, FieldError::MessageRequired]);
        assert_eq!(errors[1].field(), Field::Message);
    }

    #[test]
    fn subject_is_optional() {
        let form = ContactForm {
            subject: String::new(),
            ..filled()
        };
        assert!(form.validate().is_ok());
        let req = RelayRequest::new(&relay(), &form);
        assert_eq!(req.template_params.subject, "New message from Ada");
    }

    #[test]
    fn payload_shape() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            ..filled()
        };
        let json: serde_json::Value =
            serde_json::from_str(&RelayRequest::new(&relay(), &form).to_json().unwrap()).unwrap();
        assert_eq!(json["service_id"], "service_1");
        assert_eq!(json["template_id"], "template_1");
        assert_eq!(json["user_id"], "public_1");
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(json["template_params"]["to_email"], "owner@example.com");
    }

    #[test]
    fn prepare_checks_form_then_config() {
        let bad = ContactForm::default();
        assert!(matches!(prepare(&relay(), &bad), Err(ContactError::Invalid(_))));
        let mut unconfigured = relay();
        unconfigured.service_id.clear();
        assert_eq!(prepare(&unconfigured, &filled()), Err(ContactError::NotConfigured));
        assert!(prepare(&relay(), &filled()).is_ok());
    }

    #[test]
    fn success_clears_failure_preserves() {
        let mut form = filled();
        form.settle(&Err(ContactError::Network("offline".to_string())));
        assert_eq!(form, filled());
        form.settle(&Ok(()));
        assert!(form.is_empty());
    }

    #[test]
    fn field_accessors() {
        let mut form = ContactForm::default();
        form.set(Field::Subject, "Hi".to_string());
        assert_eq!(form.get(Field::Subject), "Hi");
        assert!(!form.is_empty());
    }

    #[test]
    fn toast_messages() {
        let ok = Toast::from_outcome(&Ok(()));
        assert_eq!(ok.kind, ToastKind::Success);
        let err = Toast::from_outcome(&Err(ContactError::Rejected {
            status: 400,
            body: "bad template".to_string(),
        }));
        assert_eq!(err.kind, ToastKind::Error);
        assert!(err.body.contains("400"));
        let invalid = Toast::from_outcome(&Err(ContactError::Invalid(vec![
            FieldError::NameRequired,
            FieldError::InvalidEmail,
        ])));
        assert_eq!(
            invalid.body,
            "Please enter your name. Please enter a valid email address"
        );
    }

    #[test]
    fn stale_timer_keeps_repeated_toast() {
        let invalid = Toast::from_outcome(&Err(ContactError::Invalid(vec![
            FieldError::NameRequired,
        ])));
        let mut slot = ToastSlot::default();
        let first = slot.show(invalid.clone());
        let second = slot.show(invalid.clone());
        assert_ne!(first, second);

        slot.expire(first);
        assert_eq!(slot.current(), Some(&invalid));
        slot.expire(second);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn dismissed_toast_ignores_its_timer() {
        let mut slot = ToastSlot::default();
        let generation = slot.show(Toast::from_outcome(&Ok(())));
        slot.dismiss();
        assert!(slot.current().is_none());
        slot.expire(generation);
        assert!(slot.current().is_none());
    }
}
