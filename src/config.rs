use chrono::{DateTime, Datelike};

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const FALLBACK_YEAR: i32 = 2025;

/// Settings for the transactional email relay.
///
/// The client bundle has no runtime environment, so these are captured when
/// the crate is compiled (see `build.rs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_name: String,
    pub to_email: String,
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            endpoint: option_env!("PORTFOLIO_EMAIL_ENDPOINT")
                .unwrap_or(DEFAULT_RELAY_ENDPOINT)
                .to_string(),
            service_id: option_env!("PORTFOLIO_EMAIL_SERVICE_ID")
                .unwrap_or_default()
                .to_string(),
            template_id: option_env!("PORTFOLIO_EMAIL_TEMPLATE_ID")
                .unwrap_or_default()
                .to_string(),
            public_key: option_env!("PORTFOLIO_EMAIL_PUBLIC_KEY")
                .unwrap_or_default()
                .to_string(),
            to_name: option_env!("PORTFOLIO_EMAIL_TO_NAME")
                .unwrap_or(crate::content::PROFILE.full_name)
                .to_string(),
            to_email: option_env!("PORTFOLIO_EMAIL_TO_ADDRESS")
                .unwrap_or(crate::content::CONTACT.email)
                .to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        ![
            &self.endpoint,
            &self.service_id,
            &self.template_id,
            &self.public_key,
        ]
        .iter()
        .any(|s| s.trim().is_empty())
    }
}

pub fn build_time() -> &'static str {
    env!("BUILD_TIME")
}

pub fn build_year() -> i32 {
    year_of(build_time()).unwrap_or(FALLBACK_YEAR)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> RelayConfig {
        RelayConfig {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk".to_string(),
            to_name: "Owner".to_string(),
            to_email: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn missing_ids_are_not_configured() {
        assert!(configured().is_configured());
        let mut c = configured();
        c.template_id = "  ".to_string();
        assert!(!c.is_configured());
    }

    #[test]
    fn build_year_comes_from_timestamp() {
        assert_eq!(year_of("2024-03-01T10:00:00+00:00"), Some(2024));
        assert_eq!(year_of("yesterday"), None);
        assert!(build_year() >= 2024);
    }
}
