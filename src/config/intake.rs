//! Intake form configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings the intake handlers read while building advisories
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Client portal existing clients are pointed at
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
}

impl IntakeConfig {
    /// Validate intake configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.portal_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("intake.portal_url"));
        }
        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            portal_url: default_portal_url(),
        }
    }
}

fn default_portal_url() -> String {
    "www.myportal.centology.io".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_portal_url() {
        let config = IntakeConfig::default();
        assert_eq!(config.portal_url, "www.myportal.centology.io");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_portal_url_is_rejected() {
        let config = IntakeConfig {
            portal_url: "  ".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("intake.portal_url"))
        ));
    }
}
