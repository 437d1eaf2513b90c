//! The singleton user settings record.

use crate::constants::DEFAULT_THEME;
use serde::{Deserialize, Serialize};

/// User preferences, stored as a single fixed-key row.
///
/// `password_hash` is opaque text. Nothing in this crate hashes or verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: String,
    pub is_password_enabled: bool,
    pub password_hash: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: DEFAULT_THEME.to_string(),
            is_password_enabled: false,
            password_hash: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "Light");
        assert!(!settings.is_password_enabled);
        assert!(settings.password_hash.is_empty());
    }
}
