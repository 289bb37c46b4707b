use serde::{Deserialize, Serialize};

/// Local-part prefixes of the synthetic emails given to placeholder accounts.
pub const DEFAULT_PLACEHOLDER_PREFIXES: &[&str] = &["dummy", "web-app"];

/// Recognizes placeholder accounts from their synthetic email address.
///
/// An email matches when its local part starts with one of `prefixes`
/// (case-insensitive) and, if `domain` is set, its domain equals it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderPattern {
    prefixes: Vec<String>,
    domain: Option<String>,
}

impl Default for PlaceholderPattern {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PLACEHOLDER_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            domain: None,
        }
    }
}

impl PlaceholderPattern {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>, domain: Option<String>) -> Self {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.into().to_ascii_lowercase())
                .collect(),
            domain: domain.map(|d| d.trim_start_matches('@').to_ascii_lowercase()),
        }
    }

    /// Default prefixes pinned to a single email domain.
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self::new(DEFAULT_PLACEHOLDER_PREFIXES.iter().copied(), Some(domain.into()))
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn matches(&self, email: &str) -> bool {
        let email = email.trim().to_ascii_lowercase();
        let Some((local, domain)) = email.rsplit_once('@') else {
            return false;
        };

        if let Some(expected) = &self.domain {
            if domain != expected {
                return false;
            }
        }

        self.prefixes.iter().any(|prefix| local.starts_with(prefix.as_str()))
    }

    /// Classifies an optional email; accounts without one are never placeholders.
    pub fn is_placeholder(&self, email: Option<&str>) -> bool {
        email.is_some_and(|e| self.matches(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes_match_any_domain() {
        let pattern = PlaceholderPattern::default();
        assert!(pattern.matches("dummy123@club.example"));
        assert!(pattern.matches("web-app-77@other.example"));
        assert!(pattern.matches("DUMMY_kid@Club.Example"));
        assert!(!pattern.matches("jane@club.example"));
        assert!(!pattern.matches("mydummy@club.example"));
    }

    #[test]
    fn test_domain_pinned_pattern() {
        let pattern = PlaceholderPattern::for_domain("@club.example");
        assert_eq!(pattern.domain(), Some("club.example"));
        assert!(pattern.matches("dummy1@club.example"));
        assert!(!pattern.matches("dummy1@gmail.example"));
    }

    #[test]
    fn test_missing_or_malformed_email_is_not_placeholder() {
        let pattern = PlaceholderPattern::default();
        assert!(!pattern.is_placeholder(None));
        assert!(!pattern.is_placeholder(Some("dummy-without-at-sign")));
        assert!(pattern.is_placeholder(Some("  dummy9@club.example ")));
    }
}
