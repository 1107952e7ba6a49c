use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Travel policy parameters.
///
/// These were compile-time constants in earlier revisions; they are now
/// injected so callers and tests can run against arbitrary policy windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPolicy {
    /// First day of the policy window
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Annual allowance in travel days
    #[serde(default = "default_limit_days")]
    pub limit_days: i64,

    /// Per-employee day count at which usage is flagged as close to the limit
    #[serde(default = "default_warn_threshold_days")]
    pub warn_threshold_days: i64,

    /// Emails allowed to access the dashboard. Empty means unrestricted.
    #[serde(default)]
    pub authorized_emails: Vec<String>,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()
}

fn default_limit_days() -> i64 {
    250
}

fn default_warn_threshold_days() -> i64 {
    200
}

impl Default for TravelPolicy {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            limit_days: default_limit_days(),
            warn_threshold_days: default_warn_threshold_days(),
            authorized_emails: Vec::new(),
        }
    }
}

impl TravelPolicy {
    /// Check an email against the allow-list.
    ///
    /// Comparison ignores case and surrounding whitespace. An empty
    /// allow-list grants access to everyone.
    pub fn is_authorized(&self, email: &str) -> bool {
        if self.authorized_emails.is_empty() {
            return true;
        }
        let needle = email.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.authorized_emails
            .iter()
            .any(|e| e.trim().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_with(emails: &[&str]) -> TravelPolicy {
        TravelPolicy {
            authorized_emails: emails.iter().map(|e| e.to_string()).collect(),
            ..TravelPolicy::default()
        }
    }

    #[test]
    fn test_empty_allow_list_is_open() {
        let policy = TravelPolicy::default();
        assert!(policy.is_authorized("anyone@example.com"));
    }

    #[test]
    fn test_allow_list_match_ignores_case_and_whitespace() {
        let policy = policy_with(&["sof@arrowship.com"]);
        assert!(policy.is_authorized("  SOF@Arrowship.com "));
        assert!(!policy.is_authorized("other@arrowship.com"));
    }

    #[test]
    fn test_blank_email_denied_when_restricted() {
        let policy = policy_with(&["sof@arrowship.com"]);
        assert!(!policy.is_authorized("   "));
    }

    #[test]
    fn test_defaults() {
        let policy = TravelPolicy::default();
        assert_eq!(policy.start_date, NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
        assert_eq!(policy.limit_days, 250);
        assert_eq!(policy.warn_threshold_days, 200);
    }
}
