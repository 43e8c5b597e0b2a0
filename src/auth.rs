//! Login gate against the configured credential allow-list.
//!
//! Deliberately a placeholder, not a security boundary: plain-text exact
//! matching, no session token, nothing survives a restart.

use crate::config::Account;

/// Single message for any failed attempt, so the response never reveals
/// whether the email or the password was wrong.
pub const LOGIN_FAILED_MSG: &str = "Invalid email or password";

/// Checks submitted credentials against the static allow-list.
#[derive(Debug, Clone)]
pub struct SessionGate {
    accounts: Vec<Account>,
}

impl SessionGate {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Exact email/password match against any configured account.
    pub fn authorize(&self, email: &str, password: &str) -> bool {
        let ok = self
            .accounts
            .iter()
            .any(|a| a.email == email && a.password == password);
        if ok {
            tracing::info!("Login accepted for {}", email);
        } else {
            tracing::warn!("Login rejected for {}", email);
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new(vec![
            Account {
                email: "admin@crewdesk.local".to_string(),
                password: "ChangeMe123".to_string(),
            },
            Account {
                email: "hr@crewdesk.local".to_string(),
                password: "Secret456".to_string(),
            },
        ])
    }

    #[test]
    fn test_matching_credentials_authorize() {
        assert!(gate().authorize("hr@crewdesk.local", "Secret456"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        assert!(!gate().authorize("admin@crewdesk.local", "wrong"));
    }

    #[test]
    fn test_unknown_email_rejected() {
        assert!(!gate().authorize("nobody@crewdesk.local", "ChangeMe123"));
    }

    #[test]
    fn test_match_is_exact() {
        assert!(!gate().authorize("Admin@crewdesk.local", "ChangeMe123"));
        assert!(!gate().authorize(" admin@crewdesk.local", "ChangeMe123"));
    }

    #[test]
    fn test_empty_allow_list_rejects_everything() {
        let gate = SessionGate::new(Vec::new());
        assert!(!gate.authorize("", ""));
    }
}
