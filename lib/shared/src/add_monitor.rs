//! Two-step "add monitor" form: URL first, then the admin password.

use crate::monitor::CreateMonitor;

pub const URL_REQUIRED: &str = "Please enter a URL";
pub const PASSWORD_REQUIRED: &str = "Please enter the password";
pub const CREATE_FAILED: &str = "Failed to add monitor";
pub const MONITOR_ADDED: &str = "Monitor added and checked successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    EnteringUrl,
    AwaitingPassword,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddMonitorFlow {
    url: String,
    password: String,
    phase: FormPhase,
    error: Option<String>,
}

impl AddMonitorFlow {
    pub fn set_url(&mut self, url: String) {
        if self.phase != FormPhase::Submitting {
            self.url = url;
        }
    }

    pub fn set_password(&mut self, password: String) {
        if self.phase != FormPhase::Submitting {
            self.password = password;
        }
    }

    /// Moves to the password prompt if a URL was entered.
    pub fn submit_url(&mut self) -> bool {
        if self.phase != FormPhase::EnteringUrl {
            return false;
        }
        if self.url.trim().is_empty() {
            self.error = Some(URL_REQUIRED.to_string());
            return false;
        }

        self.error = None;
        self.phase = FormPhase::AwaitingPassword;
        true
    }

    /// Validates the password and, if present, returns the request to send.
    pub fn submit_password(&mut self, check_interval: u32) -> Option<CreateMonitor> {
        if self.phase != FormPhase::AwaitingPassword {
            return None;
        }
        let password = self.password.trim();
        if password.is_empty() {
            self.error = Some(PASSWORD_REQUIRED.to_string());
            return None;
        }

        let request = CreateMonitor {
            url: self.url.trim().to_string(),
            check_interval,
            password: Some(password.to_string()),
        };
        self.error = None;
        self.phase = FormPhase::Submitting;
        Some(request)
    }

    /// Back to the password prompt with the backend's message, or a generic one.
    pub fn creation_failed(&mut self, message: Option<String>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| CREATE_FAILED.to_string());
        self.error = Some(message);
        self.phase = FormPhase::AwaitingPassword;
    }

    pub fn creation_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Closes the password prompt, discarding what was typed.
    pub fn cancel(&mut self) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        *self = Self::default();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.phase != FormPhase::EnteringUrl
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_password_prompt(url: &str) -> AddMonitorFlow {
        let mut flow = AddMonitorFlow::default();
        flow.set_url(url.into());
        assert!(flow.submit_url());
        flow
    }

    #[test]
    fn empty_url_stays_in_first_step() {
        let mut flow = AddMonitorFlow::default();
        flow.set_url("   ".into());

        assert!(!flow.submit_url());
        assert_eq!(flow.phase(), FormPhase::EnteringUrl);
        assert_eq!(flow.error(), Some(URL_REQUIRED));
        assert!(!flow.is_dialog_open());
    }

    #[test]
    fn url_opens_password_prompt_and_clears_error() {
        let mut flow = AddMonitorFlow::default();
        flow.submit_url();
        flow.set_url("https://example.com".into());

        assert!(flow.submit_url());
        assert_eq!(flow.phase(), FormPhase::AwaitingPassword);
        assert_eq!(flow.error(), None);
        assert!(flow.is_dialog_open());
    }

    #[test]
    fn empty_password_is_rejected() {
        let mut flow = at_password_prompt("https://example.com");

        assert_eq!(flow.submit_password(60), None);
        assert_eq!(flow.error(), Some(PASSWORD_REQUIRED));
        assert_eq!(flow.phase(), FormPhase::AwaitingPassword);
    }

    #[test]
    fn submit_builds_trimmed_request() {
        let mut flow = at_password_prompt("  https://example.com  ");
        flow.set_password(" s3cret ".into());

        let request = flow.submit_password(60).unwrap();

        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.check_interval, 60);
        assert_eq!(request.password.as_deref(), Some("s3cret"));
        assert!(flow.is_submitting());
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut flow = at_password_prompt("https://example.com");
        flow.set_password("pw".into());

        assert!(flow.submit_password(60).is_some());
        assert!(flow.submit_password(60).is_none());
        flow.set_password("changed".into());
        assert_eq!(flow.password(), "pw");
    }

    #[test]
    fn rejection_surfaces_server_message() {
        let mut flow = at_password_prompt("https://example.com");
        flow.set_password("wrong".into());
        flow.submit_password(60);

        flow.creation_failed(Some("Invalid password".into()));

        assert_eq!(flow.phase(), FormPhase::AwaitingPassword);
        assert_eq!(flow.error(), Some("Invalid password"));
        // password kept so the user can fix it
        assert_eq!(flow.password(), "wrong");
        assert_eq!(flow.url(), "https://example.com");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        for message in [None, Some(String::new())] {
            let mut flow = at_password_prompt("https://example.com");
            flow.set_password("pw".into());
            flow.submit_password(60);

            flow.creation_failed(message);

            assert_eq!(flow.error(), Some(CREATE_FAILED));
        }
    }

    #[test]
    fn retry_after_rejection() {
        let mut flow = at_password_prompt("https://example.com");
        flow.set_password("wrong".into());
        flow.submit_password(60);
        flow.creation_failed(None);

        flow.set_password("right".into());
        let request = flow.submit_password(60).unwrap();

        assert_eq!(request.password.as_deref(), Some("right"));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn success_resets_everything() {
        let mut flow = at_password_prompt("https://example.com");
        flow.set_password("pw".into());
        flow.submit_password(60);

        flow.creation_succeeded();

        assert_eq!(flow, AddMonitorFlow::default());
    }

    #[test]
    fn cancel_discards_password_and_error() {
        let mut flow = at_password_prompt("https://example.com");
        flow.set_password("pw".into());
        flow.submit_password(60);
        flow.creation_failed(Some("nope".into()));

        flow.cancel();

        assert_eq!(flow.phase(), FormPhase::EnteringUrl);
        assert_eq!(flow.password(), "");
        assert_eq!(flow.error(), None);
        assert_eq!(flow.url(), "");
    }

    #[test]
    fn cancel_is_ignored_while_submitting() {
        let mut flow = at_password_prompt("https://example.com");
        flow.set_password("pw".into());
        flow.submit_password(60);

        flow.cancel();

        assert!(flow.is_submitting());
    }
}
