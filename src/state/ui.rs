// UI state - presentation settings and transient messages
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    pub root_input: String,
    pub search_input: String,
    pub replace_input: String,
    pub focus_search: bool,
}

impl UIState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            error_message: None,
            info_message: None,
            root_input: String::new(),
            search_input: String::new(),
            replace_input: String::new(),
            focus_search: true,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.info_message = None;
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.error_message = None;
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_replace_each_other() {
        let mut ui = UIState::new(Theme::Light);
        ui.set_error("Rename failed".into());
        ui.set_info("Renamed 2 item(s)".into());
        assert!(ui.error_message.is_none());
        assert_eq!(ui.info_message.as_ref().map(|(m, _)| m.as_str()), Some("Renamed 2 item(s)"));
    }

    #[test]
    fn test_expired_messages_cleared() {
        let mut ui = UIState::new(Theme::Dark);
        ui.set_error("boom".into());
        ui.clear_expired_messages(0);
        assert!(ui.error_message.is_none());
    }
}
