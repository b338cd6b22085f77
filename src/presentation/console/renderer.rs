// src/presentation/console/renderer.rs
use crate::application::dto::{FieldValidityState, FormValidityState, PolicySnapshotDto, SubmitDirective};
use crate::application::services::SignUpScreen;
use crate::application::signal::Subscription;
use crate::config::OutputFormat;
use crate::domain::FieldKind;
use crate::presentation::theme::Theme;
use serde_json::json;
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for rendered lines.
pub trait LineSink: Send + Sync {
    fn write_line(&self, line: String);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: String) {
        println!("{line}");
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LineSink for BufferSink {
    fn write_line(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

/// Turns emitted screen state into text or JSON lines.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer {
    format: OutputFormat,
    theme: Theme,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, theme: Theme) -> Self {
        Self { format, theme }
    }

    pub fn field(&self, state: &FieldValidityState) -> String {
        let style = self.theme.field_style(&state.directive());
        match self.format {
            OutputFormat::Json => json!({
                "event": "field",
                "field": state.field,
                "is_empty": state.is_empty,
                "is_valid": state.is_valid,
                "style": style,
            })
            .to_string(),
            OutputFormat::Text => match (style.icon, style.message) {
                (Some(icon), Some(message)) => {
                    format!("[{}] {} {} ({})", state.field, icon, message, style.text_color)
                }
                _ => format!("[{}] (empty)", state.field),
            },
        }
    }

    pub fn form(&self, state: &FormValidityState) -> String {
        match self.format {
            OutputFormat::Json => json!({ "event": "form", "state": state }).to_string(),
            OutputFormat::Text => format!(
                "[form] email={} password={} submit={}",
                state.email_valid,
                state.password_valid,
                if state.submit_enabled { "enabled" } else { "disabled" }
            ),
        }
    }

    pub fn transition(&self, directive: SubmitDirective) -> String {
        let style = self.theme.submit_style(directive);
        match self.format {
            OutputFormat::Json => json!({ "event": "submit_transition", "style": style }).to_string(),
            OutputFormat::Text => format!(
                "[submit] {} background={} title={} over {}ms",
                if style.enabled { "highlight" } else { "dim" },
                style.background,
                style.title_color,
                style.transition_ms
            ),
        }
    }

    pub fn policy(&self, snapshot: &PolicySnapshotDto) -> Vec<String> {
        match self.format {
            OutputFormat::Json => vec![json!({ "event": "policy", "snapshot": snapshot }).to_string()],
            OutputFormat::Text => {
                let mut lines = vec!["[policy] Password Policy".to_string()];
                lines.extend(snapshot.rows.iter().map(|row| {
                    format!("[policy] {} {}", self.theme.rule_icon(row.passed), row.message)
                }));
                lines
            }
        }
    }

    pub fn dismissed(&self) -> String {
        match self.format {
            OutputFormat::Json => json!({ "event": "policy_dismissed" }).to_string(),
            OutputFormat::Text => "[policy] closed".to_string(),
        }
    }

    pub fn visibility(&self, secure_entry: bool) -> String {
        let icon = self.theme.visibility_icon(secure_entry);
        match self.format {
            OutputFormat::Json => json!({
                "event": "visibility",
                "field": FieldKind::Password,
                "secure_entry": secure_entry,
                "icon": icon,
            })
            .to_string(),
            OutputFormat::Text => format!(
                "[password] {} {}",
                icon,
                if secure_entry { "hidden" } else { "visible" }
            ),
        }
    }

    pub fn submitted(&self, accepted: bool) -> String {
        match self.format {
            OutputFormat::Json => json!({ "event": "submit", "accepted": accepted }).to_string(),
            OutputFormat::Text => {
                let outcome = if accepted { "accepted" } else { "rejected" };
                format!("[submit] {outcome}")
            }
        }
    }

    pub fn error(&self, message: &str) -> String {
        match self.format {
            OutputFormat::Json => json!({ "event": "error", "message": message }).to_string(),
            OutputFormat::Text => format!("[error] {message}"),
        }
    }

    /// Subscribe to every signal the screen emits, writing one line per emission.
    pub fn attach(&self, screen: &SignUpScreen, sink: Arc<dyn LineSink>) -> Vec<Subscription> {
        let mut subscriptions = Vec::new();

        for kind in [FieldKind::Email, FieldKind::Password] {
            let renderer = *self;
            let sink = Arc::clone(&sink);
            subscriptions.push(
                screen
                    .field(kind)
                    .on_state(move |state| sink.write_line(renderer.field(state))),
            );
        }

        {
            let renderer = *self;
            let sink = Arc::clone(&sink);
            subscriptions.push(
                screen
                    .form()
                    .on_state(move |state| sink.write_line(renderer.form(state))),
            );
        }

        {
            let renderer = *self;
            let sink = Arc::clone(&sink);
            subscriptions.push(
                screen
                    .form()
                    .on_transition(move |directive| sink.write_line(renderer.transition(*directive))),
            );
        }

        {
            let renderer = *self;
            subscriptions.push(
                screen
                    .policy_modal()
                    .on_dismiss(move || sink.write_line(renderer.dismissed())),
            );
        }

        subscriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::DEFAULT_THEME;

    fn text() -> ConsoleRenderer {
        ConsoleRenderer::new(OutputFormat::Text, DEFAULT_THEME)
    }

    #[test]
    fn renders_empty_field_as_neutral() {
        let state = FieldValidityState::evaluate(FieldKind::Email, Some(""));
        assert_eq!(text().field(&state), "[email] (empty)");
    }

    #[test]
    fn renders_invalid_field_with_message() {
        let state = FieldValidityState::evaluate(FieldKind::Password, Some("ab"));
        assert_eq!(
            text().field(&state),
            "[password] xmark.circle.fill Your password is too short. (#9d0208)"
        );
    }

    #[test]
    fn renders_json_field() {
        let renderer = ConsoleRenderer::new(OutputFormat::Json, DEFAULT_THEME);
        let state = FieldValidityState::evaluate(FieldKind::Email, Some("a@b.co"));
        let value: serde_json::Value = serde_json::from_str(&renderer.field(&state)).unwrap();
        assert_eq!(value["event"], "field");
        assert_eq!(value["field"], "email");
        assert_eq!(value["is_valid"], true);
        assert_eq!(value["style"]["message"], "The email looks correct!");
    }

    #[test]
    fn renders_submit_outcome() {
        assert_eq!(text().submitted(true), "[submit] accepted");
        assert_eq!(text().submitted(false), "[submit] rejected");
    }

    #[test]
    fn renders_form_state() {
        assert_eq!(
            text().form(&FormValidityState::new(true, false)),
            "[form] email=true password=false submit=disabled"
        );
    }
}
