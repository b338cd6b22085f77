// src/presentation/theme.rs
//! Read-only style configuration for the sign-up screen.

use crate::application::dto::{FieldDirective, SubmitDirective};
use serde::Serialize;
use std::{fmt, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub valid: Rgb,
    pub invalid: Rgb,
    pub neutral: Rgb,
    pub submit_enabled_background: Rgb,
    pub submit_disabled_background: Rgb,
    pub submit_enabled_title: Rgb,
    pub submit_disabled_title: Rgb,
    pub correct_icon: &'static str,
    pub wrong_icon: &'static str,
    pub close_icon: &'static str,
    pub eye_visible_icon: &'static str,
    pub eye_hidden_icon: &'static str,
    pub transition: Duration,
}

pub static DEFAULT_THEME: Theme = Theme {
    valid: Rgb::new(80, 114, 85),
    invalid: Rgb::new(157, 2, 8),
    neutral: Rgb::new(199, 199, 204),
    submit_enabled_background: Rgb::new(255, 204, 0),
    submit_disabled_background: Rgb::new(199, 199, 204),
    submit_enabled_title: Rgb::new(0, 0, 0),
    submit_disabled_title: Rgb::new(255, 255, 255),
    correct_icon: "checkmark.circle.fill",
    wrong_icon: "xmark.circle.fill",
    close_icon: "xmark",
    eye_visible_icon: "eye.fill",
    eye_hidden_icon: "eye.slash.fill",
    transition: Duration::from_millis(400),
};

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldStyle {
    pub text_color: Rgb,
    pub underline_color: Rgb,
    pub icon: Option<&'static str>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitStyle {
    pub enabled: bool,
    pub background: Rgb,
    pub title_color: Rgb,
    pub transition_ms: u64,
}

impl Theme {
    pub fn with_transition(self, transition: Duration) -> Self {
        Self { transition, ..self }
    }

    pub fn field_style(&self, directive: &FieldDirective) -> FieldStyle {
        match directive {
            FieldDirective::Neutral => FieldStyle {
                text_color: self.neutral,
                underline_color: self.neutral,
                icon: None,
                message: None,
            },
            FieldDirective::Valid { message } => FieldStyle {
                text_color: self.valid,
                underline_color: self.valid,
                icon: Some(self.correct_icon),
                message: Some(message.clone()),
            },
            FieldDirective::Invalid { message } => FieldStyle {
                text_color: self.invalid,
                underline_color: self.invalid,
                icon: Some(self.wrong_icon),
                message: Some(message.clone()),
            },
        }
    }

    pub fn submit_style(&self, directive: SubmitDirective) -> SubmitStyle {
        let (background, title_color) = if directive.enabled {
            (self.submit_enabled_background, self.submit_enabled_title)
        } else {
            (self.submit_disabled_background, self.submit_disabled_title)
        };
        SubmitStyle {
            enabled: directive.enabled,
            background,
            title_color,
            transition_ms: u64::try_from(self.transition.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn rule_color(&self, passed: bool) -> Rgb {
        if passed { self.valid } else { self.invalid }
    }

    pub fn rule_icon(&self, passed: bool) -> &'static str {
        if passed { self.correct_icon } else { self.wrong_icon }
    }

    pub fn visibility_icon(&self, secure_entry: bool) -> &'static str {
        if secure_entry {
            self.eye_hidden_icon
        } else {
            self.eye_visible_icon
        }
    }
}
