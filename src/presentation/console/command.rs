// src/presentation/console/command.rs
use crate::domain::FieldKind;
use std::str::FromStr;
use thiserror::Error;

/// One input event for the screen, read from a console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    SetText { field: FieldKind, text: String },
    ToggleVisibility,
    OpenPolicy,
    ClosePolicy,
    Submit,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(String),
}

impl FromStr for ScreenCommand {
    type Err = CommandError;

    /// `email <text>` and `password <text>` keep everything after the first
    /// space verbatim, so `email ` clears the field.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (line, None),
        };

        if let Ok(field) = verb.parse::<FieldKind>() {
            return Ok(ScreenCommand::SetText {
                field,
                text: rest.unwrap_or_default().to_string(),
            });
        }

        let command = match verb {
            "toggle" => ScreenCommand::ToggleVisibility,
            "policy" => ScreenCommand::OpenPolicy,
            "close" => ScreenCommand::ClosePolicy,
            "submit" => ScreenCommand::Submit,
            "quit" | "exit" => ScreenCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match rest {
            Some(rest) if !rest.trim().is_empty() => {
                Err(CommandError::UnexpectedArgument(verb.to_string()))
            }
            _ => Ok(command),
        }
    }
}
