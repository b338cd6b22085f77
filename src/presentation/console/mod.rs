// src/presentation/console/mod.rs
pub mod command;
pub mod renderer;

pub use command::{CommandError, ScreenCommand};
pub use renderer::{BufferSink, ConsoleRenderer, LineSink, StdoutSink};

use crate::application::dto::PolicySnapshotDto;
use crate::application::services::SignUpScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one console line to the screen. State changes reach the sink through
/// the renderer's subscriptions; replies that are not signals (policy rows,
/// visibility, submit outcome, errors) are written here.
pub fn handle_line(
    screen: &mut SignUpScreen,
    renderer: &ConsoleRenderer,
    sink: &dyn LineSink,
    line: &str,
) -> Flow {
    let command = match line.parse::<ScreenCommand>() {
        Ok(command) => command,
        Err(CommandError::Empty) => return Flow::Continue,
        Err(err) => {
            tracing::debug!(error = %err, "ignoring console input");
            sink.write_line(renderer.error(&err.to_string()));
            return Flow::Continue;
        }
    };

    match command {
        ScreenCommand::SetText { field, text } => {
            screen.set_text(field, Some(&text));
        }
        ScreenCommand::ToggleVisibility => {
            let secure = screen.toggle_password_visibility();
            sink.write_line(renderer.visibility(secure));
        }
        ScreenCommand::OpenPolicy => match screen.open_password_policy() {
            Ok(snapshot) => {
                let dto = PolicySnapshotDto::from(snapshot);
                for line in renderer.policy(&dto) {
                    sink.write_line(line);
                }
            }
            Err(err) => sink.write_line(renderer.error(&err.to_string())),
        },
        ScreenCommand::ClosePolicy => {
            if let Err(err) = screen.dismiss_password_policy() {
                sink.write_line(renderer.error(&err.to_string()));
            }
        }
        ScreenCommand::Submit => {
            let accepted = screen.submit();
            sink.write_line(renderer.submitted(accepted));
        }
        ScreenCommand::Quit => return Flow::Quit,
    }

    Flow::Continue
}
