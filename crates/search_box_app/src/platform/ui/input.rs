//! Line-based input surface.
//!
//! A plain line replaces the textbox content. Lines starting with `:` drive
//! the pointer: `:enter ROW X Y`, `:move ROW X Y`, `:leave ROW`,
//! `:click ROW`, plus `:clear` and `:quit`. A leading `::` types a literal
//! colon.

use std::io::BufRead;
use std::str::FromStr;
use std::sync::mpsc;
use std::thread;

use pipeline_logging::pipeline_warn;
use search_box_core::{Msg, Point, PointerEvent};

use crate::platform::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command `:{0}`")]
    UnknownCommand(String),
    #[error("`:{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
}

pub(crate) fn parse_line(line: &str) -> Result<AppEvent, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(literal) = line.strip_prefix("::") {
        return Ok(AppEvent::Core(Msg::InputChanged(format!(":{literal}"))));
    }
    let Some(command) = line.strip_prefix(':') else {
        return Ok(AppEvent::Core(Msg::InputChanged(line.to_string())));
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let event = match name {
        "quit" | "q" => return Ok(AppEvent::Quit),
        "clear" => return Ok(AppEvent::Core(Msg::InputChanged(String::new()))),
        "enter" => {
            let [row, x, y] = expect_args::<3>(&args, "enter", "ROW X Y")?;
            pointer(row, PointerEvent::Enter(point(x, y)?))?
        }
        "move" => {
            let [row, x, y] = expect_args::<3>(&args, "move", "ROW X Y")?;
            pointer(row, PointerEvent::Move(point(x, y)?))?
        }
        "leave" => {
            let [row] = expect_args::<1>(&args, "leave", "ROW")?;
            pointer(row, PointerEvent::Leave)?
        }
        "click" => {
            let [row] = expect_args::<1>(&args, "click", "ROW")?;
            pointer(row, PointerEvent::Click)?
        }
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(AppEvent::Core(event))
}

/// Reads stdin on a background thread until EOF or `:quit`.
pub(crate) fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    pipeline_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            match parse_line(&line) {
                Ok(event) => {
                    let quit = event == AppEvent::Quit;
                    if tx.send(event).is_err() || quit {
                        return;
                    }
                }
                Err(err) => pipeline_warn!("ignored input: {}", err),
            }
        }
        let _ = tx.send(AppEvent::Quit);
    });
}

fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    command: &'static str,
    expected: &'static str,
) -> Result<[&'a str; N], InputError> {
    <[&str; N]>::try_from(args).map_err(|_| InputError::MissingArgument { command, expected })
}

fn pointer(row: &str, event: PointerEvent) -> Result<Msg, InputError> {
    Ok(Msg::Pointer {
        row: number(row)?,
        event,
    })
}

fn point(x: &str, y: &str) -> Result<Point, InputError> {
    Ok(Point::new(number(x)?, number(y)?))
}

fn number<T: FromStr>(word: &str) -> Result<T, InputError> {
    word.parse()
        .map_err(|_| InputError::InvalidNumber(word.to_string()))
}
