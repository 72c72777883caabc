//! Plain-text session scripts for driving the runner headlessly
//!
//! One command per line; `#` starts a comment:
//!
//! ```text
//! tap w            # press, run one tick, release
//! press d          # hold until released
//! tick 3
//! release d
//! mode ui
//! wait 2.5         # run ticks until 2.5 seconds have passed
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use super::input::{KeyCode, Mode, ParseKeyError, ParseModeError};

/// Session that walks the whole tutorial and visits every mode
pub const DEMO_SCRIPT: &str = "\
# Movement: every direction, with a duplicate up
tap w
tap up
tap s
tap a
tap d
wait 2.5

# Dispatch follows the active mode
mode ui
press down
tick
release down
tap e
mode cutscene
tap space
tap e
mode dialog
tap right e
mode gameplay

# Combat: attack and block
tap lmb
tap rmb
wait 2.5

# Inventory: selecting before opening does nothing
tap space
tap i
tap space
wait 3.5
";

/// Longest duration a single `wait` may cover
pub const MAX_WAIT: Duration = Duration::from_secs(60 * 60);

/// A single script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Press(Vec<KeyCode>),
    Release(Vec<KeyCode>),
    /// Press, run one tick, release
    Tap(Vec<KeyCode>),
    Mode(Mode),
    Tick(u32),
    Wait(Duration),
}

/// Errors produced while loading or parsing a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument { line: usize, command: &'static str },

    #[error("line {line}: {source}")]
    InvalidKey {
        line: usize,
        #[source]
        source: ParseKeyError,
    },

    #[error("line {line}: {source}")]
    InvalidMode {
        line: usize,
        #[source]
        source: ParseModeError,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
}

/// A parsed sequence of commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// The built-in demo session
    pub fn demo() -> Self {
        // The demo text is fixed and covered by tests
        DEMO_SCRIPT.parse().unwrap_or_default()
    }

    /// Reads and parses a script file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

fn parse_keys<'a>(
    line: usize,
    command: &'static str,
    args: impl Iterator<Item = &'a str>,
) -> Result<Vec<KeyCode>, ScriptError> {
    let keys = args
        .map(|arg| {
            arg.parse::<KeyCode>()
                .map_err(|source| ScriptError::InvalidKey { line, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if keys.is_empty() {
        return Err(ScriptError::MissingArgument { line, command });
    }
    Ok(keys)
}

fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = text.split('#').next().unwrap_or_default().trim();
    let mut words = text.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let command = match command.to_ascii_lowercase().as_str() {
        "press" => Command::Press(parse_keys(line, "press", words)?),
        "release" => Command::Release(parse_keys(line, "release", words)?),
        "tap" => Command::Tap(parse_keys(line, "tap", words)?),
        "mode" => {
            let name = words.next().ok_or(ScriptError::MissingArgument {
                line,
                command: "mode",
            })?;
            let mode = name
                .parse()
                .map_err(|source| ScriptError::InvalidMode { line, source })?;
            Command::Mode(mode)
        }
        "tick" => match words.next() {
            None => Command::Tick(1),
            Some(value) => Command::Tick(value.parse().map_err(|_| ScriptError::InvalidNumber {
                line,
                value: value.to_string(),
            })?),
        },
        "wait" => {
            let value = words.next().ok_or(ScriptError::MissingArgument {
                line,
                command: "wait",
            })?;
            let secs = value
                .parse::<f64>()
                .ok()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .filter(|wait| *wait <= MAX_WAIT)
                .ok_or_else(|| ScriptError::InvalidNumber {
                    line,
                    value: value.to_string(),
                })?;
            Command::Wait(secs)
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };

    Ok(Some(command))
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut commands = Vec::new();
        for (index, text) in s.lines().enumerate() {
            if let Some(command) = parse_line(index + 1, text)? {
                commands.push(command);
            }
        }
        Ok(Self { commands })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_script_parses() {
        let script: Script = DEMO_SCRIPT.parse().expect("demo script parses");
        assert!(!script.commands().is_empty());
        assert_eq!(script, Script::demo());
        assert_eq!(script.commands()[0], Command::Tap(vec![KeyCode::W]));
    }

    #[test]
    fn test_parse_commands() {
        let script: Script = "press w d\n\n  # comment\nrelease w\ntick\ntick 4\nmode Dialog\nwait 0.25 # pause"
            .parse()
            .expect("valid script");
        assert_eq!(
            script.commands(),
            &[
                Command::Press(vec![KeyCode::W, KeyCode::D]),
                Command::Release(vec![KeyCode::W]),
                Command::Tick(1),
                Command::Tick(4),
                Command::Mode(Mode::Dialog),
                Command::Wait(Duration::from_millis(250)),
            ]
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = "tick\njump".parse::<Script>().unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCommand { line: 2, .. }));

        let err = "tap".parse::<Script>().unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MissingArgument {
                line: 1,
                command: "tap"
            }
        ));

        let err = "\n\ntap q".parse::<Script>().unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown key 'q'");

        let err = "mode menu".parse::<Script>().unwrap_err();
        assert!(matches!(err, ScriptError::InvalidMode { line: 1, .. }));

        let err = "wait -1".parse::<Script>().unwrap_err();
        assert!(matches!(err, ScriptError::InvalidNumber { line: 1, .. }));
    }

    #[test]
    fn test_wait_is_capped() {
        let script: Script = "wait 3600".parse().unwrap();
        assert_eq!(script.commands(), &[Command::Wait(MAX_WAIT)]);

        let err = "tap w\nwait 1e12".parse::<Script>().unwrap_err();
        assert!(matches!(err, ScriptError::InvalidNumber { line: 2, .. }));
        assert_eq!(err.to_string(), "line 2: invalid number '1e12'");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Script::load("does/not/exist.script").unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }
}
