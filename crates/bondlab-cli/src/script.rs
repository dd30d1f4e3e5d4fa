use thiserror::Error;

/// One line of a session script.
///
/// Atoms are referred to by spawn ordinal: the n-th `spawn` line (zero
/// based) defines atom `n` for the rest of the script, even across a
/// `clear` (after which commands on it become engine-level no-ops,
/// mirroring how stale drag events behave in the GUI).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `spawn SYM X Y`
    Spawn { symbol: String, x: f64, y: f64 },
    /// `move N X Y` - reposition without a drag gesture.
    Move { atom: usize, x: f64, y: f64 },
    /// `drag N X Y` - begin (or continue) dragging atom N at (X, Y).
    Drag { atom: usize, x: f64, y: f64 },
    /// `release N` - end the drag gesture, triggering electron layout.
    Release { atom: usize },
    /// `cancel N` - abort the drag gesture; lays out like `release`.
    Cancel { atom: usize },
    /// `clear`
    Clear,
    /// `forces on|off`
    Forces(bool),
    /// `step N` - advance N frames.
    Step(u32),
    /// `dump` - print the current frame snapshot.
    Dump,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },

    #[error("line {line}: '{command}' expects {expected} argument(s), got {got}")]
    BadArity {
        line: usize,
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: '{value}' is not a valid {kind}")]
    BadValue {
        line: usize,
        value: String,
        kind: &'static str,
    },
}

fn parse_number<T: std::str::FromStr>(
    token: &str,
    line: usize,
    kind: &'static str,
) -> Result<T, ScriptError> {
    token.parse().map_err(|_| ScriptError::BadValue {
        line,
        value: token.to_string(),
        kind,
    })
}

fn expect_arity(
    line: usize,
    command: &'static str,
    expected: usize,
    args: &[&str],
) -> Result<(), ScriptError> {
    if args.len() != expected {
        return Err(ScriptError::BadArity {
            line,
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Parses a whole script. Blank lines and `#` comments are skipped;
/// errors carry one-based line numbers.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        let word = tokens.next().expect("non-empty line has a first token");
        let args: Vec<&str> = tokens.collect();

        let command = match word {
            "spawn" => {
                expect_arity(line, "spawn", 3, &args)?;
                Command::Spawn {
                    symbol: args[0].to_string(),
                    x: parse_number(args[1], line, "number")?,
                    y: parse_number(args[2], line, "number")?,
                }
            }
            "move" => {
                expect_arity(line, "move", 3, &args)?;
                Command::Move {
                    atom: parse_number(args[0], line, "atom ordinal")?,
                    x: parse_number(args[1], line, "number")?,
                    y: parse_number(args[2], line, "number")?,
                }
            }
            "drag" => {
                expect_arity(line, "drag", 3, &args)?;
                Command::Drag {
                    atom: parse_number(args[0], line, "atom ordinal")?,
                    x: parse_number(args[1], line, "number")?,
                    y: parse_number(args[2], line, "number")?,
                }
            }
            "release" => {
                expect_arity(line, "release", 1, &args)?;
                Command::Release {
                    atom: parse_number(args[0], line, "atom ordinal")?,
                }
            }
            "cancel" => {
                expect_arity(line, "cancel", 1, &args)?;
                Command::Cancel {
                    atom: parse_number(args[0], line, "atom ordinal")?,
                }
            }
            "clear" => {
                expect_arity(line, "clear", 0, &args)?;
                Command::Clear
            }
            "forces" => {
                expect_arity(line, "forces", 1, &args)?;
                match args[0] {
                    "on" => Command::Forces(true),
                    "off" => Command::Forces(false),
                    other => {
                        return Err(ScriptError::BadValue {
                            line,
                            value: other.to_string(),
                            kind: "forces flag (on|off)",
                        });
                    }
                }
            }
            "step" => {
                expect_arity(line, "step", 1, &args)?;
                Command::Step(parse_number(args[0], line, "frame count")?)
            }
            "dump" => {
                expect_arity(line, "dump", 0, &args)?;
                Command::Dump
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    word: other.to_string(),
                });
            }
        };
        commands.push(command);
    }
    Ok(commands)
}
