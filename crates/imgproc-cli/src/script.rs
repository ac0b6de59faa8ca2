//! Command language for the interactive shell and script runner.
//!
//! One command per line. Tokens are separated by whitespace or commas and the
//! command word is case-insensitive:
//!
//! ```text
//! # comments and blank lines are skipped
//! set-source images/
//! load koala.ppm koala
//! brighten 10 koala koala-bright
//! horizontal-flip koala-bright koala-mirror
//! save koala-mirror.ppm koala-mirror
//! quit
//! ```

use anyhow::{Result, anyhow, bail};
use imgproc_ops::Operation;
use std::path::PathBuf;

/// Menu shown at the start of an interactive session and by `help`.
pub const MENU: &str = "\
Operations:
load image-path image-name
save image-path image-name
red-component image-name destination
green-component image-name destination
blue-component image-name destination
value-component image-name destination
luma-component image-name destination
intensity-component image-name destination
brighten num image-name destination
horizontal-flip image-name destination
vertical-flip image-name destination
set-source directory
info image-name
list
help
q";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read a P3 file into the registry.
    Load { path: PathBuf, name: String },
    /// Write a registered image to a P3 file.
    Save { path: PathBuf, name: String },
    /// Run a catalog operation.
    Apply { op: Operation, source: String, dest: String },
    /// Change the directory `load` and `save` resolve against.
    SetSource(PathBuf),
    /// Print a summary of a registered image.
    Info(String),
    /// Print every registered name.
    List,
    Help,
    Quit,
}

/// Splits a line on whitespace and commas.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parses one line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return Ok(None);
    }
    let tokens = tokenize(trimmed);
    match tokens.split_first() {
        None => Ok(None),
        Some((word, args)) => Command::parse(word, args).map(Some),
    }
}

impl Command {
    /// Builds a command from its word and argument tokens.
    pub fn parse(word: &str, args: &[&str]) -> Result<Self> {
        let word = word.to_ascii_lowercase();
        let mut args = Args::new(&word, args);

        let cmd = match word.as_str() {
            "load" => Command::Load {
                path: args.next("image-path")?.into(),
                name: args.next("image-name")?.to_string(),
            },
            "save" => Command::Save {
                path: args.next("image-path")?.into(),
                name: args.next("image-name")?.to_string(),
            },
            "set-source" => Command::SetSource(args.next("directory")?.into()),
            "info" => Command::Info(args.next("image-name")?.to_string()),
            "list" => Command::List,
            "help" => Command::Help,
            "quit" | "q" => Command::Quit,
            "brighten" => {
                let raw = args.next("num")?;
                let delta = raw
                    .parse::<i32>()
                    .map_err(|_| anyhow!("brighten amount '{raw}' is not an integer"))?;
                Command::Apply {
                    op: Operation::Brighten { delta },
                    source: args.next("image-name")?.to_string(),
                    dest: args.next("destination")?.to_string(),
                }
            }
            other => {
                // Anything else must name a catalog operation.
                let op = Operation::parse(other, None)?;
                Command::Apply {
                    op,
                    source: args.next("image-name")?.to_string(),
                    dest: args.next("destination")?.to_string(),
                }
            }
        };

        args.finish()?;
        Ok(cmd)
    }
}

/// Positional argument cursor that names what is missing.
struct Args<'a> {
    word: &'a str,
    rest: std::slice::Iter<'a, &'a str>,
}

impl<'a> Args<'a> {
    fn new(word: &'a str, args: &'a [&'a str]) -> Self {
        Self {
            word,
            rest: args.iter(),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str> {
        self.rest
            .next()
            .copied()
            .ok_or_else(|| anyhow!("{} is missing <{what}>", self.word))
    }

    fn finish(mut self) -> Result<()> {
        if let Some(extra) = self.rest.next() {
            bail!("unexpected argument '{extra}' for {}", self.word);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgproc_core::Channel;

    fn parse(line: &str) -> Command {
        parse_line(line).unwrap().unwrap()
    }

    fn parse_err(line: &str) -> String {
        parse_line(line).unwrap_err().to_string()
    }

    #[test]
    fn test_tokenize_commas_and_spaces() {
        assert_eq!(tokenize("  load a.ppm,  koala\t"), vec!["load", "a.ppm", "koala"]);
        assert!(tokenize(" , ,").is_empty());
    }

    #[test]
    fn test_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("  # load a b").unwrap(), None);
    }

    #[test]
    fn test_parse_io_commands() {
        assert_eq!(
            parse("load res/koala.ppm koala"),
            Command::Load {
                path: "res/koala.ppm".into(),
                name: "koala".into()
            }
        );
        assert_eq!(
            parse("SAVE out.ppm koala"),
            Command::Save {
                path: "out.ppm".into(),
                name: "koala".into()
            }
        );
        assert_eq!(parse("set-source res/"), Command::SetSource("res/".into()));
    }

    #[test]
    fn test_parse_operations() {
        let cases = [
            ("red-component", Operation::Component(Channel::Red)),
            ("green-component", Operation::Component(Channel::Green)),
            ("blue-component", Operation::Component(Channel::Blue)),
            ("value-component", Operation::Value),
            ("luma-component", Operation::Luma),
            ("Intensity-Component", Operation::Intensity),
            ("horizontal-flip", Operation::FlipHorizontal),
            ("vertical-flip", Operation::FlipVertical),
        ];
        for (word, op) in cases {
            assert_eq!(
                parse(&format!("{word} src dst")),
                Command::Apply {
                    op,
                    source: "src".into(),
                    dest: "dst".into()
                }
            );
        }
    }

    #[test]
    fn test_parse_brighten() {
        assert_eq!(
            parse("brighten -25 koala dark"),
            Command::Apply {
                op: Operation::Brighten { delta: -25 },
                source: "koala".into(),
                dest: "dark".into()
            }
        );
        assert!(parse_err("brighten ten koala dark").contains("not an integer"));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse("info koala"), Command::Info("koala".into()));
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("Q"), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_err("sepia a b"), "unsupported operation: sepia");
        assert_eq!(parse_err("load a.ppm"), "load is missing <image-name>");
        assert_eq!(parse_err("vertical-flip a"), "vertical-flip is missing <destination>");
        assert_eq!(parse_err("list everything"), "unexpected argument 'everything' for list");
    }
}
