//! Boucle interactive : lecture de commandes, édition de la session,
//! déclenchement des rendus.
//!
//! Toute entrée invalide imprime un message et laisse la boucle en vie.

use std::io::Write;

use anyhow::Result;
use sg_core::config::{ComparisonPolicy, OutputTarget, SessionConfig};
use sg_render::{AsciiSink, ConsoleSink, HtmlSink};

use crate::pipeline::Engine;

const PROMPT: &str = ">>> ";
const MIN_CHARSET_SIZE: usize = 2;
const ASCII_FIRST: char = ' ';
const ASCII_LAST: char = '~';

const MSG_BAD_ADD: &str = "Did not add due to incorrect format.";
const MSG_BAD_REMOVE: &str = "Did not remove due to incorrect format.";
const MSG_RES_RANGE: &str = "Did not change resolution due to exceeding boundaries.";
const MSG_BAD_RES: &str = "Did not change resolution due to incorrect format.";
const MSG_BAD_ROUND: &str = "Did not change rounding method due to incorrect format.";
const MSG_BAD_OUTPUT: &str = "Did not change output method due to incorrect format.";
const MSG_CHARSET_SMALL: &str = "Did not execute. Charset is too small.";
const MSG_BAD_COMMAND: &str = "Did not execute due to incorrect command.";

/// Continuation de la boucle après une commande.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands.
    Continue,
    /// `exit` was entered.
    Exit,
}

/// Interactive session over one engine.
pub struct Repl {
    engine: Engine,
    target: OutputTarget,
    html_path: String,
}

impl Repl {
    /// Session starting from the configured output target.
    #[must_use]
    pub fn new(engine: Engine, config: &SessionConfig) -> Self {
        Self {
            engine,
            target: config.output,
            html_path: config.html_path.clone(),
        }
    }

    /// Read commands from stdin until `exit` or end of input.
    ///
    /// # Errors
    /// Returns an error only for stdin/stdout failures; invalid commands are
    /// reported inline and never terminate the loop.
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        let mut line = String::new();
        loop {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;
            line.clear();
            if stdin.read_line(&mut line)? == 0 {
                break; // EOF
            }
            let command = line.trim_end_matches(['\r', '\n']);
            if self.dispatch(command, &mut stdout)? == Outcome::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line, writing any output or message to `out`.
    ///
    /// # Errors
    /// Returns an error only when writing to `out` (or the HTML file) fails.
    pub fn dispatch(&mut self, line: &str, out: &mut impl Write) -> Result<Outcome> {
        if line == "exit" {
            return Ok(Outcome::Exit);
        }

        let mut tokens = line.split(' ');
        let command = tokens.next().unwrap_or("");
        let arg = tokens.next();

        match command {
            "chars" => {
                for ch in self.engine.chars() {
                    write!(out, "{ch} ")?;
                }
                writeln!(out)?;
            }
            "add" => self.add_remove(arg, true, out)?,
            "remove" => self.add_remove(arg, false, out)?,
            "res" => self.change_resolution(arg, out)?,
            "round" => self.change_rounding(arg, out)?,
            "output" => self.change_output(arg, out)?,
            "asciiArt" => self.render(out)?,
            _ => writeln!(out, "{MSG_BAD_COMMAND}")?,
        }
        Ok(Outcome::Continue)
    }

    fn add_remove(&mut self, arg: Option<&str>, add: bool, out: &mut impl Write) -> Result<()> {
        let message = if add { MSG_BAD_ADD } else { MSG_BAD_REMOVE };
        let Some(spec) = arg else {
            writeln!(out, "{message}")?;
            return Ok(());
        };
        match parse_char_spec(spec) {
            Some(CharSpec::Single(ch)) => self.apply(ch..=ch, add),
            Some(CharSpec::Range(lo, hi)) => self.apply(lo..=hi, add),
            Some(CharSpec::All) => self.apply(ASCII_FIRST..=ASCII_LAST, add),
            None => writeln!(out, "{message}")?,
        }
        Ok(())
    }

    fn apply(&mut self, range: std::ops::RangeInclusive<char>, add: bool) {
        for ch in range {
            if add {
                self.engine.add_char(ch);
            } else {
                self.engine.remove_char(ch);
            }
        }
    }

    fn change_resolution(&mut self, arg: Option<&str>, out: &mut impl Write) -> Result<()> {
        let current = self.engine.resolution();
        let requested = match arg {
            None => {
                writeln!(out, "Resolution set to {current}")?;
                return Ok(());
            }
            Some("up") => current * 2,
            Some("down") => current / 2,
            Some(_) => {
                writeln!(out, "{MSG_BAD_RES}")?;
                return Ok(());
            }
        };
        if self.engine.set_resolution(requested).is_err() {
            writeln!(out, "{MSG_RES_RANGE}")?;
        }
        Ok(())
    }

    fn change_rounding(&mut self, arg: Option<&str>, out: &mut impl Write) -> Result<()> {
        let policy = match arg {
            Some("abs") => ComparisonPolicy::ClosestAbsolute,
            Some("up") => ComparisonPolicy::ClosestHigher,
            Some("down") => ComparisonPolicy::ClosestLower,
            _ => {
                writeln!(out, "{MSG_BAD_ROUND}")?;
                return Ok(());
            }
        };
        self.engine.set_policy(policy);
        Ok(())
    }

    fn change_output(&mut self, arg: Option<&str>, out: &mut impl Write) -> Result<()> {
        match arg {
            Some("console") => self.target = OutputTarget::Console,
            Some("html") => self.target = OutputTarget::Html,
            _ => writeln!(out, "{MSG_BAD_OUTPUT}")?,
        }
        Ok(())
    }

    fn render(&mut self, out: &mut impl Write) -> Result<()> {
        if self.engine.charset_len() < MIN_CHARSET_SIZE {
            writeln!(out, "{MSG_CHARSET_SMALL}")?;
            return Ok(());
        }
        let grid = match self.engine.render() {
            Ok(grid) => grid,
            Err(err) => {
                log::error!("render failed: {err}");
                return Ok(());
            }
        };
        match self.target {
            OutputTarget::Console => ConsoleSink::new(&mut *out).emit(&grid),
            OutputTarget::Html => HtmlSink::new(self.html_path.clone()).emit(&grid),
        }
    }
}

/// Forme analysée de l'argument de `add`/`remove`.
enum CharSpec {
    Single(char),
    Range(char, char),
    All,
}

/// Parse the `add`/`remove` argument. A lone `-` is the literal dash; a
/// range may run in either direction. Characters outside printable ASCII
/// are rejected.
fn parse_char_spec(spec: &str) -> Option<CharSpec> {
    match spec {
        "all" => return Some(CharSpec::All),
        "space" => return Some(CharSpec::Single(' ')),
        "-" => return Some(CharSpec::Single('-')),
        _ => {}
    }
    if spec.contains('-') {
        let parts: Vec<&str> = spec.split('-').collect();
        let [start, end] = parts.as_slice() else {
            return None;
        };
        let (lo, hi) = (single_printable(start)?, single_printable(end)?);
        return Some(if lo <= hi {
            CharSpec::Range(lo, hi)
        } else {
            CharSpec::Range(hi, lo)
        });
    }
    single_printable(spec).map(CharSpec::Single)
}

/// The lone character of `s`, if printable ASCII (32..=126).
fn single_printable(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let ch = chars.next()?;
    if chars.next().is_some() || !(ASCII_FIRST..=ASCII_LAST).contains(&ch) {
        return None;
    }
    Some(ch)
}
