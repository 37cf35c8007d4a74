//! Yes/no confirmation gate for the outer run cycle

use crate::console::{Console, LineSource};
use std::io::{self, Write};

const TRUTHY: &[&str] = &["YES", "AYE", "COOL", "TRUE", "Y", "YEAH"];
const FALSY: &[&str] = &["NAW", "NO", "FALSE", "N"];

/// Parse a free-text answer against the fixed yes/no alias table
///
/// Matching is on the upper-cased token. Numbers are never valid answers
/// and return `None` like any other unrecognized token.
pub fn parse_confirmation(raw: &str) -> Option<bool> {
    let token = raw.trim();
    if token.parse::<i64>().is_ok() {
        return None;
    }
    let upper = token.to_uppercase();
    if TRUTHY.contains(&upper.as_str()) {
        return Some(true);
    }
    if FALSY.contains(&upper.as_str()) {
        return Some(false);
    }
    None
}

/// Prompts "run another option?" until a recognizable yes/no arrives
///
/// Retries are an explicit loop, not recursion, so noisy input cannot grow
/// the call stack. EOF counts as declining.
#[derive(Default)]
pub struct ConfirmationGate;

impl ConfirmationGate {
    pub fn new() -> Self {
        Self
    }

    /// Ask until the user answers with a known yes/no alias
    pub fn ask<S: LineSource>(&self, console: &Console, input: &mut S) -> io::Result<bool> {
        loop {
            print!("Would you like to run another option?: ");
            io::stdout().flush()?;

            let Some(line) = input.next_line()? else {
                tracing::info!("EOF at confirmation prompt, treating as no");
                return Ok(false);
            };

            match parse_confirmation(&line) {
                Some(answer) => {
                    tracing::info!(input = %line, answer, "confirmation received");
                    return Ok(answer);
                }
                None => {
                    tracing::warn!(input = %line, "answer could not be translated to a yes/no");
                    println!();
                    console.warn("I am sorry, your answer could not be translated to a yes/no.");
                    console.warn("Please try to reformat your answer.");
                    println!();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn truthy_aliases() {
        for input in ["yes", "Y", "AYE", "cool", "yeah", "TRUE"] {
            assert_eq!(parse_confirmation(input), Some(true), "input: {input}");
        }
    }

    #[test]
    fn falsy_aliases() {
        for input in ["no", "n", "NAW", "false", "No"] {
            assert_eq!(parse_confirmation(input), Some(false), "input: {input}");
        }
    }

    #[test]
    fn numbers_are_never_yes_no() {
        for input in ["5", "0", "1", "-3"] {
            assert_eq!(parse_confirmation(input), None, "input: {input}");
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(parse_confirmation("maybe"), None);
        assert_eq!(parse_confirmation(""), None);
    }

    #[test]
    fn gate_retries_until_a_valid_alias() {
        let gate = ConfirmationGate::new();
        let mut input = Cursor::new(b"5\nmaybe\nyes\n".to_vec());
        assert!(gate.ask(&Console::default(), &mut input).unwrap());
    }

    #[test]
    fn gate_returns_false_for_falsy_answer() {
        let gate = ConfirmationGate::new();
        let mut input = Cursor::new(b"naw\n".to_vec());
        assert!(!gate.ask(&Console::default(), &mut input).unwrap());
    }

    #[test]
    fn gate_treats_eof_as_declining() {
        let gate = ConfirmationGate::new();
        let mut input = Cursor::new(b"".to_vec());
        assert!(!gate.ask(&Console::default(), &mut input).unwrap());
    }
}
