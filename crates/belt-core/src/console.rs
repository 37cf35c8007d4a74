//! Console output helpers

use colored::*;
use std::io::{self, BufRead, Write};

/// Console for formatted output
#[derive(Clone, Copy)]
pub struct Console {
    verbose: bool,
}

impl Console {
    /// Create a new console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose mode only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print the startup banner
    pub fn print_banner(&self) {
        println!();
        println!("{}", "╭──────────────────────────────────────────╮".bright_cyan());
        println!(
            "{}",
            format!("│  🛠  {}                       │", "UTILITY BELT".bright_white().bold())
                .bright_cyan()
        );
        println!(
            "{}",
            format!("│  {}  │", "One menu, many gadgets. Pick a number.".bright_blue())
                .bright_cyan()
        );
        println!("{}", "╰──────────────────────────────────────────╯".bright_cyan());
        println!();
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Print `prompt` without a newline and read one trimmed line from stdin
///
/// Used by interactive utilities that need a follow-up answer (a country
/// name, a number to look up, a calculator operand).
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Read one line from a reader; `None` on EOF
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Source of trimmed console lines for the session loop and the
/// confirmation gate
pub trait LineSource {
    /// Next trimmed line; `None` on EOF
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads from stdin, taking the lock one line at a time
///
/// The lock must not be held across a utility run: utilities prompt for
/// their own follow-up input on the same thread.
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let n = io::stdin().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Scripted input for tests
impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        read_line(self)
    }
}
