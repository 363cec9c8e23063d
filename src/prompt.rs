//! Interactive secret prompting.
//!
//! Writes `"<label>: "` to the terminal, reads a line with echoing
//! disabled, then restores the line break the suppressed echo swallowed.
//! The trait exists so the unlock flow can run against scripted input in
//! tests.

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use crate::error::Result;
use crate::secmem::Secret;

/// Source of prompted secrets
pub trait SecretPrompt {
    /// Prompt for a secret under the given label.
    ///
    /// The returned value carries no trailing newline.
    fn secret(&mut self, label: &str) -> Result<Secret>;
}

/// Prompts on the controlling terminal with echo disabled
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn secret(&mut self, label: &str) -> Result<Secret> {
        print!("{}: ", label);
        io::stdout().flush()?;

        let line = rpassword::read_password()?;

        // The user's enter keypress was not echoed; emit the newline so
        // later output starts on a fresh line.
        println!();

        Ok(Secret::new(Zeroizing::new(line)))
    }
}

/// Read one secret line from any buffered reader, without the line
/// terminator. Same line handling as the terminal path, minus the tty.
pub fn read_secret_line(reader: &mut impl BufRead) -> io::Result<String> {
    rpassword::read_password_from_bufread(reader)
}
