//! Interactive read-eval-print loop.
//!
//! Reads one line at a time, hands it to the [`Assistant`], and prints the
//! reply until the user exits or the input ends.

use crate::commands::{Assistant, Reply, GOODBYE, WELCOME};
use crate::config::Config;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use tracing::{debug, info, warn};

/// A source of input lines.
pub trait LineReader {
    /// Show `prompt` and read the next line. `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Drive `assistant` with lines from `reader`, writing replies to `out`.
///
/// Closed input ends the session the same way `exit` does.
pub fn run_session<R, W>(
    assistant: &mut Assistant,
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<()>
where
    R: LineReader,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;

    loop {
        let Some(line) = reader.read_line(prompt)? else {
            debug!("Input closed");
            writeln!(out, "{}", GOODBYE)?;
            break;
        };

        let reply = assistant.handle_line(&line);
        if !reply.text().is_empty() {
            writeln!(out, "{}", reply.text())?;
        }
        out.flush()?;

        if let Reply::Exit(_) = reply {
            break;
        }
    }

    Ok(())
}

/// Run the interactive assistant on the terminal.
pub fn run(config: &Config) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    if let Some(path) = &config.history_file {
        if let Err(e) = editor.load_history(path) {
            debug!("No history loaded from {}: {}", path.display(), e);
        }
    }

    let mut assistant = Assistant::from_config(config);
    run_session(
        &mut assistant,
        &mut editor,
        &mut std::io::stdout(),
        &config.prompt,
    )?;

    if let Some(path) = &config.history_file {
        if let Err(e) = editor.save_history(path) {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }

    info!(contacts = assistant.store().len(), "Session ended");
    Ok(())
}
