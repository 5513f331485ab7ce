use std::io::{self, IsTerminal, Write};

use serde::Serialize;

use crate::error::CliError;

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

pub fn print_view(drawn: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(drawn.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Clear the screen (only on a real terminal) and draw the frame with an input hint.
pub fn redraw(drawn: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    if stdout.is_terminal() {
        stdout.write_all(b"\x1b[2J\x1b[H")?;
    }
    stdout.write_all(drawn.as_bytes())?;
    stdout.write_all(b"\nEnter a ticker (Ctrl-D to quit): ")?;
    stdout.flush()?;
    Ok(())
}
