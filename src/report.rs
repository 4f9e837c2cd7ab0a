//! User-facing console messages
//!
//! Logs go to syslog and are meant for debugging. What the user needs to see
//! goes through here instead.

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Print a status line on stdout
pub fn info(message: impl Display) {
    println!("{message}");
}

/// Print an error on stderr, in red if stderr supports colors
pub fn error(message: impl Display) {
    let line = error_line(message);
    eprintln!("{}", line.if_supports_color(Stream::Stderr, |line| line.red()));
}

/// Plain-text rendering of an error message
fn error_line(message: impl Display) -> String {
    format!("Error: {message}")
}
