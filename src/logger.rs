// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides colored, timestamped console logging for automation pipelines.
// Every operation formats one line, stamps it with the local time at the moment
// of the call, and hands it to the logger's target. Nothing is buffered or
// retried; a failed write comes straight back to the caller.

use std::error::Error;
use std::io;

use chrono::Local;
use crate::color::{Color, RESET};
use crate::constants::{CAUSE_SEPARATOR, TIMESTAMP_FORMAT};
use crate::target::{StdStreams, Target};

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp() -> String {
	Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Console logger. Construct once and pass it by reference to whatever needs it.
#[derive(Debug, Default)]
pub struct Logger<T: Target = StdStreams> {
	target: T,
}

impl Logger {
	/// Logger writing to the process standard output and standard error.
	pub fn new() -> Self {
		Self { target: StdStreams }
	}
}

impl<T: Target> Logger<T> {
	pub fn with_target(target: T) -> Self {
		Self { target }
	}

	pub fn target(&self) -> &T {
		&self.target
	}

	/// `[ts] INFO: message`
	pub fn info(&self, message: &str) -> io::Result<()> {
		self.target.write_out(&format!("[{}] INFO: {}", timestamp(), message))
	}

	/// `[ts] SUCCESS: message` with the label in green.
	pub fn success(&self, message: &str) -> io::Result<()> {
		let label = Color::Green.paint("SUCCESS:");
		self.target.write_out(&format!("[{}] {} {}", timestamp(), label, message))
	}

	/// `[ts] WARNING: message` with the label in yellow.
	pub fn warning(&self, message: &str) -> io::Result<()> {
		let label = Color::Warning.paint("WARNING:");
		self.target.write_out(&format!("[{}] {} {}", timestamp(), label, message))
	}

	/// `[ts] ERROR: message` on the error channel, label in red. When a cause is
	/// attached its display text follows after ` | Error: `.
	pub fn error(&self, message: &str, cause: Option<&dyn Error>) -> io::Result<()> {
		let label = Color::Fail.paint("ERROR:");
		let line = match cause {
			Some(cause) => format!("[{}] {} {}{}{}", timestamp(), label, message, CAUSE_SEPARATOR, cause),
			None => format!("[{}] {} {}", timestamp(), label, message),
		};
		self.target.write_err(&line)
	}

	/// Major visual break: a blank line, then the uppercased title in bold magenta.
	pub fn section(&self, title: &str) -> io::Result<()> {
		let heading = format!("{}{}{}{}", Color::Bold.code(), Color::Header.code(), title.to_uppercase(), RESET);
		self.target.write_out(&format!("\n[{}] {}", timestamp(), heading))
	}

	/// `[ts] INFO: message` with everything after the stamp in bold.
	pub fn subsection(&self, message: &str) -> io::Result<()> {
		let body = Color::Bold.paint(&format!("INFO: {}", message));
		self.target.write_out(&format!("[{}] {}", timestamp(), body))
	}

	/// Raw output: no timestamp, no label. Tables and multi-line dumps go here.
	pub fn print(&self, message: &str, color: Option<Color>) -> io::Result<()> {
		match color {
			Some(color) => self.target.write_out(&color.paint(message)),
			None => self.target.write_out(message),
		}
	}
}
