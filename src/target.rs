// ══════════════════════════════════════════════════════════════════════════════
// TARGET MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Where formatted lines end up. The logger only ever hands a target complete
// lines; the target appends the newline and performs the write. Write failures
// are returned to the caller untouched.

use std::cell::RefCell;
use std::io::{self, Write};

/// A pair of line sinks: one for normal output, one for diagnostics.
pub trait Target {
	/// Writes `line` plus a newline to the output channel.
	fn write_out(&self, line: &str) -> io::Result<()>;

	/// Writes `line` plus a newline to the error channel.
	fn write_err(&self, line: &str) -> io::Result<()>;
}

/// The process standard output and standard error streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdStreams;

impl Target for StdStreams {
	fn write_out(&self, line: &str) -> io::Result<()> {
		let mut out = io::stdout().lock();
		writeln!(out, "{}", line)
	}

	fn write_err(&self, line: &str) -> io::Result<()> {
		let mut err = io::stderr().lock();
		writeln!(err, "{}", line)
	}
}

/// In-memory target that records everything written to it.
#[derive(Debug, Default)]
pub struct Capture {
	out: RefCell<String>,
	err: RefCell<String>,
}

impl Capture {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything written to the output channel so far.
	pub fn stdout(&self) -> String {
		self.out.borrow().clone()
	}

	/// Everything written to the error channel so far.
	pub fn stderr(&self) -> String {
		self.err.borrow().clone()
	}
}

impl Target for Capture {
	fn write_out(&self, line: &str) -> io::Result<()> {
		let mut out = self.out.borrow_mut();
		out.push_str(line);
		out.push('\n');
		Ok(())
	}

	fn write_err(&self, line: &str) -> io::Result<()> {
		let mut err = self.err.borrow_mut();
		err.push_str(line);
		err.push('\n');
		Ok(())
	}
}

impl<T: Target + ?Sized> Target for &T {
	fn write_out(&self, line: &str) -> io::Result<()> {
		(**self).write_out(line)
	}

	fn write_err(&self, line: &str) -> io::Result<()> {
		(**self).write_err(line)
	}
}
