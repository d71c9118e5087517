// ══════════════════════════════════════════════════════════════════════════════
// COLOR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The fixed palette the logger paints with. Colors are opaque tokens rather than
// raw escape strings, so nothing outside this module can inject its own codes.
// Escapes are always emitted: terminal detection and NO_COLOR-style switches
// never change the bytes a logger writes.

use colored::Color as Ansi;

pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// A named ANSI style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
	/// Bright magenta, used for section headers
	Header,
	Blue,
	Green,
	/// Bright yellow
	Warning,
	/// Bright red
	Fail,
	Bold,
	Reset,
}

impl Color {
	/// The escape sequence that switches this style on.
	pub fn code(self) -> String {
		let ansi = match self {
			Color::Header => Ansi::BrightMagenta,
			Color::Blue => Ansi::BrightBlue,
			Color::Green => Ansi::BrightGreen,
			Color::Warning => Ansi::BrightYellow,
			Color::Fail => Ansi::BrightRed,
			Color::Bold => return BOLD.to_string(),
			Color::Reset => return RESET.to_string(),
		};
		format!("\x1b[{}m", ansi.to_fg_str())
	}

	/// Wraps `text` in this token's escape sequence followed by a reset.
	pub fn paint(self, text: &str) -> String {
		format!("{}{}{}", self.code(), text, RESET)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_match_bright_palette() {
		assert_eq!(Color::Header.code(), "\x1b[95m");
		assert_eq!(Color::Blue.code(), "\x1b[94m");
		assert_eq!(Color::Green.code(), "\x1b[92m");
		assert_eq!(Color::Warning.code(), "\x1b[93m");
		assert_eq!(Color::Fail.code(), "\x1b[91m");
		assert_eq!(Color::Bold.code(), "\x1b[1m");
		assert_eq!(Color::Reset.code(), "\x1b[0m");
	}

	#[test]
	fn paint_wraps_and_resets() {
		assert_eq!(Color::Green.paint("x"), "\x1b[92mx\x1b[0m");
		assert_eq!(Color::Bold.paint("x"), "\x1b[1mx\x1b[0m");
	}

	#[test]
	fn reset_token_still_wraps() {
		assert_eq!(Color::Reset.paint("raw"), "\x1b[0mraw\x1b[0m");
	}

	#[test]
	fn colored_switches_do_not_strip_codes() {
		colored::control::set_override(false);
		assert_eq!(Color::Fail.paint("x"), "\x1b[91mx\x1b[0m");
		colored::control::unset_override();
	}
}
