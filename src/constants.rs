// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines the fixed pieces of the line format shared by every logger operation.
// - TIMESTAMP_FORMAT: chrono format for the bracketed "YYYY-MM-DD HH:MM:SS" stamp
// - CAUSE_SEPARATOR: placed between an error message and its attached cause

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const CAUSE_SEPARATOR: &str = " | Error: ";
