// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 PIPELOG                                      ║
// ║                  Timestamped, colored status lines for pipelines             ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// Automation scripts need terminal output that reads at a glance: when did a
// step run, did it pass, what broke. pipelog prints one line per event:
//
//   [2026-10-18 14:09:03] INFO: Fetching sources
//   [2026-10-18 14:09:07] SUCCESS: Build finished        (label in green)
//   [2026-10-18 14:09:07] WARNING: 3 tests skipped       (label in yellow)
//   [2026-10-18 14:09:08] ERROR: Upload failed | Error: connection reset
//
// Errors go to stderr, everything else to stdout. `section` and `subsection`
// add visual structure, and `print` bypasses the format entirely for tables
// and raw dumps.
//
// 🎨 DESIGN
// ---------
// - **No globals**: build one `Logger` and pass `&Logger` around.
// - **Swappable target**: the process streams by default, `Capture` in tests.
// - **No surprises**: no buffering, no filtering, no files. A failed write is
//   returned as an `io::Error` and never swallowed.
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod color;
pub mod constants;
pub mod logger;
pub mod target;

pub use color::Color;
pub use logger::{timestamp, Logger};
pub use target::{Capture, StdStreams, Target};
