//! The greeting printed on startup.

use std::io::{self, Write};

/// The line written by [`greet`], without its trailing newline.
pub const GREETING: &str = "some practics";

/// Write the greeting followed by a newline.
pub fn greet<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}
