//! Utility functions and types.

use std::fmt::Debug;
use std::fmt::Formatter;

/// Redacts secret material before it reaches logs or `Debug` output.
///
/// - Empty input is shown as `EMPTY`.
/// - Input shorter than 12 bytes is fully replaced by `***`.
/// - Longer input keeps its first and last three characters, so that two
///   different secrets can still be told apart.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        if length < 12 {
            return f.write_str("***");
        }

        match (self.0.get(..3), self.0.get(length - 3..)) {
            (Some(head), Some(tail)) => write!(f, "{head}***{tail}"),
            // Multi-byte characters at the edges, hide everything.
            _ => f.write_str("***"),
        }
    }
}
