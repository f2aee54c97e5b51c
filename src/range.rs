//! Range expansion
//!
//! Scans a pattern for non-overlapping `start-end` triples and enumerates
//! every byte value from `start` to `end` inclusive, left to right.
//! An inverted pair (`z-a`) contributes nothing.

use anyhow::bail;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::fmt;
use std::str::FromStr;

static ALNUM_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z0-9])-([a-zA-Z0-9])").expect("alnum range regex is valid"));

static ANY_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s-u)(.)-(.)").expect("byte range regex is valid"));

/// Which characters may sit on either side of the hyphen in a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RangeBoundaries {
    /// Any single byte (`\x00-\x1F`, ` -~`, ...)
    #[default]
    Any,
    /// Only `[A-Za-z0-9]`; symbol and control ranges are skipped
    Alnum,
}

impl RangeBoundaries {
    fn matcher(self) -> &'static Regex {
        match self {
            RangeBoundaries::Any => &ANY_RANGE,
            RangeBoundaries::Alnum => &ALNUM_RANGE,
        }
    }
}

impl FromStr for RangeBoundaries {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(RangeBoundaries::Any),
            "alnum" => Ok(RangeBoundaries::Alnum),
            other => bail!("Invalid range boundary policy: {} (must be 'any' or 'alnum')", other),
        }
    }
}

impl fmt::Display for RangeBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBoundaries::Any => write!(f, "any"),
            RangeBoundaries::Alnum => write!(f, "alnum"),
        }
    }
}

/// Expand every `start-end` pair found in `pattern` into its bytes.
///
/// Never fails; a pattern with no recognised pairs yields an empty vector.
pub fn expand_range(pattern: &str, boundaries: RangeBoundaries) -> Vec<u8> {
    let mut result = Vec::new();

    for caps in boundaries.matcher().captures_iter(pattern.as_bytes()) {
        let start = caps[1][0];
        let end = caps[2][0];
        if start <= end {
            result.extend(start..=end);
        }
    }

    result
}
