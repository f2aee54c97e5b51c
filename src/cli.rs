//! Command-line surface for cctr
//!
//! clap only collects flags and specs. Spec counts are checked afterwards by
//! [`Invocation::from_parts`], so a wrong spec count or a `-d`/`-s` pairing is
//! reported as a plain message on standard output rather than as a clap error.

use crate::expander::Expander;
use crate::range::RangeBoundaries;
use crate::transform::Transformer;
use clap::Parser;
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "cctr")]
#[command(about = "Translate, delete, or squeeze characters read from standard input")]
#[command(long_about = "cctr reads standard input line by line and rewrites each line.

MODES:
  cctr FROM TO      Translate: each character of FROM becomes the character
                    at the same position in TO (TO repeats if shorter)
  cctr -d SET       Delete every character of SET
  cctr -s SET       Squeeze runs of a repeated character of SET into one

SPECS:
  abc               The characters a, b and c
  a-z, A-Z          Lowercase or uppercase letters
  [:class:]         One of alnum, alpha, blank, cntrl, digit, lower, print,
                    punct, space, special, upper

Delete and squeeze write lines back to back without newlines; translate
terminates every line.

EXAMPLES:
  echo hello | cctr a-z A-Z            HELLO
  echo 'hello world' | cctr -d lo      he wrd
  echo 'aaabbb' | cctr -s '[:alpha:]'  ab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Character specs: FROM TO when translating, SET with -d or -s
    #[arg(value_name = "SPEC")]
    specs: Vec<String>,

    /// Delete characters of SET from the input
    #[arg(short = 'd', long)]
    delete: bool,

    /// Squeeze repeated characters of SET into a single instance
    #[arg(short = 's', long)]
    squeeze: bool,

    /// Which characters may bound a range inside class definitions
    #[arg(long, value_enum, value_name = "POLICY")]
    #[arg(help = "Range boundaries for class expansion: 'any' (default) or 'alnum'\nWith 'alnum', [:cntrl:], [:print:] and [:space:] expand to nothing")]
    ranges: Option<RangeBoundaries>,

    /// Write debug logs to ~/.cctr/cctr.log
    #[arg(long)]
    debug: bool,
}

/// A validated request: the mode and the raw specs it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Translate { from: String, to: String },
    Delete { spec: String },
    Squeeze { spec: String },
}

/// A problem with the arguments, reported to the user as a plain message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Fewer than two specs and no mode flag
    MissingOperands,
    /// `-d` without exactly one spec
    DeleteOperands,
    /// `-s` without exactly one spec
    SqueezeOperands,
    /// Translation with more than two specs
    TranslateOperands,
    /// The `to` spec expanded to nothing while `from` did not
    EmptyTarget { spec: String },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingOperands => write!(
                f,
                "Invalid number of arguments. Please provide two characters or a character class separated by a space."
            ),
            UsageError::DeleteOperands => write!(
                f,
                "Invalid number of arguments. Please provide characters to delete."
            ),
            UsageError::SqueezeOperands => write!(
                f,
                "Invalid number of arguments. Please provide characters to squeeze."
            ),
            UsageError::TranslateOperands => write!(
                f,
                "Invalid substitution rule. Please provide two characters or a character class separated by a space."
            ),
            UsageError::EmptyTarget { spec } => write!(
                f,
                "Error parsing 'to' specifier: {} expands to an empty set",
                spec
            ),
        }
    }
}

impl std::error::Error for UsageError {}

impl Invocation {
    /// Check the spec count against the selected mode.
    ///
    /// Checks run in a fixed order: the general count check first, then
    /// delete, then squeeze, then translate. When both `-d` and `-s` are
    /// given, delete wins.
    pub fn from_parts(delete: bool, squeeze: bool, mut specs: Vec<String>) -> Result<Self, UsageError> {
        if specs.len() < 2 && !delete && !squeeze {
            return Err(UsageError::MissingOperands);
        }
        if delete && specs.len() != 1 {
            return Err(UsageError::DeleteOperands);
        }
        if squeeze && specs.len() != 1 {
            return Err(UsageError::SqueezeOperands);
        }

        if delete {
            return Ok(Invocation::Delete { spec: specs.remove(0) });
        }
        if squeeze {
            return Ok(Invocation::Squeeze { spec: specs.remove(0) });
        }

        if specs.len() != 2 {
            return Err(UsageError::TranslateOperands);
        }
        let to = specs.remove(1);
        let from = specs.remove(0);
        Ok(Invocation::Translate { from, to })
    }

    /// Expand the specs into a ready-to-run transformer
    pub fn transformer(&self, expander: &Expander) -> Result<Transformer, UsageError> {
        match self {
            Invocation::Translate { from, to } => {
                let from_set = expander.expand(from);
                let to_set = expander.expand(to);
                if to_set.is_empty() && !from_set.is_empty() {
                    return Err(UsageError::EmptyTarget { spec: to.clone() });
                }
                Ok(Transformer::Translate {
                    from: from_set,
                    to: to_set,
                })
            }
            Invocation::Delete { spec } => Ok(Transformer::Delete(expander.expand(spec))),
            Invocation::Squeeze { spec } => Ok(Transformer::Squeeze(expander.expand(spec))),
        }
    }
}

/// Parsed command line
#[derive(Debug)]
pub struct Args {
    pub invocation: Result<Invocation, UsageError>,
    pub ranges: Option<RangeBoundaries>,
    pub debug: bool,
}

impl From<Cli> for Args {
    fn from(cli: Cli) -> Self {
        Args {
            invocation: Invocation::from_parts(cli.delete, cli.squeeze, cli.specs),
            ranges: cli.ranges,
            debug: cli.debug,
        }
    }
}

/// Parse the process arguments, exiting on clap usage errors
pub fn parse_args() -> Args {
    Cli::parse().into()
}

/// Parse an explicit argument list
pub fn parse_args_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(Args::from)
}
