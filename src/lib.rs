//! `getoptions` classifies command-line tokens as options or positional arguments, getopt-style.
//!
//! Options are declared up front as [`OptRule`]s, each with a long name, an optional
//! single-character short alias and an [`Arity`]. Parsing then recognizes:
//! - `--name` and `-n`: an option without a value (recorded as an empty string)
//! - `--name value`, `--name=value`, `-n value` and `-nvalue`: an option with a value
//! - `-abc`: a cluster of short options, where the first one that takes a value consumes the rest
//!   of the cluster (`-abcvalue`) or, if nothing is left, the next token (`-abc value`)
//! - `--`: the end of options; everything after it is positional
//!
//! Some consequences worth knowing:
//! - `--help value` leaves `value` as a positional when `help` takes no value
//! - `--output -v` is an error when `output` requires a value, but `--output=-v` is fine and
//!   records `-v`
//! - `-` on its own is positional (the usual stdin/stdout shorthand)
//!
//! Entry points:
//! - [`getopt`] parses a token slice that doesn't include the program name
//! - [`OptionTable::getopt`] does the same with prebuilt lookup tables
//! - [`getopt_os`] parses the running program's arguments and also returns the program name
//! - [`getopt_from`] is [`getopt_os`] with the arguments passed in
//!
//! Parsing is logged with [`tracing`] at `debug` and `trace` level. No subscriber is installed by
//! the library.

#![deny(missing_docs)]
#![allow(clippy::use_self, clippy::similar_names, clippy::doc_markdown)]

mod cmdline;
mod error;
mod parser;
pub mod version;

pub use {
    cmdline::*,
    error::{ParseError, Result},
    parser::{Arity, OptRule, OptionTable, Parsed, getopt}
};
