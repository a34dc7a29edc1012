/// Option rules and their arity.
mod rule;
/// The per-parse state machine.
mod scanner;
/// Lookup tables built from the rules.
mod table;
/// Parse results and accessors.
mod parsed;

pub use {
    parsed::Parsed,
    rule::{Arity, OptRule},
    table::OptionTable
};

use crate::Result;

/// Parses `tokens` against `rules`. `tokens` must not include the program name.
///
/// This builds a fresh [`OptionTable`] for every call; build one yourself with
/// [`OptionTable::new`] to parse many token lists with the same rules.
///
/// # Examples
///
/// ```
/// use getoptions::{Arity, OptRule, getopt};
///
/// const RULES: &[OptRule] = &[
///     OptRule::new_auto("help"),
///     OptRule::new_auto("output").set_arity(Arity::Required),
///     OptRule::new_auto("verbose")
/// ];
///
/// let args = ["--help", "--output=data1", "zero", "-odata2", "-vvv", "one", "two"];
/// let parsed = getopt(&args, RULES).unwrap();
///
/// assert_eq!(parsed.values("help").unwrap(), [""]);
/// assert_eq!(parsed.values("output").unwrap(), ["data1", "data2"]);
/// assert_eq!(parsed.values("verbose").unwrap(), ["", "", ""]);
/// assert_eq!(parsed.positionals(), ["zero", "one", "two"]);
/// ```
pub fn getopt<S: AsRef<str>>(tokens: &[S], rules: &[OptRule]) -> Result<Parsed> {
    OptionTable::new(rules).getopt(tokens)
}
