use {
    super::{Arity, OptRule, Parsed, scanner::Scanner},
    crate::Result,
    std::collections::BTreeMap,
    tracing::debug
};

/// Lookup tables built once from a set of [`OptRule`]s.
///
/// Building the table is the only work that depends on the rules alone, so a table can be kept
/// around and reused (or shared between threads) for any number of parses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionTable {
    // long name -> arity
    arities: BTreeMap<&'static str, Arity>,
    // short alias -> long name
    aliases: BTreeMap<char, &'static str>
}

impl OptionTable {
    /// Builds the lookup tables for `rules`. Later rules overwrite earlier ones with the same long
    /// name or short alias.
    #[must_use]
    pub fn new(rules: &[OptRule]) -> OptionTable {
        let mut table = OptionTable::default();
        for rule in rules {
            table.arities.insert(rule.long(), rule.arity());
            if let Some(short) = rule.short() {
                table.aliases.insert(short, rule.long());
            }
        }
        table
    }

    /// Parses `tokens`, which must not include the program name.
    ///
    /// Returns the collected option values and positionals, or the first error encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use getoptions::{Arity, OptRule, OptionTable};
    ///
    /// let table = OptionTable::new(&[
    ///     OptRule::new_auto("output").set_arity(Arity::Required),
    ///     OptRule::new_auto("verbose")
    /// ]);
    /// let parsed = table.getopt(&["-vv", "-oout.txt", "in.txt"]).unwrap();
    ///
    /// assert_eq!(parsed.count("verbose"), 2);
    /// assert_eq!(parsed.value("output"), Some("out.txt"));
    /// assert_eq!(parsed.positionals(), ["in.txt"]);
    /// ```
    pub fn getopt<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Parsed> {
        Scanner::new(self).run(tokens).map_err(|err| {
            debug!(%err, "parse aborted");
            err
        })
    }

    /// Returns the arity of the option with long name `long`, or `None` if it isn't declared.
    #[must_use]
    #[inline]
    pub fn arity(&self, long: &str) -> Option<Arity> {
        self.arities.get(long).copied()
    }

    /// Returns the long name the short alias `short` refers to, or `None` if it isn't declared.
    #[must_use]
    #[inline]
    pub fn long_name(&self, short: char) -> Option<&'static str> {
        self.aliases.get(&short).copied()
    }

    /// Returns the number of declared long names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arities.len()
    }

    /// Returns `true` if no options are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }

    // the long name paired with the static key, so results never borrow from the input token
    #[inline]
    pub(crate) fn lookup(&self, long: &str) -> Option<(&'static str, Arity)> {
        self.arities.get_key_value(long).map(|(&name, &arity)| (name, arity))
    }
}
