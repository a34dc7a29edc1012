use std::{
    collections::BTreeMap,
    fmt::{Debug, Formatter, Result as FmtRes}
};

/// The outcome of a successful parse: values per option and the positional arguments.
///
/// Option values are keyed by long name, whichever form was used on the command line. An option
/// that takes no value records one empty string per occurrence, so `-vvv` gives three.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    values: BTreeMap<String, Vec<String>>,
    positionals: Vec<String>
}

impl Parsed {
    // accessors

    /// Returns every value recorded for `name`, in order of occurrence, or `None` if the option
    /// never occurred.
    #[must_use]
    #[inline]
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Returns the last value recorded for `name`.
    ///
    /// For an option with no value this is `Some("")` when present.
    #[must_use]
    #[inline]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|vals| vals.last()).map(String::as_str)
    }

    /// Returns how many times `name` occurred.
    #[must_use]
    #[inline]
    pub fn count(&self, name: &str) -> usize {
        self.values.get(name).map_or(0, Vec::len)
    }

    /// Returns `true` if `name` occurred at least once.
    ///
    /// Note: this treats options with values as flags.
    #[must_use]
    #[inline]
    pub fn flag(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns an iterator over each option that occurred and its values, ordered by long name.
    pub fn options(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(name, vals)| (name.as_str(), vals.as_slice()))
    }

    /// Returns the `n`th positional argument, or `None` if it does not exist.
    #[must_use]
    #[inline]
    pub fn positional(&self, n: usize) -> Option<&str> {
        self.positionals.get(n).map(String::as_str)
    }

    /// Returns number of positional arguments parsed.
    #[must_use]
    #[inline]
    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// Returns all positional arguments in their original order.
    #[must_use]
    #[inline]
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Consumes the result, returning the value map and the positionals.
    #[must_use]
    pub fn into_parts(self) -> (BTreeMap<String, Vec<String>>, Vec<String>) {
        (self.values, self.positionals)
    }

    // helpers

    pub(crate) fn push_value(&mut self, name: &str, value: &str) {
        match self.values.get_mut(name) {
            Some(vals) => vals.push(value.to_owned()),
            None => {
                self.values.insert(name.to_owned(), vec![value.to_owned()]);
            }
        }
    }

    #[inline]
    pub(crate) fn push_positional(&mut self, s: &str) {
        self.positionals.push(s.to_owned());
    }

    fn write_vals(f: &mut Formatter<'_>, vals: &[String]) -> FmtRes {
        write!(f, "[")?;
        for (i, v) in vals.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", v)?;
        }
        write!(f, "]")
    }

    fn debug_alt(&self, f: &mut Formatter<'_>) -> FmtRes {
        writeln!(f, "Parsed(")?;
        for (name, vals) in &self.values {
            if vals.iter().all(String::is_empty) {
                writeln!(f, "    Flag: \"{}\" x{}", name, vals.len())?;
            } else {
                write!(f, "    Option: \"{}\": ", name)?;
                Parsed::write_vals(f, vals)?;
                writeln!(f)?;
            }
        }
        for (n, pos) in self.positionals.iter().enumerate() {
            writeln!(f, "    Positional #{}: {}", n, pos)?;
        }
        writeln!(f, ")")
    }

    fn debug_norm(&self, f: &mut Formatter<'_>) -> FmtRes {
        write!(f, "Parsed(")?;
        let mut first = true;
        for (name, vals) in &self.values {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{}=", name)?;
            Parsed::write_vals(f, vals)?;
        }
        for (n, pos) in self.positionals.iter().enumerate() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{}={:?}", n, pos)?;
        }
        write!(f, ")")
    }
}

impl Debug for Parsed {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtRes {
        if f.alternate() {
            return self.debug_alt(f);
        }

        self.debug_norm(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Parsed {
        let mut p = Parsed::default();
        p.push_value("verbose", "");
        p.push_value("output", "a");
        p.push_value("verbose", "");
        p.push_value("output", "b");
        p.push_positional("one");
        p.push_positional("-");
        p
    }

    #[test]
    fn accessors() {
        let p = sample();

        assert_eq!(p.values("output"), Some(&["a".to_owned(), "b".to_owned()][..]));
        assert_eq!(p.value("output"), Some("b"));
        assert_eq!(p.value("verbose"), Some(""));
        assert_eq!(p.value("help"), None);
        assert_eq!(p.count("verbose"), 2);
        assert_eq!(p.count("help"), 0);
        assert!(p.flag("output"));
        assert!(!p.flag("help"));
        assert_eq!(p.positional(1), Some("-"));
        assert_eq!(p.positional(2), None);
        assert_eq!(p.positional_count(), 2);
        assert_eq!(
            p.options().map(|(n, v)| (n, v.len())).collect::<Vec<_>>(),
            [("output", 2), ("verbose", 2)]
        );
    }

    #[test]
    fn debug_forms() {
        let p = sample();

        assert_eq!(
            format!("{:?}", p),
            "Parsed(output=[\"a\", \"b\"], verbose=[\"\", \"\"], 0=\"one\", 1=\"-\")"
        );
        assert_eq!(
            format!("{:#?}", p),
            "Parsed(\n    Option: \"output\": [\"a\", \"b\"]\n    Flag: \"verbose\" x2\n    \
             Positional #0: one\n    Positional #1: -\n)\n"
        );
        assert_eq!(format!("{:?}", Parsed::default()), "Parsed()");
    }
}
