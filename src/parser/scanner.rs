use {
    super::{Arity, OptionTable, Parsed},
    crate::{ParseError, Result},
    tracing::{debug, trace}
};

// indicator of the start of a short, two for a long argument
const INDICATOR: char = '-';

/// How a fresh token (one not claimed as a pending value) is classified.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Token<'t> {
    Positional,
    /// `--` on its own.
    EndOfOptions,
    /// Everything after the leading `--`.
    Long(&'t str),
    /// Everything after the leading `-`. Never empty.
    Short(&'t str)
}

impl<'t> Token<'t> {
    fn classify(s: &'t str) -> Token<'t> {
        if !looks_like_option(s) {
            // includes the empty argument and `-`, the stdin/stdout shorthand
            return Token::Positional;
        }
        match s.strip_prefix("--") {
            Some("") => Token::EndOfOptions,
            Some(body) => Token::Long(body),
            None => Token::Short(&s[INDICATOR.len_utf8()..])
        }
    }
}

#[inline]
fn looks_like_option(s: &str) -> bool {
    s.len() > 1 && s.starts_with(INDICATOR)
}

/// An option that is still waiting for its value from the next token. The arity is never
/// [`Arity::None`].
#[derive(Copy, Clone, Debug)]
struct Pending {
    owner: &'static str,
    arity: Arity
}

/// Single forward pass over the tokens of one parse.
pub(crate) struct Scanner<'a> {
    table: &'a OptionTable,
    pending: Option<Pending>,
    parsed: Parsed
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(table: &'a OptionTable) -> Scanner<'a> {
        Scanner { table, pending: None, parsed: Parsed::default() }
    }

    pub(crate) fn run<S: AsRef<str>>(mut self, tokens: &[S]) -> Result<Parsed> {
        debug!(tokens = tokens.len(), options = self.table.len(), "parse start");

        let mut rest = None;
        for (index, token) in tokens.iter().enumerate() {
            let token = token.as_ref();

            if let Some(pending) = self.pending.take() {
                if self.resolve_pending(pending, token)? {
                    trace!(index, token, option = pending.owner, "consumed as value");
                    continue;
                }
                // an optional value was declined; the token is dispatched below as a fresh one
            }

            match Token::classify(token) {
                Token::Positional => {
                    trace!(index, token, "positional");
                    self.parsed.push_positional(token);
                }
                Token::EndOfOptions => {
                    trace!(index, "end of options");
                    rest = Some(index + 1);
                    break;
                }
                Token::Long(body) => {
                    trace!(index, token, "long");
                    self.push_long(body)?;
                }
                Token::Short(cluster) => {
                    trace!(index, token, "short");
                    self.push_short(cluster)?;
                }
            }
        }

        if let Some(pending) = self.pending {
            return Err(ParseError::MissingArgument { name: pending.owner.to_owned() });
        }

        if let Some(start) = rest {
            for token in &tokens[start..] {
                self.parsed.push_positional(token.as_ref());
            }
        }

        debug!(
            options = self.parsed.options().count(),
            positionals = self.parsed.positional_count(),
            "parse done"
        );
        Ok(self.parsed)
    }

    // helpers

    /// Offers `token` as the value of `pending`. Returns whether it was consumed.
    fn resolve_pending(&mut self, pending: Pending, token: &str) -> Result<bool> {
        if !looks_like_option(token) {
            self.parsed.push_value(pending.owner, token);
            return Ok(true);
        }

        match pending.arity {
            Arity::Required => Err(ParseError::MissingArgument { name: pending.owner.to_owned() }),
            _ => {
                self.parsed.push_value(pending.owner, "");
                Ok(false)
            }
        }
    }

    // --name, --name value, --name=value
    fn push_long(&mut self, body: &str) -> Result<()> {
        if let Some((name, value)) = body.split_once('=') {
            let (name, arity) = self.declared(name)?;
            if arity == Arity::None {
                return Err(ParseError::NoArgumentAllowed {
                    name: name.to_owned(),
                    value: value.to_owned()
                });
            }
            self.parsed.push_value(name, value);
            return Ok(());
        }

        let (name, arity) = self.declared(body)?;
        self.push_or_defer(name, arity);
        Ok(())
    }

    // -a, -abc, -ovalue, -abovalue. the first option that takes a value ends the cluster: it gets
    //  the rest of the cluster, or the next token if there is no rest.
    fn push_short(&mut self, cluster: &str) -> Result<()> {
        for (c_i, c) in cluster.char_indices() {
            let (name, arity) = self
                .table
                .long_name(c)
                .and_then(|name| self.table.lookup(name))
                .ok_or_else(|| ParseError::UnknownOption { name: c.to_string() })?;

            let rest = &cluster[c_i + c.len_utf8()..];
            if arity == Arity::None || rest.is_empty() {
                self.push_or_defer(name, arity);
            } else {
                trace!(option = name, value = rest, "value attached to short");
                self.parsed.push_value(name, rest);
                break;
            }
        }
        Ok(())
    }

    fn push_or_defer(&mut self, name: &'static str, arity: Arity) {
        if arity.takes_value() {
            trace!(option = name, ?arity, "awaiting value");
            self.pending = Some(Pending { owner: name, arity });
        } else {
            self.parsed.push_value(name, "");
        }
    }

    fn declared(&self, name: &str) -> Result<(&'static str, Arity)> {
        self.table.lookup(name).ok_or_else(|| ParseError::UnknownOption { name: name.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{OptRule, getopt}
    };

    const RULES: &[OptRule] = &[
        OptRule::new_auto("help"),
        OptRule::new_auto("output").set_arity(Arity::Required),
        OptRule::new_auto("verbose"),
        OptRule::new_auto("test").set_arity(Arity::Optional),
        OptRule::new_auto("xyz")
    ];

    fn values(tokens: &[&str]) -> Vec<(String, Vec<String>)> {
        getopt(tokens, RULES).unwrap().into_parts().0.into_iter().collect()
    }

    fn owned(pairs: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        pairs
            .iter()
            .map(|(n, v)| ((*n).to_owned(), v.iter().map(|s| (*s).to_owned()).collect()))
            .collect()
    }

    #[test]
    fn classify() {
        assert_eq!(Token::classify(""), Token::Positional);
        assert_eq!(Token::classify("-"), Token::Positional);
        assert_eq!(Token::classify("a-b"), Token::Positional);
        assert_eq!(Token::classify("--"), Token::EndOfOptions);
        assert_eq!(Token::classify("---"), Token::Long("-"));
        assert_eq!(Token::classify("--a=b"), Token::Long("a=b"));
        assert_eq!(Token::classify("-ab"), Token::Short("ab"));
        assert_eq!(Token::classify("-é"), Token::Short("é"));
    }

    #[test]
    fn long_no_value_leaves_next_token_alone() {
        let parsed = getopt(&["--help", "value"], RULES).unwrap();
        assert_eq!(parsed.values("help"), Some(&[String::new()][..]));
        assert_eq!(parsed.positionals(), ["value"]);
    }

    #[test]
    fn long_required_separate_and_inline() {
        assert_eq!(values(&["--output", "a", "--output=b"]), owned(&[("output", &["a", "b"])]));
        // explicit empty value through `=`
        assert_eq!(values(&["--output="]), owned(&[("output", &[""])]));
        // only the first `=` splits
        assert_eq!(values(&["--output=a=b"]), owned(&[("output", &["a=b"])]));
    }

    #[test]
    fn pending_takes_dash_and_empty() {
        // `-` and `` don't look like options, so they're values
        assert_eq!(values(&["-o", "-", "--output", ""]), owned(&[("output", &["-", ""])]));
    }

    #[test]
    fn required_refuses_terminator() {
        assert_eq!(
            getopt(&["-o", "--"], RULES),
            Err(ParseError::MissingArgument { name: "output".into() })
        );
    }

    #[test]
    fn optional_declines_terminator() {
        let parsed = getopt(&["--test", "--", "-v"], RULES).unwrap();
        assert_eq!(parsed.values("test"), Some(&[String::new()][..]));
        assert_eq!(parsed.positionals(), ["-v"]);
    }

    #[test]
    fn optional_at_end_of_stream() {
        // an optional value still has to be settled by a following token
        assert_eq!(
            getopt(&["--test"], RULES),
            Err(ParseError::MissingArgument { name: "test".into() })
        );
        assert_eq!(
            getopt(&["-vo"], RULES),
            Err(ParseError::MissingArgument { name: "output".into() })
        );
    }

    #[test]
    fn cluster_value_stops_scanning() {
        // `h` and `v` after `o` belong to the value
        assert_eq!(values(&["-voh"]), owned(&[("output", &["h"]), ("verbose", &[""])]));
        assert_eq!(
            values(&["-xvo", "file"]),
            owned(&[("output", &["file"]), ("verbose", &[""]), ("xyz", &[""])])
        );
    }

    #[test]
    fn cluster_multibyte_value() {
        assert_eq!(values(&["-oé€"]), owned(&[("output", &["é€"])]));
    }

    #[test]
    fn unknown_options() {
        let unknown =
            |name: &str| Err::<Parsed, _>(ParseError::UnknownOption { name: name.to_owned() });

        assert_eq!(getopt(&["--nope"], RULES), unknown("nope"));
        assert_eq!(getopt(&["--nope=1"], RULES), unknown("nope"));
        assert_eq!(getopt(&["--=1"], RULES), unknown(""));
        // short alias is reported by itself
        assert_eq!(getopt(&["-vq"], RULES), unknown("q"));
    }

    #[test]
    fn no_argument_allowed() {
        assert_eq!(
            getopt(&["--verbose=yes"], RULES),
            Err(ParseError::NoArgumentAllowed { name: "verbose".into(), value: "yes".into() })
        );
        assert_eq!(
            getopt(&["--verbose="], RULES),
            Err(ParseError::NoArgumentAllowed { name: "verbose".into(), value: String::new() })
        );
    }

    #[test]
    fn error_discards_progress() {
        // values before the failure don't leak out
        assert!(getopt(&["-v", "a", "--bad"], RULES).is_err());
    }

    #[test]
    fn empty_input() {
        assert_eq!(getopt::<&str>(&[], RULES), Ok(Parsed::default()));
    }
}
