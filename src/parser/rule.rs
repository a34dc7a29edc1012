/// Whether an option takes a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Arity {
    /// Never takes a value. `--name=value` is an error.
    #[default]
    None,
    /// Always takes a value, either inline or from the next token.
    Required,
    /// Takes the next token as its value unless that token looks like an option.
    Optional
}

impl Arity {
    /// Returns `true` unless this is [`Arity::None`].
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Arity::None)
    }
}

/// A parsing rule that describes one option:
///
/// - `long`: the long name, which is also the key results are stored under (for example
///   `verbose`).
/// - `short`: optional single-character alias (for example `v`).
/// - `arity`: whether a value must, may, or must not follow.
///
/// Long names and short aliases must be unique within one rule set. If they aren't, the last rule
/// wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OptRule {
    long: &'static str,
    short: Option<char>,
    arity: Arity
}

impl OptRule {
    /// Creates an `OptRule` for `long` with no short alias that takes no value.
    #[must_use]
    pub const fn new(long: &'static str) -> OptRule {
        OptRule { long, short: None, arity: Arity::None }
    }

    /// Creates an `OptRule` for `long` whose short alias is the first character of `long`.
    #[must_use]
    pub const fn new_auto(long: &'static str) -> OptRule {
        OptRule { long, short: first_char(long), arity: Arity::None }
    }

    /// Sets the short alias.
    #[must_use]
    pub const fn set_short(mut self, short: char) -> OptRule {
        self.short = Some(short);
        self
    }

    /// Sets whether this option takes a value.
    #[must_use]
    pub const fn set_arity(mut self, arity: Arity) -> OptRule {
        self.arity = arity;
        self
    }

    /// Returns the long name.
    #[must_use]
    pub const fn long(&self) -> &'static str {
        self.long
    }

    /// Returns the short alias, if any.
    #[must_use]
    pub const fn short(&self) -> Option<char> {
        self.short
    }

    /// Returns the arity.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }
}

// decodes the leading utf-8 sequence by hand since str::chars isn't usable in const
const fn first_char(s: &str) -> Option<char> {
    const CONT_MASK: u8 = 0b0011_1111;

    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let x = bytes[0];
    if x < 0x80 {
        return Some(x as char);
    }

    let init = (x & (0x7F >> 2)) as u32;
    let y = (bytes[1] & CONT_MASK) as u32;
    let ch = if x < 0xE0 {
        (init << 6) | y
    } else {
        let y_z = (y << 6) | (bytes[2] & CONT_MASK) as u32;
        if x < 0xF0 {
            (init << 12) | y_z
        } else {
            ((init & 7) << 18) | (y_z << 6) | (bytes[3] & CONT_MASK) as u32
        }
    };

    char::from_u32(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_short() {
        const RULE: OptRule = OptRule::new("version");
        assert_eq!(RULE.long(), "version");
        assert_eq!(RULE.short(), None);
        assert_eq!(RULE.arity(), Arity::None);
    }

    #[test]
    fn new_auto_takes_first_char() {
        assert_eq!(OptRule::new_auto("output").short(), Some('o'));
        assert_eq!(OptRule::new_auto("ñame").short(), Some('ñ'));
        assert_eq!(OptRule::new_auto("€uro").short(), Some('€'));
        assert_eq!(OptRule::new_auto("🦀rab").short(), Some('🦀'));
        assert_eq!(OptRule::new_auto("").short(), None);
    }

    #[test]
    fn builders_chain() {
        const RULE: OptRule = OptRule::new_auto("test").set_short('T').set_arity(Arity::Optional);
        assert_eq!(RULE.short(), Some('T'));
        assert_eq!(RULE.arity(), Arity::Optional);
        assert!(RULE.arity().takes_value());
        assert!(!Arity::None.takes_value());
    }
}
