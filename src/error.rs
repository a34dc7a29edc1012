use thiserror::Error;

/// An error which can occur while parsing arguments.
///
/// Every variant is terminal: once one is returned, nothing parsed so far is exposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token named an undeclared long option or short alias.
    ///
    /// For a short alias, `name` is the alias character itself.
    #[error("option: {name:?} is unknown")]
    UnknownOption {
        /// The name as it appeared in the token.
        name: String
    },

    /// An option with [`Arity::Required`](crate::Arity::Required) was followed by another
    /// option-like token, or by nothing at all.
    #[error("option: {name:?} is missing its argument")]
    MissingArgument {
        /// Long name of the option.
        name: String
    },

    /// `--name=value` was used on an option that takes no value.
    #[error("option: {name:?} does not take value: {value:?}")]
    NoArgumentAllowed {
        /// Long name of the option.
        name: String,
        /// The value after the `=`.
        value: String
    },

    /// A process argument was not valid UTF-8. `index` counts from the program name at 0.
    #[error("argument #{index} is not valid UTF-8")]
    InvalidUtf8 {
        /// Position of the argument, including the program name.
        index: usize
    }
}

impl ParseError {
    /// Returns the option name this error refers to, if any.
    #[must_use]
    pub fn option_name(&self) -> Option<&str> {
        match self {
            ParseError::UnknownOption { name }
            | ParseError::MissingArgument { name }
            | ParseError::NoArgumentAllowed { name, .. } => Some(name),
            ParseError::InvalidUtf8 { .. } => None
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, ParseError>;
