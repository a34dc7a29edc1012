use {
    crate::{OptRule, OptionTable, ParseError, Parsed, Result},
    std::{env, ffi::OsString}
};

/// Parses the running program's arguments against `rules`.
///
/// Returns the program name (the final path component of the first argument) along with the
/// parsed options and positionals.
///
/// # Examples
///
/// ```no_run
/// use getoptions::{OptRule, getopt_os};
///
/// let (program, parsed) = getopt_os(&[OptRule::new_auto("verbose")]).unwrap();
/// if parsed.flag("verbose") {
///     eprintln!("{}: verbose", program);
/// }
/// ```
#[cfg_attr(not(feature = "no_cold"), cold)]
pub fn getopt_os(rules: &[OptRule]) -> Result<(String, Parsed)> {
    getopt_from(env::args_os(), rules)
}

/// Like [`getopt_os`], but takes the full argument list, program name included, from `args`.
///
/// Every argument after the program name must be valid UTF-8, otherwise
/// [`ParseError::InvalidUtf8`] is returned with the argument's position in `args`. The program
/// name itself is converted lossily.
///
/// # Examples
///
/// ```
/// use getoptions::{Arity, OptRule, getopt_from};
///
/// let rules = [OptRule::new_auto("output").set_arity(Arity::Required)];
/// let (program, parsed) = getopt_from(["/usr/bin/tool", "-o", "out", "in"], &rules).unwrap();
///
/// assert_eq!(program, "tool");
/// assert_eq!(parsed.value("output"), Some("out"));
/// assert_eq!(parsed.positionals(), ["in"]);
/// ```
pub fn getopt_from<I>(args: I, rules: &[OptRule]) -> Result<(String, Parsed)>
where
    I: IntoIterator,
    I::Item: Into<OsString>
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .map(|arg0| helpers::program_name(&Into::<OsString>::into(arg0)))
        .unwrap_or_default();

    let tokens = args
        .enumerate()
        .map(|(i, arg)| {
            arg.into().into_string().map_err(|_| ParseError::InvalidUtf8 { index: i + 1 })
        })
        .collect::<Result<Vec<String>>>()?;

    let parsed = OptionTable::new(rules).getopt(&tokens)?;
    Ok((program, parsed))
}

pub(crate) mod helpers {
    use std::{ffi::OsStr, path::Path};

    /// Final path component of `arg0`, or all of it if it has none (e.g. `/` or `..`).
    pub fn program_name(arg0: &OsStr) -> String {
        Path::new(arg0).file_name().unwrap_or(arg0).to_string_lossy().into_owned()
    }
}
