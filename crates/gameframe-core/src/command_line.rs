//! The launched command and its flattening for the isolation script.
//!
//! The argument vector is kept intact until the isolation boundary, where
//! the script takes the whole command as a single string.

use std::borrow::Cow;

use crate::ports::LaunchError;

/// How the argument vector is flattened into one string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Quote arguments that the shell would otherwise split or expand.
    /// Plain arguments are emitted verbatim.
    #[default]
    Quoted,
    /// Join with single spaces and no quoting. Argument boundaries inside
    /// arguments containing whitespace are lost.
    Raw,
}

/// A non-empty command to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    args: Vec<String>,
}

impl LaunchCommand {
    /// Validate the launch arguments. At least the program is required.
    pub fn from_args(args: Vec<String>) -> Result<Self, LaunchError> {
        if args.is_empty() {
            return Err(LaunchError::Usage);
        }
        Ok(Self { args })
    }

    /// The first argument, usually the program or a wrapper such as `wine`.
    pub fn program(&self) -> &str {
        &self.args[0]
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Identifier used for profile lookup: the basename of the first argument.
    pub fn app_identifier(&self) -> &str {
        app_identifier(self.program())
    }

    /// Flatten into the single string handed to the isolation script.
    pub fn flatten(&self, strategy: JoinStrategy) -> String {
        match strategy {
            JoinStrategy::Raw => self.args.join(" "),
            JoinStrategy::Quoted => self
                .args
                .iter()
                .map(|arg| quote_arg(arg))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Final path segment of `path`, case and extension preserved.
///
/// Both `/` and `\` separate segments so wine-style paths resolve too.
/// Trailing separators are ignored; a path made only of separators is
/// returned unchanged.
pub fn app_identifier(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return path;
    }
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_' | '.' | '/' | ':' | '=' | '@' | '%' | '+' | ','
        )
}

/// POSIX single-quote `arg` if it contains anything the shell would interpret.
fn quote_arg(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && arg.chars().all(is_shell_safe) {
        return Cow::Borrowed(arg);
    }
    Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
}
