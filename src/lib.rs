//! A getopt-style option scanner.
//!
//! You describe the options you accept, either as a classic short option
//! string (`"hc:v"`) or as a list of [`OptionSpec`]s with long names, and the
//! [`Parser`] hands back one decoded option at a time. Clustered short
//! options (`-abc`), attached values (`-ofile`, `--out=file`), `--` and the
//! `+`/`-` ordering markers all behave the way getopt users expect. Windows
//! (`/name:value`) and PowerShell (`-name`) conventions can be switched on.
//!
//! ## Example
//! ```
//! use optscan::{ArgumentRequirement::*, OptionSpec, Parser};
//!
//! fn main() -> Result<(), optscan::Error> {
//!     use optscan::prelude::*;
//!
//!     let mut follow = false;
//!     let mut number = String::from("10");
//!     let mut files = Vec::new();
//!
//!     let mut parser = Parser::from_args(
//!         ["-fn", "20", "--", "-weird-name.txt"],
//!         "fn:",
//!         vec![
//!             OptionSpec::new("follow", None, 'f'),
//!             OptionSpec::new("number", Required, 'n'),
//!         ],
//!     );
//!     while let Some(arg) = parser.next()? {
//!         match arg {
//!             Opt { code, .. } if code == 'f' as i32 => follow = true,
//!             Opt { code, value: Some(value) } if code == 'n' as i32 => number = value,
//!             Value(file) => files.push(file),
//!             other => return Err(other.unexpected()),
//!         }
//!     }
//!     assert!(follow);
//!     assert_eq!(number, "20");
//!     assert_eq!(files, ["-weird-name.txt"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Error policy
//! Problems such as unknown options come in two flavors, picked per kind in
//! [`Config`]: a marker [`Arg`] that lets scanning continue, or an [`Error`].
//! Every call moves past the offending input either way, so a caller may
//! keep going after an error.
//!
//! The parser logs through [`tracing`] at `trace` and `debug` level. It never
//! installs a subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::should_implement_trait)]

pub mod classify;
mod config;
mod error;
mod options;
pub mod param_file;
mod short_opts;

pub use crate::config::{Config, Convention};
pub use crate::error::Error;
pub use crate::options::{ArgumentRequirement, OptionSpec, Registry};
pub use crate::short_opts::{ScanMode, ShortOpts};

use crate::classify::{classify, extract, is_option, TokenKind};

/// Returned by [`Parser::get_next_opt`] once the arguments are exhausted.
pub const END_OF_INPUT: i32 = -1;
/// Code for a missing required argument.
pub const MISSING_ARGUMENT: i32 = '?' as i32;
/// Code for an unknown option or an unexpected free-standing argument.
pub const INVALID_OPTION: i32 = '!' as i32;
/// Code for a free-standing argument returned as a value.
pub const NON_OPTION: i32 = 1;
/// Code for a skipped empty argument.
pub const SKIPPED: i32 = 0;

/// A parser for command line arguments.
#[derive(Debug, Clone)]
pub struct Parser {
    args: Vec<String>,
    bin_name: Option<String>,
    registry: Registry,
    config: Config,
    cursor: Cursor,
    // Whether we encountered "--" (or the first operand when stopping at
    // operands) and know no more options are coming
    finished_opts: bool,
}

/// Where the parser is in its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the current argument.
    pub index: usize,
    /// Byte offset of the next short option inside the current argument.
    ///
    /// Offset 0 is the `-` (or `/`), so this is at least 1. It only moves
    /// while working through a cluster like `-abc`, and goes back to 1
    /// whenever `index` moves.
    pub offset: usize,
}

impl Default for Cursor {
    fn default() -> Cursor {
        Cursor {
            index: 0,
            offset: 1,
        }
    }
}

/// One decoded unit of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A registered option, with its argument if it got one.
    Opt {
        /// The option's code.
        code: i32,
        /// The option's argument.
        value: Option<String>,
    },
    /// A free-standing argument, returned in order (`-` at the start of the
    /// short option string), after `--`, or after the first free-standing
    /// argument when stopping at operands.
    Value(String),
    /// The option with this code requires an argument but none was found.
    Missing(i32),
    /// An unknown option. Holds the argument for long options and for a
    /// `--` that doesn't stop parsing, nothing for a short option inside a
    /// cluster.
    Invalid(Option<String>),
    /// A free-standing argument where an option was expected.
    Unexpected(String),
    /// The empty argument at this index was stepped over.
    Skipped(usize),
}

impl Arg {
    /// The integer code of the getopt protocol.
    pub fn code(&self) -> i32 {
        match self {
            Arg::Opt { code, .. } => *code,
            Arg::Value(_) => NON_OPTION,
            Arg::Missing(_) => MISSING_ARGUMENT,
            Arg::Invalid(_) | Arg::Unexpected(_) => INVALID_OPTION,
            Arg::Skipped(_) => SKIPPED,
        }
    }

    /// The string that accompanies the code in the getopt protocol.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Arg::Opt { value, .. } => value.as_deref(),
            Arg::Value(token) | Arg::Unexpected(token) => Some(token),
            Arg::Invalid(token) => token.as_deref(),
            Arg::Missing(_) | Arg::Skipped(_) => None,
        }
    }

    /// Split into the `(code, argument)` pair of the getopt protocol.
    pub fn into_parts(self) -> (i32, Option<String>) {
        let code = self.code();
        let argument = match self {
            Arg::Opt { value, .. } => value,
            Arg::Value(token) | Arg::Unexpected(token) => Some(token),
            Arg::Invalid(token) => token,
            Arg::Missing(_) | Arg::Skipped(_) => None,
        };
        (code, argument)
    }

    /// Convert an argument the caller doesn't handle into an error.
    pub fn unexpected(self) -> Error {
        match self {
            Arg::Opt { code, .. } => Error::InvalidOption {
                token: describe_code(code),
            },
            Arg::Value(token) | Arg::Unexpected(token) => Error::UnexpectedOperand { token },
            Arg::Missing(code) => Error::MissingArgument {
                token: describe_code(code),
            },
            Arg::Invalid(token) => Error::InvalidOption {
                token: token.unwrap_or_default(),
            },
            Arg::Skipped(index) => Error::EmptyToken { index },
        }
    }
}

/// Spell a code the way it would be written as a short option, or as
/// `#code` if it isn't a character.
fn describe_code(code: i32) -> String {
    match u32::try_from(code).ok().and_then(char::from_u32) {
        Some(ch) => format!("-{}", ch),
        None => format!("#{}", code),
    }
}

impl Parser {
    /// Create a parser from an iterator, with the default [`Config`].
    ///
    /// The executable name must not be included. An empty `short_opts`
    /// means there is no short option string.
    pub fn from_args<I>(args: I, short_opts: &str, options: Vec<OptionSpec>) -> Parser
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Parser {
            args: args.into_iter().map(Into::into).collect(),
            bin_name: None,
            registry: Registry::new(short_opts, options),
            config: Config::default(),
            cursor: Cursor::default(),
            finished_opts: false,
        }
    }

    /// Create a parser from the process arguments.
    ///
    /// Arguments that aren't valid unicode are converted lossily. If
    /// [`Config::allow_param_files`] is set, `@path` arguments are expanded
    /// first, which is the only way this can fail.
    pub fn from_env(
        short_opts: &str,
        options: Vec<OptionSpec>,
        config: Config,
    ) -> Result<Parser, Error> {
        let mut source = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        let bin_name = source.next();
        let args: Vec<String> = if config.allow_param_files {
            param_file::expand(source)?
        } else {
            source.collect()
        };
        let mut parser = Parser::from_args(args, short_opts, options).with_config(config);
        parser.bin_name = bin_name;
        Ok(parser)
    }

    /// Replace the configuration. Meant to be called before scanning starts.
    pub fn with_config(mut self, config: Config) -> Parser {
        self.config = config;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The registered options.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The current position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// All arguments, exactly as they were passed in.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The arguments that haven't been fully consumed yet.
    ///
    /// While inside a cluster like `-abc` the cluster is still included.
    pub fn remaining(&self) -> &[String] {
        self.args.get(self.cursor.index..).unwrap_or(&[])
    }

    /// Get the name that was used to invoke the program.
    ///
    /// Only available if constructed by [`Parser::from_env`].
    pub fn bin_name(&self) -> Option<&str> {
        self.bin_name.as_deref()
    }

    /// How free-standing arguments are handled, after combining the short
    /// option string's marker with [`Config::posixly_correct`].
    pub fn scan_mode(&self) -> ScanMode {
        match self.registry.short_opts().map(|short| short.mode) {
            Some(mode) if mode != ScanMode::Standard => mode,
            _ if self.config.posixly_correct => ScanMode::StopAtOperand,
            _ => ScanMode::Standard,
        }
    }

    /// Get the next option or free-standing argument.
    ///
    /// Returns `Ok(None)` once the command line has been exhausted, and
    /// keeps doing so on every later call.
    pub fn next(&mut self) -> Result<Option<Arg>, Error> {
        let result = self.scan();
        match &result {
            Ok(Some(arg)) => tracing::trace!(
                index = self.cursor.index,
                offset = self.cursor.offset,
                ?arg,
                "decoded argument"
            ),
            Ok(None) => tracing::trace!("arguments exhausted"),
            Err(err) => tracing::debug!(%err, index = self.cursor.index, "parse error"),
        }
        result
    }

    /// [`next()`][Parser::next] in the shape of C's `getopt_long`: a code and
    /// an optional argument, with [`END_OF_INPUT`] at the end.
    pub fn get_next_opt(&mut self) -> Result<(i32, Option<String>), Error> {
        Ok(match self.next()? {
            Some(arg) => arg.into_parts(),
            None => (END_OF_INPUT, None),
        })
    }

    fn scan(&mut self) -> Result<Option<Arg>, Error> {
        if self.args.is_empty() {
            if self.config.ignore_empty_argument_vector {
                return Ok(None);
            }
            return Err(Error::EmptyArgumentVector);
        }

        let index = self.cursor.index;
        let token = match self.args.get(index) {
            Some(token) => token.clone(),
            None => return Ok(None),
        };

        if self.cursor.offset > 1 {
            // We're somewhere inside a -abc chain.
            return self.parse_short();
        }

        if token.is_empty() {
            self.advance();
            if self.config.ignore_empty_options {
                return Ok(Some(Arg::Skipped(index)));
            }
            return Err(Error::EmptyToken { index });
        }

        if token == "--" && self.config.double_dash_stops_parsing {
            // Swallowed even when options have already finished
            tracing::debug!(index, "found `--`, remaining arguments are values");
            self.finished_opts = true;
            self.advance();
            return self.scan();
        }
        if self.finished_opts {
            self.advance();
            return Ok(Some(Arg::Value(token)));
        }

        match classify(&token, &self.config, &self.registry) {
            TokenKind::LongOption => {
                self.require_registry(&token)?;
                self.parse_long(token).map(Some)
            }
            TokenKind::ShortCluster => {
                self.require_registry(&token)?;
                self.parse_short()
            }
            TokenKind::DoubleDash => {
                self.advance();
                self.invalid(token).map(Some)
            }
            TokenKind::Operand => {
                self.advance();
                match self.scan_mode() {
                    ScanMode::InOrder => Ok(Some(Arg::Value(token))),
                    ScanMode::StopAtOperand => {
                        tracing::debug!(index, "first operand, remaining arguments are values");
                        self.finished_opts = true;
                        Ok(Some(Arg::Value(token)))
                    }
                    ScanMode::Standard if self.config.ignore_invalid_options => {
                        Ok(Some(Arg::Unexpected(token)))
                    }
                    ScanMode::Standard => Err(Error::UnexpectedOperand { token }),
                }
            }
        }
    }

    fn parse_long(&mut self, token: String) -> Result<Arg, Error> {
        let (name, inline) = extract(&token, self.config.allow_windows_conventions);
        let found = if self.config.only_short_opts {
            None
        } else {
            self.registry
                .find_by_name(name)
                .map(|opt| (opt.code, opt.argument))
        };
        let inline = inline.map(str::to_owned);
        self.advance();

        let (code, requirement) = match found {
            Some(found) => found,
            None => return self.invalid(token),
        };
        let value = match requirement {
            // Any inline value is dropped
            ArgumentRequirement::None => None,
            ArgumentRequirement::Required => match inline.or_else(|| self.take_following()) {
                Some(value) => Some(value),
                None => return self.missing(code, token),
            },
            ArgumentRequirement::Optional => inline.or_else(|| self.take_following()),
        };
        Ok(Arg::Opt { code, value })
    }

    fn parse_short(&mut self) -> Result<Option<Arg>, Error> {
        let Cursor { index, offset } = self.cursor;
        // Errors carry the whole cluster as written
        let token = self.args[index].clone();
        let ch = match token.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(ch) => ch,
            None => {
                // Can't happen as long as the cursor is kept in bounds, but
                // recovering is cheap.
                self.advance();
                return self.scan();
            }
        };
        let next_offset = offset + ch.len_utf8();
        let rest = token[next_offset..].to_owned();

        let requirement = match self.registry.argument_requirement_of(ch) {
            Some(requirement) => requirement,
            None => {
                self.step_short(next_offset, !rest.is_empty());
                if self.config.ignore_invalid_options {
                    return Ok(Some(Arg::Invalid(None)));
                }
                return Err(Error::InvalidOption { token });
            }
        };

        let code = ch as i32;
        if requirement == ArgumentRequirement::None {
            self.step_short(next_offset, !rest.is_empty());
            return Ok(Some(Arg::Opt { code, value: None }));
        }

        self.advance();
        if !rest.is_empty() {
            return Ok(Some(Arg::Opt {
                code,
                value: Some(rest),
            }));
        }
        match self.take_following() {
            Some(value) => Ok(Some(Arg::Opt {
                code,
                value: Some(value),
            })),
            None if requirement == ArgumentRequirement::Required => {
                self.missing(code, token).map(Some)
            }
            None => Ok(Some(Arg::Opt { code, value: None })),
        }
    }

    /// Consume the current argument as an option-argument, unless it looks
    /// like an option itself.
    fn take_following(&mut self) -> Option<String> {
        let next = self.args.get(self.cursor.index)?;
        if is_option(next, &self.config, &self.registry) {
            return None;
        }
        let value = next.clone();
        self.advance();
        Some(value)
    }

    fn step_short(&mut self, next_offset: usize, more: bool) {
        if more {
            self.cursor.offset = next_offset;
        } else {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.cursor.index += 1;
        self.cursor.offset = 1;
    }

    fn require_registry(&mut self, token: &str) -> Result<(), Error> {
        if self.registry.is_empty() {
            self.advance();
            return Err(Error::MissingOptionRegistry {
                token: token.to_owned(),
            });
        }
        Ok(())
    }

    fn invalid(&self, token: String) -> Result<Arg, Error> {
        if self.config.ignore_invalid_options {
            Ok(Arg::Invalid(Some(token)))
        } else {
            Err(Error::InvalidOption { token })
        }
    }

    fn missing(&self, code: i32, token: String) -> Result<Arg, Error> {
        if self.config.ignore_missing_argument {
            Ok(Arg::Missing(code))
        } else {
            Err(Error::MissingArgument { token })
        }
    }
}

/// A small prelude for processing arguments.
///
/// It allows you to write `Opt`/`Value`/... without an [`Arg`] prefix.
///
/// If this is used it's best to import it inside a function, not in module
/// scope. For example:
/// ```ignore
/// fn parse_args() -> Result<Args, optscan::Error> {
///     use optscan::prelude::*;
///     ...
/// }
/// ```
pub mod prelude {
    pub use super::Arg::*;
}
