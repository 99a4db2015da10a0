use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

/// An error during argument scanning.
///
/// Most of these are only returned when the matching `ignore_*` flag in
/// [`Config`][crate::Config] is turned off. With the defaults the parser
/// reports the same conditions through [`Arg`][crate::Arg] instead.
#[derive(Error)]
#[non_exhaustive]
pub enum Error {
    /// The argument vector was empty and
    /// [`ignore_empty_argument_vector`][crate::Config::ignore_empty_argument_vector]
    /// is off.
    #[error("no arguments to parse")]
    EmptyArgumentVector,

    /// An argument was the empty string.
    #[error("encountered an empty argument at position {index}")]
    EmptyToken {
        /// Position of the empty argument in the vector.
        index: usize,
    },

    /// An option-like argument was found, but neither a short option string
    /// nor a list of long options was supplied.
    #[error("cannot parse option '{token}': no options were registered")]
    MissingOptionRegistry {
        /// The option-like argument.
        token: String,
    },

    /// An option that isn't registered.
    #[error("invalid option '{token}'")]
    InvalidOption {
        /// The argument as written, e.g. `--frobnicate`, or `-abq` when `q`
        /// is the unknown option in a cluster.
        token: String,
    },

    /// An option requires an argument but none was found.
    #[error("missing argument for option '{token}'")]
    MissingArgument {
        /// The argument holding the option, as written.
        token: String,
    },

    /// A free-standing argument was found where an option was expected.
    #[error("unexpected argument '{token}'")]
    UnexpectedOperand {
        /// The free-standing argument.
        token: String,
    },

    /// A parameter file named with `@path` could not be read.
    #[error("cannot read parameter file '{}': {source}", .path.display())]
    ParamFile {
        /// The path after the `@`.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The raw argument that caused the error, if there is one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::MissingOptionRegistry { token }
            | Error::InvalidOption { token }
            | Error::MissingArgument { token }
            | Error::UnexpectedOperand { token } => Some(token),
            Error::EmptyToken { .. } => Some(""),
            Error::EmptyArgumentVector | Error::ParamFile { .. } => None,
        }
    }
}

// This is printed when returning an error from main(), so defer to Display
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
