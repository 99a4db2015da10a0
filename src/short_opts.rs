//! The compact getopt short option string, e.g. `"+hc:v;"`.

use std::fmt;

use crate::options::{ArgumentRequirement, OptionSpec};

/// How free-standing arguments between options are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// A free-standing argument where an option was expected is reported as
    /// unexpected.
    #[default]
    Standard,
    /// Option scanning ends at the first free-standing argument; it and
    /// everything after it are returned as values. Requested with a leading
    /// `+` or through `POSIXLY_CORRECT`.
    StopAtOperand,
    /// Free-standing arguments are returned in place, as values, and option
    /// scanning continues. Requested with a leading `-`.
    InOrder,
}

/// A parsed short option string.
///
/// The grammar is `[+-]? (char [:;]?)*`: `:` after a character means it
/// requires an argument, `;` means the argument is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShortOpts {
    /// The ordering requested by the leading marker, if any.
    pub mode: ScanMode,
    entries: Vec<(char, ArgumentRequirement)>,
}

impl ShortOpts {
    /// Parse a short option string. Parsing never fails: a stray `:` or `;`
    /// with no character in front of it is skipped.
    pub fn parse(spec: &str) -> ShortOpts {
        let mut chars = spec.chars().peekable();
        let mode = match chars.peek() {
            Some('+') => ScanMode::StopAtOperand,
            Some('-') => ScanMode::InOrder,
            _ => ScanMode::Standard,
        };
        if mode != ScanMode::Standard {
            chars.next();
        }

        let mut entries = Vec::new();
        while let Some(ch) = chars.next() {
            if ch == ':' || ch == ';' {
                continue;
            }
            let requirement = match chars.peek() {
                Some(':') => ArgumentRequirement::Required,
                Some(';') => ArgumentRequirement::Optional,
                _ => ArgumentRequirement::None,
            };
            entries.push((ch, requirement));
        }
        ShortOpts { mode, entries }
    }

    /// Build a short option string from long options.
    ///
    /// Only options whose code is a printable character are included. The
    /// grammar's own punctuation (`:`, `;`) and the ordering markers
    /// (`+`, `-`) can't be represented and are skipped as well.
    pub fn from_options(options: &[OptionSpec]) -> ShortOpts {
        let entries = options
            .iter()
            .filter_map(|opt| Some((opt.code_char()?, opt.argument)))
            .filter(|(ch, _)| representable(*ch))
            .collect();
        ShortOpts {
            mode: ScanMode::Standard,
            entries,
        }
    }

    /// The registered characters, in order.
    pub fn entries(&self) -> &[(char, ArgumentRequirement)] {
        &self.entries
    }

    /// How `short` takes its argument, or `None` if it isn't listed.
    pub fn requirement_of(&self, short: char) -> Option<ArgumentRequirement> {
        self.entries
            .iter()
            .find(|(ch, _)| *ch == short)
            .map(|(_, requirement)| *requirement)
    }
}

fn representable(ch: char) -> bool {
    !ch.is_control() && !ch.is_whitespace() && !matches!(ch, ':' | ';' | '+' | '-')
}

impl fmt::Display for ShortOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ScanMode::Standard => (),
            ScanMode::StopAtOperand => f.write_str("+")?,
            ScanMode::InOrder => f.write_str("-")?,
        }
        for (ch, requirement) in &self.entries {
            write!(f, "{}", ch)?;
            match requirement {
                ArgumentRequirement::None => (),
                ArgumentRequirement::Required => f.write_str(":")?,
                ArgumentRequirement::Optional => f.write_str(";")?,
            }
        }
        Ok(())
    }
}
