//! Option descriptions and the registry they are looked up in.

use crate::short_opts::ShortOpts;

/// Whether an option takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArgumentRequirement {
    /// The option never takes an argument, e.g. `--help`.
    #[default]
    None,
    /// The option must have an argument, e.g. `--config FILE`.
    Required,
    /// The option may have an argument, e.g. `--color[=WHEN]`.
    Optional,
}

/// A single recognized option.
///
/// `code` is what the parser hands back when the option is found. It is
/// usually the option's short character, but any integer works, which allows
/// long-only options with codes outside the printable range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    /// Long name, without leading dashes.
    pub name: Option<String>,
    /// Code returned for this option.
    pub code: i32,
    /// Whether the option takes an argument.
    #[cfg_attr(feature = "serde", serde(default))]
    pub argument: ArgumentRequirement,
    /// Human readable description, for help text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl OptionSpec {
    /// An option with a long name whose code is a character.
    ///
    /// ```
    /// use optscan::{ArgumentRequirement, OptionSpec};
    ///
    /// let spec = OptionSpec::new("config", ArgumentRequirement::Required, 'c');
    /// assert_eq!(spec.code, 'c' as i32);
    /// ```
    pub fn new(name: &str, argument: ArgumentRequirement, code: char) -> OptionSpec {
        OptionSpec::with_code(name, argument, code as i32)
    }

    /// An option with a long name and an arbitrary integer code.
    pub fn with_code(name: &str, argument: ArgumentRequirement, code: i32) -> OptionSpec {
        OptionSpec {
            name: Some(name.to_owned()),
            code,
            argument,
            description: None,
        }
    }

    /// Attach a description.
    pub fn description(mut self, text: &str) -> OptionSpec {
        self.description = Some(text.to_owned());
        self
    }

    /// The code as a character, if it is one.
    pub fn code_char(&self) -> Option<char> {
        u32::try_from(self.code).ok().and_then(char::from_u32)
    }
}

/// The set of options a parser knows about: an optional short option string
/// plus a list of long options.
///
/// Lookups return the first match, so when two options share a code or a
/// name the earlier one wins.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    short_opts: Option<ShortOpts>,
    options: Vec<OptionSpec>,
}

impl Registry {
    /// Build a registry. An empty `short_opts` string counts as absent.
    pub fn new(short_opts: &str, options: Vec<OptionSpec>) -> Registry {
        let short_opts = if short_opts.is_empty() {
            None
        } else {
            Some(ShortOpts::parse(short_opts))
        };
        Registry {
            short_opts,
            options,
        }
    }

    /// The parsed short option string.
    pub fn short_opts(&self) -> Option<&ShortOpts> {
        self.short_opts.as_ref()
    }

    /// The long options.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// True if neither short nor long options were registered.
    ///
    /// A short option string that only holds an ordering marker (`"+"` or
    /// `"-"`) registers nothing.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
            && self
                .short_opts
                .as_ref()
                .map_or(true, |short| short.entries().is_empty())
    }

    /// Find a long option by its name (without dashes).
    pub fn find_by_name(&self, name: &str) -> Option<&OptionSpec> {
        self.options
            .iter()
            .find(|opt| opt.name.as_deref() == Some(name))
    }

    /// Find a long option by its code.
    pub fn find_by_code(&self, code: i32) -> Option<&OptionSpec> {
        self.options.iter().find(|opt| opt.code == code)
    }

    /// How a short option character takes its argument.
    ///
    /// The short option string is consulted first. Characters it doesn't
    /// mention fall back to the long options, matched by code. `None` means
    /// the character is unknown.
    pub fn argument_requirement_of(&self, short: char) -> Option<ArgumentRequirement> {
        if let Some(requirement) = self
            .short_opts
            .as_ref()
            .and_then(|opts| opts.requirement_of(short))
        {
            return Some(requirement);
        }
        self.find_by_code(short as i32).map(|opt| opt.argument)
    }

    /// Render the long options as a short option string.
    ///
    /// Any ordering marker of the registered short option string is kept.
    pub fn to_short_opts(&self) -> ShortOpts {
        let mut short = ShortOpts::from_options(&self.options);
        if let Some(existing) = &self.short_opts {
            short.mode = existing.mode;
        }
        short
    }
}
