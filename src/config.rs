//! Parser settings.

/// Settings that control how arguments are scanned and how problems are
/// reported.
///
/// Each `ignore_*` flag picks between two outcomes for one kind of problem:
/// when set, the parser returns a marker [`Arg`][crate::Arg] and carries on;
/// when cleared, it returns an [`Error`][crate::Error].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// `--` ends option scanning; everything after it is a value.
    pub double_dash_stops_parsing: bool,
    /// Never look up long option names.
    pub only_short_opts: bool,
    /// Step over empty arguments instead of failing.
    pub ignore_empty_options: bool,
    /// Report a missing required argument as [`Arg::Missing`][crate::Arg::Missing].
    pub ignore_missing_argument: bool,
    /// Report unknown options and stray values as
    /// [`Arg::Invalid`][crate::Arg::Invalid]/[`Arg::Unexpected`][crate::Arg::Unexpected].
    pub ignore_invalid_options: bool,
    /// Treat an empty argument vector as immediately exhausted.
    pub ignore_empty_argument_vector: bool,
    /// Accept `/name`, `/x` and `name:value`.
    pub allow_windows_conventions: bool,
    /// Accept `-name` for registered long options.
    pub allow_powershell_conventions: bool,
    /// Stop at the first free-standing argument, as if the short option
    /// string started with `+`. An explicit `+` or `-` marker takes
    /// precedence.
    pub posixly_correct: bool,
    /// Expand `@path` arguments in [`Parser::from_env`][crate::Parser::from_env].
    pub allow_param_files: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            double_dash_stops_parsing: true,
            only_short_opts: false,
            ignore_empty_options: true,
            ignore_missing_argument: false,
            ignore_invalid_options: true,
            ignore_empty_argument_vector: true,
            allow_windows_conventions: false,
            allow_powershell_conventions: false,
            posixly_correct: false,
            allow_param_files: false,
        }
    }
}

impl Config {
    /// The defaults, with `posixly_correct` taken from the `POSIXLY_CORRECT`
    /// environment variable.
    pub fn from_env() -> Config {
        Config {
            posixly_correct: std::env::var_os("POSIXLY_CORRECT").is_some(),
            ..Config::default()
        }
    }

    /// Set or clear every `ignore_*` flag at once.
    pub fn ignore_all_errors(mut self, ignore: bool) -> Config {
        self.ignore_empty_options = ignore;
        self.ignore_missing_argument = ignore;
        self.ignore_invalid_options = ignore;
        self.ignore_empty_argument_vector = ignore;
        self
    }

    /// True if every `ignore_*` flag is set.
    pub fn all_errors_ignored(&self) -> bool {
        self.ignore_empty_options
            && self.ignore_missing_argument
            && self.ignore_invalid_options
            && self.ignore_empty_argument_vector
    }

    /// Set [`double_dash_stops_parsing`][Config::double_dash_stops_parsing].
    pub fn double_dash_stops_parsing(mut self, yes: bool) -> Config {
        self.double_dash_stops_parsing = yes;
        self
    }

    /// Set [`only_short_opts`][Config::only_short_opts].
    pub fn only_short_opts(mut self, yes: bool) -> Config {
        self.only_short_opts = yes;
        self
    }

    /// Set [`ignore_empty_options`][Config::ignore_empty_options].
    pub fn ignore_empty_options(mut self, yes: bool) -> Config {
        self.ignore_empty_options = yes;
        self
    }

    /// Set [`ignore_missing_argument`][Config::ignore_missing_argument].
    pub fn ignore_missing_argument(mut self, yes: bool) -> Config {
        self.ignore_missing_argument = yes;
        self
    }

    /// Set [`ignore_invalid_options`][Config::ignore_invalid_options].
    pub fn ignore_invalid_options(mut self, yes: bool) -> Config {
        self.ignore_invalid_options = yes;
        self
    }

    /// Set [`ignore_empty_argument_vector`][Config::ignore_empty_argument_vector].
    pub fn ignore_empty_argument_vector(mut self, yes: bool) -> Config {
        self.ignore_empty_argument_vector = yes;
        self
    }

    /// Set [`allow_windows_conventions`][Config::allow_windows_conventions].
    pub fn allow_windows_conventions(mut self, yes: bool) -> Config {
        self.allow_windows_conventions = yes;
        self
    }

    /// Set [`allow_powershell_conventions`][Config::allow_powershell_conventions].
    pub fn allow_powershell_conventions(mut self, yes: bool) -> Config {
        self.allow_powershell_conventions = yes;
        self
    }

    /// Set [`posixly_correct`][Config::posixly_correct].
    pub fn posixly_correct(mut self, yes: bool) -> Config {
        self.posixly_correct = yes;
        self
    }

    /// Set [`allow_param_files`][Config::allow_param_files].
    pub fn allow_param_files(mut self, yes: bool) -> Config {
        self.allow_param_files = yes;
        self
    }
}

/// A family of option prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `--name` and `-x`.
    Gnu,
    /// `/name` and `/x`.
    Windows,
    /// `-name` and `-x`.
    Powershell,
}

impl Convention {
    /// Prefix of a long option.
    pub fn long_prefix(self) -> &'static str {
        match self {
            Convention::Gnu => "--",
            Convention::Windows => "/",
            Convention::Powershell => "-",
        }
    }

    /// Prefix of a short option.
    pub fn short_prefix(self) -> &'static str {
        match self {
            Convention::Gnu | Convention::Powershell => "-",
            Convention::Windows => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.double_dash_stops_parsing);
        assert!(config.ignore_empty_options);
        assert!(!config.ignore_missing_argument);
        assert!(config.ignore_invalid_options);
        assert!(config.ignore_empty_argument_vector);
        assert!(!config.allow_windows_conventions);
        assert!(!config.allow_powershell_conventions);
        assert!(!config.all_errors_ignored());
    }

    #[test]
    fn test_ignore_all_errors() {
        let config = Config::default().ignore_all_errors(true);
        assert!(config.all_errors_ignored());

        let config = config.ignore_all_errors(false);
        assert!(!config.ignore_empty_options);
        assert!(!config.ignore_missing_argument);
        assert!(!config.ignore_invalid_options);
        assert!(!config.ignore_empty_argument_vector);
    }

    #[test]
    fn test_disable_some_errors() {
        let config = Config::default()
            .ignore_all_errors(false)
            .ignore_empty_argument_vector(true);
        assert!(!config.all_errors_ignored());
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(Convention::Gnu.long_prefix(), "--");
        assert_eq!(Convention::Windows.short_prefix(), "/");
        assert_eq!(Convention::Powershell.long_prefix(), "-");
        assert_eq!(Convention::Powershell.short_prefix(), "-");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml() {
        let config: Config = toml::from_str(
            "allow_windows_conventions = true\nignore_invalid_options = false\n",
        )
        .unwrap();
        assert!(config.allow_windows_conventions);
        assert!(!config.ignore_invalid_options);
        // Unlisted fields keep their defaults
        assert!(config.double_dash_stops_parsing);
    }
}
