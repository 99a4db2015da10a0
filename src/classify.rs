//! Deciding what a single argument is, and taking long options apart.
//!
//! Everything here is a pure function of one argument and the settings.
//! The parser never rewrites its input, so these can be called on the same
//! argument any number of times with the same result.

use crate::config::Config;
use crate::options::Registry;

/// What kind of argument a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `--name`, `--name=value`, or with the matching conventions enabled
    /// `/name` and `-name`.
    LongOption,
    /// One or more short options, possibly followed by an argument: `-abc`,
    /// `-ofile`, and `/x` with Windows conventions.
    ShortCluster,
    /// Exactly `--`.
    DoubleDash,
    /// Anything else, including `-` on its own.
    Operand,
}

/// Classify `token`.
///
/// The Windows and PowerShell long forms are ambiguous with short options,
/// so they are only recognized when the name is registered: with PowerShell
/// conventions `-verbose` is a long option if `verbose` is known, and a
/// cluster of seven short options otherwise.
pub fn classify(token: &str, config: &Config, registry: &Registry) -> TokenKind {
    if token == "--" {
        return TokenKind::DoubleDash;
    }
    if token.starts_with("--") {
        return TokenKind::LongOption;
    }

    let slash = config.allow_windows_conventions && token.starts_with('/');
    let dash = config.allow_powershell_conventions && token.starts_with('-');
    if (slash || dash) && !config.only_short_opts && token.len() > 1 {
        let (name, _) = extract(token, config.allow_windows_conventions);
        if registry.find_by_name(name).is_some() {
            return TokenKind::LongOption;
        }
    }

    if is_short_cluster(token, config.allow_windows_conventions) {
        return TokenKind::ShortCluster;
    }
    TokenKind::Operand
}

/// True if `token` would be taken as an option (or `--`) rather than a value.
pub fn is_option(token: &str, config: &Config, registry: &Registry) -> bool {
    classify(token, config, registry) != TokenKind::Operand
}

fn is_short_cluster(token: &str, windows: bool) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some('-') => (),
        Some('/') if windows => (),
        _ => return false,
    }
    matches!(chars.next(), Some(ch) if ch != '-')
}

/// Remove the option prefix: `--`, `-`, or with Windows conventions `/`.
///
/// Only one prefix is removed, so an already stripped name comes back
/// unchanged unless it starts with a prefix character itself.
pub fn strip_prefix(token: &str, windows: bool) -> &str {
    if let Some(rest) = token.strip_prefix("--") {
        rest
    } else if let Some(rest) = token.strip_prefix('-') {
        rest
    } else if windows {
        token.strip_prefix('/').unwrap_or(token)
    } else {
        token
    }
}

/// Split a long option into its name and inline value.
///
/// The value is separated by the first `=` or whitespace character, and
/// with Windows conventions also by `:`. The name comes back without its
/// prefix. No lookup happens here.
///
/// ```
/// use optscan::classify::extract;
///
/// assert_eq!(extract("--config=a.json", false), ("config", Some("a.json")));
/// assert_eq!(extract("/config:a.json", true), ("config", Some("a.json")));
/// assert_eq!(extract("--config", false), ("config", None));
/// ```
pub fn extract(token: &str, windows: bool) -> (&str, Option<&str>) {
    let body = strip_prefix(token, windows);
    let separator = body.char_indices().find(|&(_, ch)| {
        ch == '=' || ch.is_whitespace() || (windows && ch == ':')
    });
    match separator {
        Some((ind, ch)) => (&body[..ind], Some(&body[ind + ch.len_utf8()..])),
        None => (body, None),
    }
}
