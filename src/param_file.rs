//! Parameter files: `@path` arguments replaced by the contents of `path`.
//!
//! The file holds arguments separated by whitespace or newlines. Expansion
//! happens once, before scanning, and is not recursive: an `@other` inside a
//! parameter file stays as it is.

use std::path::Path;

use crate::Error;

/// Split the contents of a parameter file into arguments.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Replace every `@path` argument by the arguments read from `path`.
///
/// A lone `@` is kept as an ordinary argument.
pub fn expand<I>(args: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut expanded = Vec::new();
    for arg in args {
        let arg = arg.into();
        match arg.strip_prefix('@') {
            Some(path) if !path.is_empty() => {
                let path = Path::new(path);
                let text = std::fs::read_to_string(path).map_err(|source| Error::ParamFile {
                    path: path.to_owned(),
                    source,
                })?;
                let before = expanded.len();
                expanded.extend(split_tokens(&text).map(str::to_owned));
                tracing::debug!(
                    path = %path.display(),
                    count = expanded.len() - before,
                    "expanded parameter file"
                );
            }
            _ => expanded.push(arg),
        }
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_tokens() {
        let tokens: Vec<_> = split_tokens("-v\n--config  a.json\r\n\t-x\n").collect();
        assert_eq!(tokens, ["-v", "--config", "a.json", "-x"]);
        assert_eq!(split_tokens("  \n").count(), 0);
    }

    #[test]
    fn test_expand() -> Result<(), Error> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "-h --config\nsettings.json @nested").unwrap();
        let param = format!("@{}", file.path().display());

        let args = expand(vec!["-v".to_string(), param, "tail".to_string()])?;
        assert_eq!(
            args,
            ["-v", "-h", "--config", "settings.json", "@nested", "tail"]
        );
        Ok(())
    }

    #[test]
    fn test_expand_empty_file() -> Result<(), Error> {
        let file = tempfile::NamedTempFile::new().unwrap();
        let param = format!("@{}", file.path().display());
        assert_eq!(expand(vec!["a", param.as_str(), "b"])?, ["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_lone_at() -> Result<(), Error> {
        assert_eq!(expand(vec!["@", "x"])?, ["@", "x"]);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match expand(vec![format!("@{}", missing.display())]) {
            Err(Error::ParamFile { path, .. }) => assert_eq!(path, missing),
            other => panic!("{:?}", other),
        }
    }
}
