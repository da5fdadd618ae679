use crate::error::{CliError, CliResult};
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where one input graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// From a file on disk.
    File(PathBuf),
    /// From stdin (`-`).
    Stdin,
}

impl InputSource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    /// File path, or `None` for stdin.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::File(path) => Some(path),
            InputSource::Stdin => None,
        }
    }

    /// Base IRI for relative references when none is given: the `file://`
    /// IRI of the file itself. Stdin has none.
    pub fn default_base(&self) -> CliResult<Option<String>> {
        match self {
            InputSource::File(path) => {
                let absolute = std::fs::canonicalize(path).map_err(|e| {
                    CliError::Input(format!("failed to resolve {}: {e}", path.display()))
                })?;
                Ok(Some(file_iri(&absolute)))
            }
            InputSource::Stdin => Ok(None),
        }
    }
}

/// `file://` IRI of an absolute path. Characters that may not appear in an
/// IRI are percent-encoded; `\` separators become `/`.
fn file_iri(absolute: &Path) -> String {
    let path = absolute.to_string_lossy();
    let mut out = String::with_capacity(path.len() + 8);
    out.push_str("file://");
    if !path.starts_with('/') {
        out.push('/');
    }
    for c in path.chars() {
        match c {
            '\\' => out.push('/'),
            ' ' | '"' | '#' | '%' | '<' | '>' | '?' | '[' | ']' | '^' | '`' | '{' | '|' | '}' => {
                out.push_str(&format!("%{:02X}", c as u32))
            }
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{b:02X}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Label printed next to the digest.
impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => f.write_str("-"),
        }
    }
}

/// Resolve positional arguments. Stdin may be named at most once.
pub fn resolve_inputs(args: &[PathBuf]) -> CliResult<Vec<InputSource>> {
    let sources: Vec<InputSource> = args.iter().map(|a| InputSource::from_arg(a)).collect();
    if sources.iter().filter(|s| **s == InputSource::Stdin).count() > 1 {
        return Err(CliError::Usage("stdin ('-') can only be read once".into()));
    }
    Ok(sources)
}

/// Read content from an input source.
pub fn read_input(source: &InputSource) -> CliResult<String> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display()))),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("a.ttl")),
            InputSource::File(PathBuf::from("a.ttl"))
        );
        assert_eq!(InputSource::Stdin.to_string(), "-");
    }

    #[test]
    fn test_stdin_once() {
        let args = [PathBuf::from("-"), PathBuf::from("a.ttl"), PathBuf::from("-")];
        assert!(matches!(resolve_inputs(&args), Err(CliError::Usage(_))));
        assert_eq!(resolve_inputs(&args[..2]).unwrap().len(), 2);
    }

    #[test]
    fn test_file_iri() {
        assert_eq!(
            file_iri(Path::new("/data/my graph#1.ttl")),
            "file:///data/my%20graph%231.ttl"
        );
        assert_eq!(file_iri(Path::new("/a/b.ttl")), "file:///a/b.ttl");
    }

    #[test]
    fn test_default_base() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("doc.ttl");
        std::fs::write(&path, "").unwrap();

        let base = InputSource::File(path).default_base().unwrap().unwrap();
        assert!(base.starts_with("file:///"), "{base}");
        assert!(base.ends_with("/doc.ttl"), "{base}");
        assert_eq!(InputSource::Stdin.default_base().unwrap(), None);
    }

    #[test]
    fn test_missing_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/data.ttl"));
        assert!(matches!(
            read_input(&source),
            Err(CliError::Input(msg)) if msg.contains("/nonexistent/data.ttl")
        ));
    }
}
