use crate::cli::InputFormat;
use crate::error::{CliError, CliResult};
use colored::Colorize;
use std::fmt;
use std::path::Path;

/// RDF serialization of one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    Turtle,
    NTriples,
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RdfFormat::Turtle => "Turtle",
            RdfFormat::NTriples => "N-Triples",
        })
    }
}

/// Resolve the serialization of an input.
///
/// Priority: explicit `--input-format` > file extension. Stdin (`path` is
/// `None`) needs an explicit format.
pub fn resolve_format(path: Option<&Path>, explicit: InputFormat) -> CliResult<RdfFormat> {
    match explicit {
        InputFormat::Turtle => return Ok(RdfFormat::Turtle),
        InputFormat::Ntriples => return Ok(RdfFormat::NTriples),
        InputFormat::Auto => {}
    }

    let Some(path) = path else {
        return Err(CliError::Usage(format!(
            "cannot guess RDF format from stdin\n  {} use -I turtle or -I ntriples",
            "help:".cyan().bold()
        )));
    };

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match ext.as_deref() {
        Some("ttl" | "turtle" | "n3") => Ok(RdfFormat::Turtle),
        Some("nt" | "ntriples") => Ok(RdfFormat::NTriples),
        _ => Err(CliError::Usage(format!(
            "cannot guess RDF format of {}\n  {} use -I turtle or -I ntriples",
            path.display(),
            "help:".cyan().bold()
        ))),
    }
}
