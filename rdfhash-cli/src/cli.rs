use clap::{Parser, ValueEnum};
use rdfhash_canon::HashAlgorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rdfhash",
    about = "Print blank-node-invariant digests of RDF graphs",
    version
)]
pub struct Cli {
    /// RDF files to hash ("-" reads stdin)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Hash algorithm: none, sha224, sha256, sha384, sha512
    #[arg(
        long = "hash",
        short = 'a',
        value_name = "ALGORITHM",
        default_value = "sha256",
        value_parser = parse_algorithm
    )]
    pub hash: HashAlgorithm,

    /// Input serialization
    #[arg(long, short = 'I', value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Base IRI for resolving relative IRIs
    #[arg(long, value_name = "IRI")]
    pub base: Option<String>,

    /// Rewrite IRIs under OLD to live under NEW before hashing
    #[arg(long, value_name = "OLD=NEW", value_parser = parse_rebase)]
    pub rebase: Option<(String, String)>,

    /// Hash only the description of this IRI (its statements plus reachable blank nodes)
    #[arg(long, value_name = "IRI")]
    pub root: Option<String>,

    /// Keep literals that are invalid for their datatype instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Enable verbose output
    #[arg(
        long,
        short = 'v',
        visible_alias = "debug",
        short_alias = 'd',
        conflicts_with = "quiet"
    )]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

/// `--input-format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Guess from the file extension
    Auto,
    /// Turtle
    #[value(alias = "ttl")]
    Turtle,
    /// N-Triples (parsed as Turtle)
    #[value(alias = "nt")]
    Ntriples,
}

fn parse_algorithm(s: &str) -> Result<HashAlgorithm, String> {
    s.parse().map_err(|e: rdfhash_canon::CanonError| e.to_string())
}

fn parse_rebase(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((old, new)) if !old.is_empty() && !new.is_empty() => {
            Ok((old.to_string(), new.to_string()))
        }
        _ => Err(format!("expected OLD=NEW, got '{s}'")),
    }
}
