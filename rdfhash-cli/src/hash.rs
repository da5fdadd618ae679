use crate::cli::{Cli, InputFormat};
use crate::detect::resolve_format;
use crate::error::{CliError, CliResult};
use crate::input::{read_input, InputSource};
use rayon::prelude::*;
use rdfhash_canon::{hash_graph, CanonicalizeOptions, HashAlgorithm, LiteralPolicy};
use rdfhash_graph_ir::{Graph, Term};
use rdfhash_turtle::{iri, parse_graph, parse_graph_with_base};

/// Everything needed to turn one input into its digest.
#[derive(Debug, Clone)]
pub struct HashSettings {
    pub algorithm: HashAlgorithm,
    pub format: InputFormat,
    pub base: Option<String>,
    pub rebase: Option<(String, String)>,
    pub root: Option<String>,
    pub options: CanonicalizeOptions,
}

impl HashSettings {
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        if let Some(base) = &cli.base {
            if !iri::is_absolute(base) {
                return Err(CliError::Usage(format!(
                    "--base must be an absolute IRI, got '{base}'"
                )));
            }
        }
        let literal_policy = if cli.lenient {
            LiteralPolicy::Lenient
        } else {
            LiteralPolicy::Strict
        };
        Ok(Self {
            algorithm: cli.hash,
            format: cli.input_format,
            base: cli.base.clone(),
            rebase: cli.rebase.clone(),
            root: cli.root.clone(),
            options: CanonicalizeOptions { literal_policy },
        })
    }
}

/// Read, parse, and hash one input.
///
/// Without `--base`, relative IRIs in a file resolve against the file's own
/// `file://` IRI; stdin has no default base.
///
/// `--rebase` is applied before `--root`, so the root IRI is matched in the
/// rebased namespace.
pub fn hash_source(source: &InputSource, settings: &HashSettings) -> CliResult<String> {
    let format = resolve_format(source.path(), settings.format)?;
    let content = read_input(source)?;

    let base = match &settings.base {
        Some(base) => Some(base.clone()),
        None => source.default_base()?,
    };
    let mut graph = match &base {
        Some(base) => parse_graph_with_base(&content, base),
        None => parse_graph(&content),
    }
    .map_err(|e| CliError::parse(source, e))?;

    if let Some((old, new)) = &settings.rebase {
        graph.rebase_iris(old, new);
    }
    if let Some(root) = &settings.root {
        graph = describe(&graph, root, source)?;
    }

    let digest = hash_graph(&graph, settings.algorithm, &settings.options)
        .map_err(|e| CliError::canon(source, e))?;

    tracing::info!(
        input = %source,
        %format,
        statements = graph.len(),
        algorithm = %settings.algorithm,
        "hashed graph"
    );
    Ok(digest)
}

fn describe(graph: &Graph, root: &str, source: &InputSource) -> CliResult<Graph> {
    let description = graph.reachable_from(&Term::iri(root));
    if description.is_empty() {
        return Err(CliError::Input(format!("{source}: no statements about <{root}>")));
    }
    Ok(description)
}

/// Hash every input in parallel. Results keep input order.
pub fn hash_all(sources: &[InputSource], settings: &HashSettings) -> Vec<CliResult<String>> {
    sources
        .par_iter()
        .map(|source| hash_source(source, settings))
        .collect()
}

/// One output line: `<digest>  <label>`.
pub fn format_line(digest: &str, source: &InputSource) -> String {
    format!("{digest}  {source}")
}
