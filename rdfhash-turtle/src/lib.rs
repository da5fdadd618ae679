//! Turtle and N-Triples parser for rdfhash.
//!
//! The parser emits into any `rdfhash_graph_ir::GraphSink`; the `parse_graph`
//! helpers collect straight into a `Graph`.
//!
//! # Example
//!
//! ```
//! use rdfhash_turtle::parse_graph;
//!
//! let turtle = r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:alice ex:name "Alice" ;
//!              ex:age 30 .
//! "#;
//!
//! let graph = parse_graph(turtle).unwrap();
//! assert_eq!(graph.len(), 2);
//! ```

pub mod error;
pub mod iri;
pub mod lex;
pub mod parser;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Lexer, NumberKind, Token, TokenKind};
pub use parser::{parse, parse_with_base};

use rdfhash_graph_ir::{Graph, GraphCollectorSink};

/// Parse a document into a new `Graph`.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let mut sink = GraphCollectorSink::new();
    parse(input, &mut sink)?;
    Ok(sink.finish())
}

/// Parse a document into a new `Graph`, resolving relative IRIs against `base`.
pub fn parse_graph_with_base(input: &str, base: &str) -> Result<Graph> {
    let mut sink = GraphCollectorSink::with_base(base);
    parse_with_base(input, base, &mut sink)?;
    Ok(sink.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph(
            r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:knows [ ex:name "Bob" ] .
            "#,
        )
        .unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.prefixes.get("ex").map(String::as_str),
            Some("http://example.org/")
        );
    }

    #[test]
    fn test_parse_graph_with_base() {
        let graph = parse_graph_with_base("<s> <p> <o> .", "http://example.org/data/").unwrap();
        assert_eq!(graph.base.as_deref(), Some("http://example.org/data/"));
        assert_eq!(
            graph.triples()[0].s.as_iri(),
            Some("http://example.org/data/s")
        );
    }

    #[test]
    fn test_lexer_error_surfaces() {
        let err = parse_graph("<http://e/s> <http://e/p> $ .").unwrap_err();
        assert!(matches!(err, TurtleError::Lexer { .. }));
    }
}
