//! Format-agnostic RDF graph representation
//!
//! This crate provides the types a graph provider (a parser) produces and the
//! canonical encoder consumes, regardless of the serialization the graph was
//! read from.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!
//! 2. **Lexical literals** - Literals keep the lexical form exactly as written.
//!    Datatype-aware normalization happens at encoding time, never here.
//!
//! 3. **Explicit datatypes** - Plain strings use `xsd:string`, language-tagged
//!    strings use `rdf:langString`.
//!
//! 4. **Bag semantics by default** - `Graph` stores `Vec<Triple>` and keeps
//!    duplicates. Call `dedupe()` for set semantics.
//!
//! # Example
//!
//! ```
//! use rdfhash_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//! graph.dedupe();
//! assert_eq!(graph.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod sink;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use sink::{GraphCollectorSink, GraphSink, TermId};
pub use term::{escape_lexical, BlankId, Term};
pub use triple::Triple;
