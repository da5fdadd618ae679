//! RDF graph - a collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` to preserve duplicates (bag semantics).
//! Call `dedupe()` explicitly if you want set semantics.

use crate::{Term, Triple};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// A collection of RDF triples
///
/// # Example
///
/// ```
/// use rdfhash_graph_ir::{Graph, Term, Triple};
///
/// let mut graph = Graph::new();
///
/// graph.add_triple(
///     Term::iri("http://example.org/alice"),
///     Term::iri("http://xmlns.com/foaf/0.1/name"),
///     Term::string("Alice"),
/// );
///
/// // Sort + dedupe for set semantics
/// graph.dedupe();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
    /// Base IRI from parsing
    pub base: Option<String>,
    /// Prefix mappings from parsing (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with a base IRI
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            ..Default::default()
        }
    }

    /// Set the base IRI
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples (duplicates included)
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Remove duplicate triples (apply set semantics)
    ///
    /// Leaves the triples sorted.
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Get all unique subjects in the graph, in term order
    pub fn subjects(&self) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = self.triples.iter().map(|t| &t.s).collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }

    /// Statements describing `node`, closed over blank nodes.
    ///
    /// Returns every triple whose subject is `node`, plus, transitively, every
    /// triple whose subject is a blank node reachable from `node` through
    /// object positions. Each subject is expanded once, so cycles terminate.
    /// Base and prefixes are carried over.
    pub fn reachable_from(&self, node: &Term) -> Graph {
        let mut by_subject: HashMap<&Term, Vec<&Triple>> = HashMap::new();
        for triple in &self.triples {
            by_subject.entry(&triple.s).or_default().push(triple);
        }

        let mut out = Graph {
            triples: Vec::new(),
            base: self.base.clone(),
            prefixes: self.prefixes.clone(),
        };
        let mut seen: HashSet<&Term> = HashSet::new();
        let mut stack: Vec<&Term> = vec![node];

        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            let Some(triples) = by_subject.get(current) else {
                continue;
            };
            for &triple in triples {
                out.add(triple.clone());
                if triple.o.is_blank() && !seen.contains(&triple.o) {
                    stack.push(&triple.o);
                }
            }
        }

        out
    }

    /// Rewrite IRIs published under `old_base` to live under `new_base`.
    ///
    /// An IRI is rewritten when it equals `old_base` or continues it with a
    /// `/` path separator. A trailing `/` on either base is ignored. Applies
    /// to IRI terms in every position; literal datatypes are left alone.
    pub fn rebase_iris(&mut self, old_base: &str, new_base: &str) {
        let old_base = old_base.strip_suffix('/').unwrap_or(old_base);
        let new_base = new_base.strip_suffix('/').unwrap_or(new_base);

        let rebase = |term: &mut Term| {
            let Term::Iri(iri) = term else {
                return;
            };
            let replaced = if &**iri == old_base {
                Some(new_base.to_string())
            } else {
                iri.strip_prefix(old_base)
                    .filter(|rest| rest.starts_with('/'))
                    .map(|rest| format!("{}{}", new_base, rest))
            };
            if let Some(replaced) = replaced {
                *iri = Arc::from(replaced);
            }
        };

        for triple in &mut self.triples {
            rebase(&mut triple.s);
            rebase(&mut triple.p);
            rebase(&mut triple.o);
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
            base: None,
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{}", local))
    }

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();

        // Add triples in non-sorted order
        graph.add_triple(ex("bob"), ex("name"), Term::string("Bob"));
        graph.add_triple(ex("alice"), ex("name"), Term::string("Alice"));
        graph.add_triple(ex("alice"), ex("age"), Term::integer(30));

        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_graph_dedupe() {
        let mut graph = Graph::new();
        let triple = Triple::new(ex("s"), ex("p"), Term::string("o"));

        graph.add(triple.clone());
        graph.add(triple.clone());
        graph.add(triple);
        assert_eq!(graph.len(), 3);

        graph.dedupe();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_subjects() {
        let graph = make_test_graph();
        let subjects = graph.subjects();
        assert_eq!(subjects, vec![&ex("alice"), &ex("bob")]);
    }

    #[test]
    fn test_from_iterator() {
        let graph: Graph = vec![Triple::new(ex("s"), ex("p"), Term::string("o"))]
            .into_iter()
            .collect();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_reachable_follows_blank_nodes_only() {
        let mut graph = Graph::new();
        graph.add_triple(ex("alice"), ex("address"), Term::blank("addr"));
        graph.add_triple(Term::blank("addr"), ex("city"), Term::string("Berlin"));
        graph.add_triple(Term::blank("addr"), ex("geo"), Term::blank("geo"));
        graph.add_triple(Term::blank("geo"), ex("lat"), Term::string("52.5"));
        graph.add_triple(ex("alice"), ex("knows"), ex("bob"));
        graph.add_triple(ex("bob"), ex("name"), Term::string("Bob"));

        let described = graph.reachable_from(&ex("alice"));
        assert_eq!(described.len(), 5);
        assert!(described.iter().all(|t| t.s != ex("bob")));
    }

    #[test]
    fn test_reachable_terminates_on_cycles() {
        let mut graph = Graph::new();
        graph.add_triple(Term::blank("a"), ex("next"), Term::blank("b"));
        graph.add_triple(Term::blank("b"), ex("next"), Term::blank("a"));
        graph.add_triple(Term::blank("a"), ex("self"), Term::blank("a"));

        let described = graph.reachable_from(&Term::blank("a"));
        assert_eq!(described.len(), 3);
    }

    #[test]
    fn test_reachable_from_unknown_node_is_empty() {
        let graph = make_test_graph();
        assert!(graph.reachable_from(&ex("nobody")).is_empty());
    }

    #[test]
    fn test_rebase_iris() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri("http://old.org/data/x"),
            Term::iri("http://old.org/vocab#p"),
            Term::iri("http://old.org"),
        );
        graph.add_triple(
            Term::iri("http://old.organization/y"),
            Term::iri("http://old.org/vocab#p"),
            Term::string("http://old.org/literal"),
        );

        graph.rebase_iris("http://old.org/", "https://new.net");

        let triples = graph.triples();
        assert_eq!(triples[0].s.as_iri(), Some("https://new.net/data/x"));
        assert_eq!(triples[0].p.as_iri(), Some("https://new.net/vocab#p"));
        assert_eq!(triples[0].o.as_iri(), Some("https://new.net"));
        // Prefix match without a path separator is not rewritten
        assert_eq!(triples[1].s.as_iri(), Some("http://old.organization/y"));
        // Literals are untouched
        assert_eq!(triples[1].o, Term::string("http://old.org/literal"));
    }
}
