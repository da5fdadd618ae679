//! Canonical Encoder
//!
//! Turns a graph into one string that does not depend on blank node labels
//! or statement order:
//!
//! ```text
//! {subject(predicate[object][object])(predicate[object])}{subject...}
//! ```
//!
//! IRIs are written as bare text, literals in their normalized quoted form,
//! and blank nodes as `*` followed by their own properties. A blank node is
//! expanded at most once per top-level subject; a second visit contributes
//! the empty string. Blank objects are walked in label order, so a blank node
//! reachable along two paths is expanded on the path whose label sorts first. Subjects, predicates and objects are each sorted by their
//! encoded text (code point order).
//!
//! The walk uses an explicit stack of frames, so long blank node chains such
//! as RDF lists do not grow the thread stack.

use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet, HashMap, HashSet};

use rdfhash_graph_ir::{BlankId, Graph, Term};

use crate::error::{CanonError, Result, TermPosition};
use crate::literal::{render_literal, LiteralPolicy};

/// Options for [`canonicalize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalizeOptions {
    pub literal_policy: LiteralPolicy,
}

impl CanonicalizeOptions {
    /// Options that keep ill-typed literals instead of failing.
    pub fn lenient() -> Self {
        Self {
            literal_policy: LiteralPolicy::Lenient,
        }
    }
}

/// Encode `graph` with default options (strict literals).
pub fn canonicalize(graph: &Graph) -> Result<String> {
    canonicalize_with(graph, &CanonicalizeOptions::default())
}

/// Encode `graph` into its canonical string.
///
/// Duplicate statements collapse; statement order is irrelevant.
pub fn canonicalize_with(graph: &Graph, options: &CanonicalizeOptions) -> Result<String> {
    let index = Index::build(graph, options.literal_policy)?;

    let mut subjects: Vec<String> = index
        .properties
        .keys()
        .map(|subject| {
            let encoded = index.encode_subject(*subject);
            tracing::trace!(subject = %subject, len = encoded.len(), "encoded subject");
            encoded
        })
        .collect();
    subjects.sort_unstable();

    let mut out = String::with_capacity(subjects.iter().map(|s| s.len() + 2).sum());
    for subject in &subjects {
        out.push('{');
        out.push_str(subject);
        out.push('}');
    }

    tracing::debug!(
        statements = index.statements,
        subjects = subjects.len(),
        bytes = out.len(),
        "canonicalized graph"
    );
    Ok(out)
}

type Objects<'g> = BTreeSet<&'g Term>;
type Properties<'g> = BTreeMap<&'g str, Objects<'g>>;

/// Set-semantics view of a graph: subject → predicate → objects.
struct Index<'g> {
    properties: BTreeMap<&'g Term, Properties<'g>>,
    /// Rendered form of every distinct literal object
    literals: HashMap<&'g Term, String>,
    /// Distinct statements
    statements: usize,
}

impl<'g> Index<'g> {
    fn build(graph: &'g Graph, policy: LiteralPolicy) -> Result<Self> {
        let mut properties: BTreeMap<&'g Term, Properties<'g>> = BTreeMap::new();
        let mut literals = HashMap::new();
        let mut statements = 0;

        for triple in graph.iter() {
            if triple.s.is_literal() {
                return Err(CanonError::invalid_term(TermPosition::Subject, &triple.s));
            }
            let Some(predicate) = triple.p.as_iri() else {
                return Err(CanonError::invalid_term(TermPosition::Predicate, &triple.p));
            };

            if let Some((lexical, datatype, language)) = triple.o.as_literal() {
                if !literals.contains_key(&triple.o) {
                    let rendered = render_literal(lexical, datatype, language, policy)?;
                    literals.insert(&triple.o, rendered);
                }
            }

            let inserted = properties
                .entry(&triple.s)
                .or_default()
                .entry(predicate)
                .or_default()
                .insert(&triple.o);
            if inserted {
                statements += 1;
            }
        }

        Ok(Self {
            properties,
            literals,
            statements,
        })
    }

    /// Text of a non-blank object.
    fn leaf(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => iri.to_string(),
            Term::Literal { .. } => self.literals.get(term).cloned().unwrap_or_default(),
            Term::BlankNode(_) => String::new(),
        }
    }

    /// Encode one top-level subject with a fresh visited set.
    fn encode_subject<'a>(&'a self, root: &'a Term) -> String {
        let mut visited: HashSet<&'a BlankId> = HashSet::new();
        if let Term::BlankNode(id) = root {
            visited.insert(id);
        }
        let mut stack = vec![Frame::open(self, root)];

        loop {
            let Some(frame) = stack.last_mut() else {
                return String::new();
            };
            match frame.advance(self, &mut visited) {
                Some(child) => stack.push(Frame::open(self, child)),
                None => {
                    let done = stack.pop().map(Frame::finish).unwrap_or_default();
                    match stack.last_mut() {
                        Some(parent) => parent.rendered.push(done),
                        None => return done,
                    }
                }
            }
        }
    }
}

/// One node being encoded: its text so far and where it is in its
/// predicate/object iteration.
struct Frame<'a> {
    out: String,
    predicates: Option<btree_map::Iter<'a, &'a str, Objects<'a>>>,
    current: Option<(&'a str, btree_set::Iter<'a, &'a Term>)>,
    /// Encoded objects of the current predicate
    rendered: Vec<String>,
}

impl<'a> Frame<'a> {
    fn open(index: &'a Index<'a>, node: &'a Term) -> Self {
        let out = match node {
            Term::BlankNode(_) => "*".to_string(),
            other => index.leaf(other),
        };
        Self {
            out,
            predicates: index.properties.get(node).map(|p| p.iter()),
            current: None,
            rendered: Vec::new(),
        }
    }

    /// Step through the remaining objects. Returns the next unvisited blank
    /// node to descend into, or `None` once every predicate is written.
    fn advance(
        &mut self,
        index: &'a Index<'a>,
        visited: &mut HashSet<&'a BlankId>,
    ) -> Option<&'a Term> {
        loop {
            if let Some((predicate, objects)) = &mut self.current {
                match objects.next().copied() {
                    Some(object) => match object {
                        Term::BlankNode(id) => {
                            if visited.insert(id) {
                                return Some(object);
                            }
                            self.rendered.push(String::new());
                        }
                        _ => self.rendered.push(index.leaf(object)),
                    },
                    None => {
                        let predicate = *predicate;
                        self.close_predicate(predicate);
                        self.current = None;
                    }
                }
            } else if let Some((predicate, objects)) =
                self.predicates.as_mut().and_then(Iterator::next)
            {
                self.current = Some((*predicate, objects.iter()));
            } else {
                return None;
            }
        }
    }

    /// Write `(predicate[o1][o2]...)` with the objects sorted.
    fn close_predicate(&mut self, predicate: &str) {
        self.rendered.sort_unstable();
        self.out.push('(');
        self.out.push_str(predicate);
        for object in self.rendered.drain(..) {
            self.out.push('[');
            self.out.push_str(&object);
            self.out.push(']');
        }
        self.out.push(')');
    }

    fn finish(self) -> String {
        self.out
    }
}
