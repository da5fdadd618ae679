//! Recursive-descent Turtle parser emitting into a `GraphSink`.
//!
//! N-Triples documents are accepted too: every N-Triples statement is also a
//! Turtle statement.

use std::collections::HashMap;

use rdfhash_graph_ir::{Datatype, GraphSink, TermId};
use rdfhash_vocab::{rdf, xsd};

use crate::error::{Result, TurtleError};
use crate::iri;
use crate::lex::{tokenize, NumberKind, Token, TokenKind};

/// Turtle parser state.
pub struct Parser<'a, S> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    prefixes: HashMap<String, String>,
    base: Option<String>,
    triples: usize,
}

impl<'a, S: GraphSink> Parser<'a, S> {
    /// Tokenize `source` and prepare to parse it into `sink`.
    ///
    /// `base` seeds relative IRI resolution; an `@base` directive in the
    /// document replaces it.
    pub fn new(source: &'a str, sink: &'a mut S, base: Option<&str>) -> Result<Self> {
        Ok(Self {
            source,
            tokens: tokenize(source)?,
            pos: 0,
            sink,
            prefixes: HashMap::new(),
            base: base.map(str::to_string),
            triples: 0,
        })
    }

    /// Parse the whole document. Returns the number of emitted triples.
    pub fn parse(mut self) -> Result<usize> {
        while !self.peek().is_eof() {
            self.statement()?;
        }
        tracing::debug!(
            triples = self.triples,
            prefixes = self.prefixes.len(),
            "parsed document"
        );
        Ok(self.triples)
    }

    // Token cursor

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn kind(&self) -> TokenKind {
        self.peek().kind.clone()
    }

    fn bump(&mut self) {
        if !self.peek().is_eof() {
            self.pos += 1;
        }
    }

    fn at(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        let hit = self.at(kind);
        if hit {
            self.bump();
        }
        hit
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    fn unexpected(&self, expected: &str) -> TurtleError {
        let token = self.peek();
        TurtleError::parse(
            self.source,
            token.start,
            format!("expected {}, found {}", expected, token.kind.describe()),
        )
    }

    fn emit(&mut self, s: TermId, p: TermId, o: TermId) {
        self.sink.emit_triple(s, p, o);
        self.triples += 1;
    }

    // Statements

    fn statement(&mut self) -> Result<()> {
        match self.kind() {
            TokenKind::KwPrefix => self.prefix_directive(true),
            TokenKind::KwSparqlPrefix => self.prefix_directive(false),
            TokenKind::KwBase => self.base_directive(true),
            TokenKind::KwSparqlBase => self.base_directive(false),
            _ => self.triples_statement(),
        }
    }

    fn prefix_directive(&mut self, dotted: bool) -> Result<()> {
        self.bump();
        let TokenKind::PrefixedNameNs(prefix) = self.kind() else {
            return Err(self.unexpected("prefix name"));
        };
        self.bump();
        let TokenKind::Iri(reference) = self.kind() else {
            return Err(self.unexpected("namespace IRI"));
        };
        let namespace = self.resolve(&reference)?;
        self.bump();

        self.sink.on_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix.to_string(), namespace);

        if dotted {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn base_directive(&mut self, dotted: bool) -> Result<()> {
        self.bump();
        let TokenKind::Iri(reference) = self.kind() else {
            return Err(self.unexpected("base IRI"));
        };
        let base = self.resolve(&reference)?;
        self.bump();

        self.sink.on_base(&base);
        self.base = Some(base);

        if dotted {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn triples_statement(&mut self) -> Result<()> {
        if self.at(&TokenKind::LBracket) {
            // `[ ... ] .` may stand alone without a predicate list.
            let subject = self.blank_property_list()?;
            if !self.at(&TokenKind::Dot) {
                self.predicate_object_list(subject)?;
            }
        } else {
            let subject = self.subject()?;
            self.predicate_object_list(subject)?;
        }
        self.expect(&TokenKind::Dot)
    }

    // Terms

    /// IRI-valued tokens: `<...>`, `p:l`, `p:`.
    fn named(&self, kind: &TokenKind) -> Option<Result<String>> {
        match kind {
            TokenKind::Iri(reference) => Some(self.resolve(reference)),
            TokenKind::PrefixedName { prefix, local } => Some(self.expand(prefix, local)),
            TokenKind::PrefixedNameNs(prefix) => Some(self.expand(prefix, "")),
            _ => None,
        }
    }

    fn subject(&mut self) -> Result<TermId> {
        let kind = self.kind();
        if let Some(iri) = self.named(&kind) {
            let iri = iri?;
            self.bump();
            return Ok(self.sink.term_iri(&iri));
        }
        match kind {
            TokenKind::BlankNodeLabel(label) => {
                self.bump();
                Ok(self.sink.term_blank(Some(&label)))
            }
            TokenKind::Anon => {
                self.bump();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::LParen => self.collection(),
            TokenKind::Nil => {
                self.bump();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            _ => Err(self.unexpected("subject")),
        }
    }

    fn predicate(&mut self) -> Result<TermId> {
        let kind = self.kind();
        if kind == TokenKind::KwA {
            self.bump();
            return Ok(self.sink.term_iri(rdf::TYPE));
        }
        match self.named(&kind) {
            Some(iri) => {
                let iri = iri?;
                self.bump();
                Ok(self.sink.term_iri(&iri))
            }
            None => Err(self.unexpected("predicate")),
        }
    }

    fn predicate_object_list(&mut self, subject: TermId) -> Result<()> {
        loop {
            let predicate = self.predicate()?;
            loop {
                let object = self.object()?;
                self.emit(subject, predicate, object);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }

            if !self.eat(&TokenKind::Semicolon) {
                return Ok(());
            }
            // Repeated or trailing semicolons are allowed.
            while self.eat(&TokenKind::Semicolon) {}
            if matches!(
                self.peek().kind,
                TokenKind::Dot | TokenKind::RBracket | TokenKind::Eof
            ) {
                return Ok(());
            }
        }
    }

    fn object(&mut self) -> Result<TermId> {
        let kind = self.kind();
        if let Some(iri) = self.named(&kind) {
            let iri = iri?;
            self.bump();
            return Ok(self.sink.term_iri(&iri));
        }
        match kind {
            TokenKind::BlankNodeLabel(label) => {
                self.bump();
                Ok(self.sink.term_blank(Some(&label)))
            }
            TokenKind::Anon => {
                self.bump();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::LBracket => self.blank_property_list(),
            TokenKind::LParen => self.collection(),
            TokenKind::Nil => {
                self.bump();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            TokenKind::String(value) => {
                self.bump();
                self.string_literal(&value)
            }
            TokenKind::Number { kind, lexical } => {
                self.bump();
                let datatype = match kind {
                    NumberKind::Integer => Datatype::xsd_integer(),
                    NumberKind::Decimal => Datatype::xsd_decimal(),
                    NumberKind::Double => Datatype::xsd_double(),
                };
                Ok(self.sink.term_literal(&lexical, datatype, None))
            }
            TokenKind::KwTrue | TokenKind::KwFalse => {
                self.bump();
                let lexical = if kind == TokenKind::KwTrue { "true" } else { "false" };
                Ok(self.sink.term_literal(lexical, Datatype::xsd_boolean(), None))
            }
            _ => Err(self.unexpected("object")),
        }
    }

    /// The suffix of a quoted literal: `@lang`, `^^datatype`, or nothing.
    fn string_literal(&mut self, value: &str) -> Result<TermId> {
        match self.kind() {
            TokenKind::LangTag(lang) => {
                self.bump();
                Ok(self
                    .sink
                    .term_literal(value, Datatype::rdf_lang_string(), Some(&lang)))
            }
            TokenKind::DoubleCaret => {
                self.bump();
                let kind = self.kind();
                let datatype = match self.named(&kind) {
                    Some(iri) => iri?,
                    None => return Err(self.unexpected("datatype IRI")),
                };
                self.bump();
                let datatype = if datatype == xsd::STRING {
                    Datatype::xsd_string()
                } else {
                    Datatype::from_iri(&datatype)
                };
                Ok(self.sink.term_literal(value, datatype, None))
            }
            _ => Ok(self.sink.term_literal(value, Datatype::xsd_string(), None)),
        }
    }

    /// `[ predicateObjectList? ]`
    fn blank_property_list(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LBracket)?;
        let node = self.sink.term_blank(None);
        if !self.at(&TokenKind::RBracket) {
            self.predicate_object_list(node)?;
        }
        self.expect(&TokenKind::RBracket)?;
        Ok(node)
    }

    /// `( item* )` as an `rdf:first` / `rdf:rest` chain.
    fn collection(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LParen)?;
        if self.eat(&TokenKind::RParen) {
            return Ok(self.sink.term_iri(rdf::NIL));
        }

        let first = self.sink.term_iri(rdf::FIRST);
        let rest = self.sink.term_iri(rdf::REST);
        let head = self.sink.term_blank(None);
        let mut cell = head;

        loop {
            let item = self.object()?;
            self.emit(cell, first, item);
            if self.eat(&TokenKind::RParen) {
                let nil = self.sink.term_iri(rdf::NIL);
                self.emit(cell, rest, nil);
                return Ok(head);
            }
            if self.peek().is_eof() {
                return Err(self.unexpected("')'"));
            }
            let next = self.sink.term_blank(None);
            self.emit(cell, rest, next);
            cell = next;
        }
    }

    // IRIs

    fn resolve(&self, reference: &str) -> Result<String> {
        if iri::is_absolute(reference) {
            return Ok(reference.to_string());
        }
        match &self.base {
            Some(base) => Ok(iri::resolve(base, reference)),
            None => Err(TurtleError::IriResolution(format!(
                "relative IRI <{}> without a base IRI",
                reference
            ))),
        }
    }

    fn expand(&self, prefix: &str, local: &str) -> Result<String> {
        match self.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{}{}", namespace, local)),
            None => Err(TurtleError::UndefinedPrefix(prefix.to_string())),
        }
    }
}

/// Parse a Turtle (or N-Triples) document into `sink`.
pub fn parse<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink, None)?.parse().map(|_| ())
}

/// Parse with an initial base IRI for relative references.
pub fn parse_with_base<S: GraphSink>(input: &str, base: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink, Some(base))?.parse().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfhash_graph_ir::{Graph, GraphCollectorSink, Term};

    fn parse_to_graph(input: &str) -> Result<Graph> {
        let mut sink = GraphCollectorSink::new();
        parse(input, &mut sink)?;
        Ok(sink.finish())
    }

    fn only_object(input: &str) -> Term {
        let graph = parse_to_graph(input).unwrap();
        assert_eq!(graph.len(), 1);
        graph.triples()[0].o.clone()
    }

    #[test]
    fn test_simple_triple() {
        let graph =
            parse_to_graph(r#"<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" ."#)
                .unwrap();
        assert_eq!(graph.len(), 1);
        let triple = &graph.triples()[0];
        assert_eq!(triple.s.as_iri(), Some("http://example.org/alice"));
        assert_eq!(triple.p.as_iri(), Some("http://xmlns.com/foaf/0.1/name"));
        assert_eq!(triple.o, Term::string("Alice"));
    }

    #[test]
    fn test_prefixes_and_a() {
        let graph = parse_to_graph(
            r#"
            @prefix ex: <http://example.org/> .
            PREFIX foaf: <http://xmlns.com/foaf/0.1/>
            ex:alice a foaf:Person .
            "#,
        )
        .unwrap();
        let triple = &graph.triples()[0];
        assert_eq!(triple.s.as_iri(), Some("http://example.org/alice"));
        assert_eq!(triple.p.as_iri(), Some(rdf::TYPE));
        assert_eq!(triple.o.as_iri(), Some("http://xmlns.com/foaf/0.1/Person"));
        assert_eq!(graph.prefixes.len(), 2);
    }

    #[test]
    fn test_predicate_and_object_lists() {
        let graph = parse_to_graph(
            r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:knows ex:bob, ex:carol ;
                     ex:age 30 ; .
            "#,
        )
        .unwrap();
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_blank_nodes() {
        let graph = parse_to_graph(
            r#"
            @prefix ex: <http://example.org/> .
            _:b1 ex:knows [ ex:name "Bob" ] .
            _:b1 ex:age 3 .
            "#,
        )
        .unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.subjects().len(), 2);
    }

    #[test]
    fn test_standalone_property_list() {
        let graph = parse_to_graph(
            r#"
            @prefix ex: <http://example.org/> .
            [ ex:p "v" ] .
            "#,
        )
        .unwrap();
        assert_eq!(graph.len(), 1);
        assert!(graph.triples()[0].s.is_blank());
    }

    #[test]
    fn test_typed_literal() {
        let object = only_object(
            r#"
            @prefix ex: <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            ex:alice ex:born "2000-01-01"^^xsd:date .
            "#,
        );
        assert_eq!(object, Term::typed("2000-01-01", Datatype::xsd_date()));
    }

    #[test]
    fn test_explicit_xsd_string_equals_plain() {
        let object = only_object(
            r#"<http://e/s> <http://e/p> "v"^^<http://www.w3.org/2001/XMLSchema#string> ."#,
        );
        assert_eq!(object, Term::string("v"));
    }

    #[test]
    fn test_language_tagged_literal() {
        let object = only_object(r#"<http://e/s> <http://e/p> "chat"@fr ."#);
        assert_eq!(object, Term::lang_string("chat", "fr"));
    }

    #[test]
    fn test_numeric_literals_keep_lexical_form() {
        let object = only_object("<http://e/s> <http://e/p> 007 .");
        assert_eq!(object, Term::typed("007", Datatype::xsd_integer()));

        let object = only_object("<http://e/s> <http://e/p> 1.50 .");
        assert_eq!(object, Term::typed("1.50", Datatype::xsd_decimal()));

        let object = only_object("<http://e/s> <http://e/p> 1E2 .");
        assert_eq!(object, Term::typed("1E2", Datatype::xsd_double()));
    }

    #[test]
    fn test_boolean_literal() {
        let object = only_object("<http://e/s> <http://e/p> true .");
        assert_eq!(object, Term::boolean(true));
    }

    #[test]
    fn test_collection() {
        let graph = parse_to_graph(
            r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:friends ( ex:bob ex:carol ) .
            "#,
        )
        .unwrap();
        // alice → head, two rdf:first, two rdf:rest
        assert_eq!(graph.len(), 5);
        let nil_count = graph
            .iter()
            .filter(|t| t.o.as_iri() == Some(rdf::NIL))
            .count();
        assert_eq!(nil_count, 1);
    }

    #[test]
    fn test_empty_collection() {
        let object = only_object("<http://e/s> <http://e/p> () .");
        assert_eq!(object.as_iri(), Some(rdf::NIL));
    }

    #[test]
    fn test_base_resolution_keeps_fragment() {
        let graph = parse_to_graph(
            r#"
            @base <http://example.org/path/doc> .
            <#me> <../name> "Me" .
            "#,
        )
        .unwrap();
        let triple = &graph.triples()[0];
        assert_eq!(triple.s.as_iri(), Some("http://example.org/path/doc#me"));
        assert_eq!(triple.p.as_iri(), Some("http://example.org/name"));
        assert_eq!(graph.base.as_deref(), Some("http://example.org/path/doc"));
    }

    #[test]
    fn test_parse_with_base() {
        let mut sink = GraphCollectorSink::new();
        parse_with_base("<a> <b> <c> .", "http://example.org/", &mut sink).unwrap();
        let graph = sink.finish();
        assert_eq!(graph.triples()[0].o.as_iri(), Some("http://example.org/c"));
    }

    #[test]
    fn test_ntriples_document() {
        let input = "<http://e/s> <http://e/p> _:b0 .\n\
                     _:b0 <http://e/q> \"x\\ty\"^^<http://e/dt> .\n";
        let graph = parse_to_graph(input).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.triples()[1].o,
            Term::typed("x\ty", Datatype::from_iri("http://e/dt"))
        );
    }

    #[test]
    fn test_relative_iri_without_base_fails() {
        let err = parse_to_graph("<a> <b> <c> .").unwrap_err();
        assert!(matches!(err, TurtleError::IriResolution(_)));
    }

    #[test]
    fn test_undefined_prefix() {
        let err = parse_to_graph("ex:a ex:b ex:c .").unwrap_err();
        assert!(matches!(err, TurtleError::UndefinedPrefix(p) if p == "ex"));
    }

    #[test]
    fn test_missing_dot_reports_location() {
        let err = parse_to_graph("<http://e/s> <http://e/p> <http://e/o>\n<http://e/t> <http://e/p> 1 .")
            .unwrap_err();
        match err {
            TurtleError::Parse { line, column, message, .. } => {
                assert_eq!((line, column), (2, 1));
                assert!(message.contains("expected '.'"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_literal_subject_rejected() {
        let err = parse_to_graph(r#""s" <http://e/p> <http://e/o> ."#).unwrap_err();
        assert!(err.to_string().contains("expected subject"));
    }
}
