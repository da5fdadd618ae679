//! Turtle token types.

use std::sync::Arc;

/// A token with its source span (byte offsets).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Which numeric production a number token matched.
///
/// The lexical form is kept verbatim so the datatype-aware normalizer sees
/// exactly what the document says (`007` stays `007`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    /// `INTEGER` → xsd:integer
    Integer,
    /// `DECIMAL` → xsd:decimal
    Decimal,
    /// `DOUBLE` → xsd:double
    Double,
}

/// Token kinds for Turtle (and its N-Triples subset).
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // IRIs
    /// `<...>`, escapes already decoded, not yet resolved against the base
    Iri(Arc<str>),
    /// `prefix:` with no local part
    PrefixedNameNs(Arc<str>),
    /// `prefix:local`
    PrefixedName { prefix: Arc<str>, local: Arc<str> },

    // Blank nodes
    /// `_:label`
    BlankNodeLabel(Arc<str>),
    /// `[]`
    Anon,
    /// `()`
    Nil,

    // Literals
    /// Quoted string, escapes decoded
    String(Arc<str>),
    /// Numeric literal in its lexical form
    Number { kind: NumberKind, lexical: Arc<str> },
    /// `@tag`, stored without the `@`
    LangTag(Arc<str>),

    // Keywords
    KwPrefix,
    KwBase,
    KwSparqlPrefix,
    KwSparqlBase,
    KwA,
    KwTrue,
    KwFalse,

    // Punctuation
    Dot,
    Comma,
    Semicolon,
    DoubleCaret,
    LBracket,
    RBracket,
    LParen,
    RParen,

    Eof,
}

impl TokenKind {
    /// Human-readable name used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Iri(_) => "IRI".to_string(),
            TokenKind::PrefixedNameNs(_) | TokenKind::PrefixedName { .. } => {
                format!("prefixed name '{}'", self)
            }
            TokenKind::BlankNodeLabel(_) => format!("blank node '{}'", self),
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Number { lexical, .. } => format!("number '{}'", lexical),
            TokenKind::LangTag(_) => format!("language tag '{}'", self),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("'{}'", other),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Iri(s) => write!(f, "<{}>", s),
            TokenKind::PrefixedNameNs(s) => write!(f, "{}:", s),
            TokenKind::PrefixedName { prefix, local } => write!(f, "{}:{}", prefix, local),
            TokenKind::BlankNodeLabel(s) => write!(f, "_:{}", s),
            TokenKind::Anon => write!(f, "[]"),
            TokenKind::Nil => write!(f, "()"),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::Number { lexical, .. } => write!(f, "{}", lexical),
            TokenKind::LangTag(s) => write!(f, "@{}", s),
            TokenKind::KwPrefix => write!(f, "@prefix"),
            TokenKind::KwBase => write!(f, "@base"),
            TokenKind::KwSparqlPrefix => write!(f, "PREFIX"),
            TokenKind::KwSparqlBase => write!(f, "BASE"),
            TokenKind::KwA => write!(f, "a"),
            TokenKind::KwTrue => write!(f, "true"),
            TokenKind::KwFalse => write!(f, "false"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::DoubleCaret => write!(f, "^^"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::Dot.describe(), "'.'");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
        let n = TokenKind::Number {
            kind: NumberKind::Integer,
            lexical: Arc::from("007"),
        };
        assert_eq!(n.describe(), "number '007'");
    }
}
