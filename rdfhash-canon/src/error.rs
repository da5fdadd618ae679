//! Error types for canonicalization and digests

use std::fmt;

/// Where an offending term sits in its statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPosition {
    Subject,
    Predicate,
}

impl fmt::Display for TermPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TermPosition::Subject => "subject",
            TermPosition::Predicate => "predicate",
        })
    }
}

/// Error type for canonicalization and digest operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// The requested digest algorithm is not known
    #[error("unsupported hash algorithm '{name}' (expected one of: none, sha224, sha256, sha384, sha512)")]
    UnsupportedAlgorithm { name: String },

    /// A literal's lexical form is not valid for its datatype
    #[error("malformed literal \"{lexical}\"^^<{datatype}>: {reason}")]
    MalformedLiteral {
        lexical: String,
        datatype: String,
        reason: String,
    },

    /// A term appears in a position RDF does not allow
    #[error("invalid term in {position} position: {term}")]
    InvalidTerm { position: TermPosition, term: String },
}

/// Result type for canonicalization operations
pub type Result<T> = std::result::Result<T, CanonError>;

impl CanonError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }

    /// Create a malformed literal error
    pub fn malformed_literal(
        lexical: impl Into<String>,
        datatype: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedLiteral {
            lexical: lexical.into(),
            datatype: datatype.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid term error
    pub fn invalid_term(position: TermPosition, term: impl fmt::Display) -> Self {
        Self::InvalidTerm {
            position,
            term: term.to_string(),
        }
    }
}
