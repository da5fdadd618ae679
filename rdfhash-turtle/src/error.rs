//! Error types for Turtle parsing

/// Error type for Turtle parsing operations
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    /// Lexer error (invalid token). The message carries line, column and a
    /// source pointer.
    #[error("Lexer error: {message}")]
    Lexer { position: usize, message: String },

    /// Parser error (unexpected token or invalid structure)
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        position: usize,
        line: usize,
        column: usize,
        message: String,
    },

    /// IRI resolution error (relative IRI without base)
    #[error("IRI resolution error: {0}")]
    IriResolution(String),

    /// Prefix not defined
    #[error("Undefined prefix: {0}:")]
    UndefinedPrefix(String),
}

/// Result type for Turtle operations
pub type Result<T> = std::result::Result<T, TurtleError>;

impl TurtleError {
    /// Create a lexer error
    pub fn lexer(position: usize, message: impl Into<String>) -> Self {
        Self::Lexer {
            position,
            message: message.into(),
        }
    }

    /// Create a parse error located in `source`
    pub fn parse(source: &str, position: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_col(source, position);
        Self::Parse {
            position,
            line,
            column,
            message: message.into(),
        }
    }

    /// Byte offset of the error in the input, when known
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Lexer { position, .. } | Self::Parse { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Convert a byte offset to a 1-indexed (line, column) pair.
pub(crate) fn line_col(source: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, c) in source.char_indices() {
        if i >= position {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
