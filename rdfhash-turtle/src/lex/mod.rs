//! Turtle lexer (winnow based).

pub mod chars;
pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{NumberKind, Token, TokenKind};
