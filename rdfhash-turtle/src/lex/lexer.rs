//! Turtle lexer built on winnow.
//!
//! Produces spanned tokens and fails fast on the first lexical error with a
//! line/column and a pointer into the offending source line.

use std::sync::Arc;

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, one_of, take, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{NumberKind, Token, TokenKind};
use crate::error::{line_col, Result, TurtleError};

/// Lexer input: tracks byte offsets for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

/// Lexer for Turtle and N-Triples documents.
pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenize the whole input. The last token is always `Eof`.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.source);

        loop {
            skip_trivia(&mut input);

            let start = input.current_token_start();
            if input.is_empty() {
                tokens.push(Token::new(TokenKind::Eof, start, start));
                return Ok(tokens);
            }

            match next_token(&mut input) {
                Ok(kind) => tokens.push(Token::new(kind, start, input.current_token_start())),
                Err(_) => return Err(self.error_at(start)),
            }
        }
    }

    fn error_at(&self, position: usize) -> TurtleError {
        let rest = &self.source[position..];
        let bad = rest.chars().next().unwrap_or('?');
        let (line, col) = line_col(self.source, position);

        let what = match bad {
            '"' | '\'' => "unterminated or malformed string literal".to_string(),
            '<' => "invalid or unterminated IRI".to_string(),
            c if !c.is_ascii() && !is_pn_chars_base(c) => {
                format!("unexpected character '{}' (U+{:04X})", c.escape_unicode(), c as u32)
            }
            c => format!("unexpected character '{}'", c),
        };

        let text = self.source.lines().nth(line - 1).unwrap_or("");
        let pointer = " ".repeat(col.saturating_sub(1));
        TurtleError::lexer(
            position,
            format!(
                "{} at line {}, column {}\n  |\n{} | {}\n  | {}^",
                what, line, col, line, text, pointer
            ),
        )
    }
}

/// Tokenize a Turtle document.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

fn backtrack<T>() -> ModalResult<T> {
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Skip whitespace and `#` comments.
fn skip_trivia(input: &mut Input<'_>) {
    loop {
        let rest: &str = **input;
        let body = rest.trim_start_matches(is_ws);
        let comment = if body.starts_with('#') {
            body.find(['\n', '\r']).unwrap_or(body.len())
        } else {
            0
        };
        let n = rest.len() - body.len() + comment;
        if n == 0 {
            return;
        }
        input.next_slice(n);
    }
}

fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        "^^".value(TokenKind::DoubleCaret),
        iri_ref,
        blank_node_label,
        delimited('[', take_while(0.., is_ws), ']').value(TokenKind::Anon),
        delimited('(', take_while(0.., is_ws), ')').value(TokenKind::Nil),
        at_word,
        name_or_keyword,
        string_literal,
        number,
        punctuation,
    ))
    .parse_next(input)
}

// IRIs

fn iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '<'.parse_next(input)?;
    let mut iri = String::new();
    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        iri.push_str(chunk);
        match input.chars().next() {
            Some('>') => {
                any.parse_next(input)?;
                return Ok(TokenKind::Iri(Arc::from(iri)));
            }
            Some('\\') => {
                any.parse_next(input)?;
                match any.parse_next(input)? {
                    'u' => iri.push(hex_char(input, 4)?),
                    'U' => iri.push(hex_char(input, 8)?),
                    _ => return backtrack(),
                }
            }
            _ => return backtrack(),
        }
    }
}

/// `n` hex digits naming a Unicode scalar value.
fn hex_char(input: &mut Input<'_>, n: usize) -> ModalResult<char> {
    let hex: &str = take_while(n..=n, AsChar::is_hex_digit).parse_next(input)?;
    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(c) => Ok(c),
        None => backtrack(),
    }
}

// Names

/// Byte length of a name whose first char satisfies `first`, whose later
/// chars satisfy `body`, and which may contain but not end with dots.
fn dotted_len(s: &str, first: fn(char) -> bool, body: fn(char) -> bool) -> usize {
    let mut end = 0;
    for (i, c) in s.char_indices() {
        if i == 0 {
            if !first(c) {
                return 0;
            }
            end = c.len_utf8();
        } else if c == '.' {
            continue;
        } else if body(c) {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

fn blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "_:".parse_next(input)?;
    let len = dotted_len(input, is_blank_label_start, is_pn_chars);
    if len == 0 {
        return backtrack();
    }
    let label: &str = take(len).parse_next(input)?;
    Ok(TokenKind::BlankNodeLabel(Arc::from(label)))
}

fn pn_prefix<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    let len = dotted_len(input, is_pn_chars_base, is_pn_chars);
    if len == 0 {
        return backtrack();
    }
    take(len).parse_next(input)
}

/// Scan a `PN_LOCAL`, returning the consumed byte length and the decoded name
/// (`\`-escapes removed, `%XX` kept verbatim).
fn scan_pn_local(s: &str) -> Option<(usize, String)> {
    let mut out = String::new();
    let mut pos = 0;
    let mut end = 0;
    let mut committed = 0;

    while let Some(c) = s[pos..].chars().next() {
        match c {
            '%' => {
                let Some(hex) = s.get(pos + 1..pos + 3) else {
                    break;
                };
                if !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    break;
                }
                out.push('%');
                out.push_str(hex);
                pos += 3;
            }
            '\\' => match s[pos + 1..].chars().next() {
                Some(e) if is_local_escape(e) => {
                    out.push(e);
                    pos += 1 + e.len_utf8();
                }
                _ => break,
            },
            '.' if pos > 0 => {
                // Only part of the name if something follows it.
                out.push('.');
                pos += 1;
                continue;
            }
            c if (pos == 0 && is_pn_local_start(c)) || (pos > 0 && is_pn_local_char(c)) => {
                out.push(c);
                pos += c.len_utf8();
            }
            _ => break,
        }
        end = pos;
        committed = out.len();
    }

    if end == 0 {
        return None;
    }
    out.truncate(committed);
    Some((end, out))
}

/// Prefixed names (`ex:a`, `:a`, `ex:`) and bare-word keywords.
fn name_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let word = opt(pn_prefix).parse_next(input)?;

    if opt(':').parse_next(input)?.is_some() {
        let prefix: Arc<str> = Arc::from(word.unwrap_or(""));
        return match scan_pn_local(input) {
            Some((len, local)) => {
                take(len).parse_next(input)?;
                Ok(TokenKind::PrefixedName {
                    prefix,
                    local: Arc::from(local),
                })
            }
            None => Ok(TokenKind::PrefixedNameNs(prefix)),
        };
    }

    match word {
        Some("a") => Ok(TokenKind::KwA),
        Some("true") => Ok(TokenKind::KwTrue),
        Some("false") => Ok(TokenKind::KwFalse),
        Some(w) if w.eq_ignore_ascii_case("prefix") => Ok(TokenKind::KwSparqlPrefix),
        Some(w) if w.eq_ignore_ascii_case("base") => Ok(TokenKind::KwSparqlBase),
        _ => backtrack(),
    }
}

/// `@prefix`, `@base`, or a language tag.
fn at_word(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let word: &str = preceded('@', take_while(1.., is_lang_char)).parse_next(input)?;
    Ok(match word {
        "prefix" => TokenKind::KwPrefix,
        "base" => TokenKind::KwBase,
        tag => TokenKind::LangTag(Arc::from(tag)),
    })
}

// Strings

fn string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let quote: char = one_of(['"', '\'']).parse_next(input)?;
    let long = input.chars().take(2).filter(|&c| c == quote).count() == 2;
    if long {
        take(2usize).parse_next(input)?;
    }
    let body = string_body(input, quote, long)?;
    Ok(TokenKind::String(Arc::from(body)))
}

fn string_body(input: &mut Input<'_>, quote: char, long: bool) -> ModalResult<String> {
    let mut out = String::new();
    loop {
        let chunk: &str = take_while(0.., |c: char| {
            c != quote && c != '\\' && (long || (c != '\n' && c != '\r'))
        })
        .parse_next(input)?;
        out.push_str(chunk);

        match input.chars().next() {
            Some('\\') => {
                any.parse_next(input)?;
                out.push(echar(input)?);
            }
            Some(c) if c == quote && !long => {
                any.parse_next(input)?;
                return Ok(out);
            }
            Some(c) if c == quote => {
                let run = input.chars().take_while(|&q| q == quote).count();
                if run < 3 {
                    let quotes: &str = take(run).parse_next(input)?;
                    out.push_str(quotes);
                } else {
                    // Quotes beyond the closing three belong to the content.
                    let extra: &str = take(run - 3).parse_next(input)?;
                    out.push_str(extra);
                    take(3usize).parse_next(input)?;
                    return Ok(out);
                }
            }
            _ => return backtrack(),
        }
    }
}

fn echar(input: &mut Input<'_>) -> ModalResult<char> {
    match any.parse_next(input)? {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        'u' => hex_char(input, 4),
        'U' => hex_char(input, 8),
        _ => backtrack(),
    }
}

// Numbers

fn sign(input: &mut Input<'_>) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

fn double<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        sign,
        alt(((digit1, '.', digit0).void(), ('.', digit1).void(), digit1.void())),
        one_of(['e', 'E']),
        sign,
        digit1,
    )
        .take()
        .parse_next(input)
}

fn decimal<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (sign, digit0, '.', digit1).take().parse_next(input)
}

fn integer<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (sign, digit1).take().parse_next(input)
}

fn number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let (kind, lexical) = alt((
        double.map(|s| (NumberKind::Double, s)),
        decimal.map(|s| (NumberKind::Decimal, s)),
        integer.map(|s| (NumberKind::Integer, s)),
    ))
    .parse_next(input)?;
    Ok(TokenKind::Number {
        kind,
        lexical: Arc::from(lexical),
    })
}

fn punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c| match c {
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '[' => Some(TokenKind::LBracket),
        ']' => Some(TokenKind::RBracket),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        _ => None,
    })
    .parse_next(input)
}
