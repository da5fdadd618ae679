//! Character classes from the Turtle grammar (`PN_CHARS_BASE` and friends).

/// `PN_CHARS_BASE`: ASCII letters plus the Unicode ranges the grammar allows.
pub fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | 'a'..='z'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{02FF}'
        | '\u{0370}'..='\u{037D}'
        | '\u{037F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

/// `PN_CHARS_U`
pub fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

/// `PN_CHARS`
pub fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c == '-'
        || c.is_ascii_digit()
        || c == '\u{00B7}'
        || matches!(c, '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// First character of a blank node label (after `_:`).
pub fn is_blank_label_start(c: char) -> bool {
    is_pn_chars_u(c) || c.is_ascii_digit()
}

/// First character of a `PN_LOCAL`, excluding `%` and `\` escapes.
pub fn is_pn_local_start(c: char) -> bool {
    is_pn_chars_u(c) || c == ':' || c.is_ascii_digit()
}

/// Characters that may appear unescaped inside a `PN_LOCAL`.
pub fn is_pn_local_char(c: char) -> bool {
    is_pn_chars(c) || c == ':'
}

/// Characters allowed after `\` in a `PN_LOCAL_ESC`.
pub fn is_local_escape(c: char) -> bool {
    "_~.-!$&'()*+,;=/?#@%".contains(c)
}

/// Characters of a language tag body (`[a-zA-Z0-9-]`).
pub fn is_lang_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Turtle whitespace.
pub fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters allowed unescaped inside `<...>`.
pub fn is_iri_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
}
