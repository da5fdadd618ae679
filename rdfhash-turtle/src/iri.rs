//! IRI reference resolution (RFC 3986, section 5).

/// The five components of an IRI reference. Absent components are `None`;
/// the path is always present (possibly empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IriRef<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> IriRef<'a> {
    fn split(iri: &'a str) -> Self {
        let (rest, fragment) = match iri.find('#') {
            Some(i) => (&iri[..i], Some(&iri[i + 1..])),
            None => (iri, None),
        };
        let (rest, query) = match rest.find('?') {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };
        let (scheme, rest) = match scheme_len(rest) {
            Some(i) => (Some(&rest[..i]), &rest[i + 1..]),
            None => (None, rest),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }
}

/// Length of the scheme if `s` starts with `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn scheme_len(s: &str) -> Option<usize> {
    let colon = s.find(':')?;
    let mut chars = s[..colon].chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(colon)
}

/// Whether `reference` is an absolute IRI (has a scheme).
pub fn is_absolute(reference: &str) -> bool {
    let end = reference.find(['?', '#']).unwrap_or(reference.len());
    scheme_len(&reference[..end]).is_some()
}

/// Resolve `reference` against the absolute IRI `base`.
pub fn resolve(base: &str, reference: &str) -> String {
    let r = IriRef::split(reference);
    let b = IriRef::split(base);

    let target = if r.scheme.is_some() {
        Target {
            scheme: r.scheme,
            authority: r.authority,
            path: remove_dot_segments(r.path),
            query: r.query,
        }
    } else if r.authority.is_some() {
        Target {
            scheme: b.scheme,
            authority: r.authority,
            path: remove_dot_segments(r.path),
            query: r.query,
        }
    } else if r.path.is_empty() {
        Target {
            scheme: b.scheme,
            authority: b.authority,
            path: b.path.to_string(),
            query: r.query.or(b.query),
        }
    } else if r.path.starts_with('/') {
        Target {
            scheme: b.scheme,
            authority: b.authority,
            path: remove_dot_segments(r.path),
            query: r.query,
        }
    } else {
        Target {
            scheme: b.scheme,
            authority: b.authority,
            path: remove_dot_segments(&merge(&b, r.path)),
            query: r.query,
        }
    };

    target.compose(r.fragment)
}

struct Target<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: String,
    query: Option<&'a str>,
}

impl Target<'_> {
    fn compose(self, fragment: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(scheme) = self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(authority) = self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(&self.path);
        if let Some(query) = self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

/// Section 5.2.3.
fn merge(base: &IriRef<'_>, path: &str) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{}", path);
    }
    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], path),
        None => path.to_string(),
    }
}

/// Section 5.2.4.
fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let skip = usize::from(input.starts_with('/'));
            let end = input[skip..].find('/').map_or(input.len(), |i| i + skip);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    output
}

fn pop_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}
