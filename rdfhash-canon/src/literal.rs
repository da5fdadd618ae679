//! Datatype-aware literal normalization and rendering
//!
//! Literals with the same value under their datatype must encode identically
//! (`"01"^^xsd:integer` and `"1"^^xsd:integer` are the same statement), so
//! every literal passes through [`normalize_literal`] before it is rendered.
//!
//! ## Rules
//!
//! - Integer family: canonical decimal integer, range-checked per subtype
//! - `xsd:decimal`: no superfluous zeros, at least one fractional digit
//! - `xsd:double` / `xsd:float`: `mantissaEexponent` (`1.0E2`), `INF`, `-INF`, `NaN`
//! - `xsd:boolean`: `true` / `false`
//! - `xsd:dateTime`: values with a timezone are shifted to UTC and written with `Z`
//! - `xsd:date` / `xsd:time`: validated, zero offsets written as `Z`
//!
//! Every other datatype passes through untouched.

use std::borrow::Cow;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use num_bigint::{BigInt, Sign};
use rdfhash_graph_ir::{escape_lexical, Datatype};
use rdfhash_vocab::xsd;

use crate::error::{CanonError, Result};

/// How to treat literals whose lexical form is invalid for their datatype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiteralPolicy {
    /// Fail the whole canonicalization with `MalformedLiteral`.
    #[default]
    Strict,
    /// Render the literal with its lexical form unchanged.
    Lenient,
}

/// Normalize `lexical` to the canonical lexical form of `datatype`.
pub fn normalize_literal<'a>(lexical: &'a str, datatype: &Datatype) -> Result<Cow<'a, str>> {
    let iri = datatype.as_iri();
    // XSD `whiteSpace="collapse"` for every non-string type handled here.
    let value = lexical.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));

    let normalized = match iri {
        dt if xsd::is_integer_family(dt) => normalize_integer(value, dt).map(Cow::Owned),
        xsd::DECIMAL => normalize_decimal(value).map(Cow::Owned),
        xsd::DOUBLE => normalize_floating(value, false).map(Cow::Owned),
        xsd::FLOAT => normalize_floating(value, true).map(Cow::Owned),
        xsd::BOOLEAN => match value {
            "true" | "1" => Ok(Cow::Borrowed("true")),
            "false" | "0" => Ok(Cow::Borrowed("false")),
            _ => Err("expected 'true', 'false', '1', or '0'".to_string()),
        },
        xsd::DATE_TIME => normalize_date_time(value).map(Cow::Owned),
        xsd::DATE => normalize_date(value).map(Cow::Owned),
        xsd::TIME => normalize_time(value).map(Cow::Owned),
        _ => Ok(Cow::Borrowed(lexical)),
    };

    normalized.map_err(|reason| CanonError::malformed_literal(lexical, iri, reason))
}

/// Render a literal in its canonical quoted form: `"value"`, `"value"@lang`
/// or `"value"^^<datatype>`.
///
/// `xsd:string` and language-tagged literals carry no datatype suffix.
/// Language tags are lowercased.
pub fn render_literal(
    lexical: &str,
    datatype: &Datatype,
    language: Option<&str>,
    policy: LiteralPolicy,
) -> Result<String> {
    let value = match normalize_literal(lexical, datatype) {
        Ok(value) => value,
        Err(err) if policy == LiteralPolicy::Lenient => {
            tracing::debug!(error = %err, "keeping malformed literal as written");
            Cow::Borrowed(lexical)
        }
        Err(err) => return Err(err),
    };

    let escaped = escape_lexical(&value);
    let mut out = String::with_capacity(escaped.len() + datatype.as_iri().len() + 6);
    out.push('"');
    out.push_str(&escaped);
    out.push('"');
    if let Some(lang) = language {
        out.push('@');
        out.push_str(&lang.to_ascii_lowercase());
    } else if !datatype.is_xsd_string() {
        out.push_str("^^<");
        out.push_str(datatype.as_iri());
        out.push('>');
    }
    Ok(out)
}

type Normalized = std::result::Result<String, String>;

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// `(negative, digits)` for an optionally signed string.
fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// `(negative, integer part, fraction part)` of an XSD decimal lexical form.
fn split_decimal(s: &str) -> Option<(bool, &str, &str)> {
    let (negative, body) = split_sign(s);
    let (int, frac) = body.split_once('.').unwrap_or((body, ""));
    let valid = !(int.is_empty() && frac.is_empty()) && all_digits(int) && all_digits(frac);
    valid.then_some((negative, int, frac))
}

fn normalize_integer(value: &str, datatype: &str) -> Normalized {
    let (negative, digits) = split_sign(value);
    if digits.is_empty() || !all_digits(digits) {
        return Err("not an integer".to_string());
    }
    let magnitude = BigInt::from_str(digits).map_err(|e| e.to_string())?;
    let n = if negative { -magnitude } else { magnitude };

    if let Some((min, max)) = xsd::integer_bounds(datatype) {
        let below = min.is_some_and(|min| n < BigInt::from(min));
        let above = max.is_some_and(|max| n > BigInt::from(max));
        if below || above {
            return Err(format!(
                "out of range for xsd:{}",
                xsd::datatype_local_name(datatype).unwrap_or(datatype)
            ));
        }
    }
    Ok(n.to_string())
}

fn normalize_decimal(value: &str) -> Normalized {
    let (negative, int, frac) = split_decimal(value).ok_or("not a decimal number")?;
    let unscaled = BigInt::from_str(&format!("{}{}", int, frac)).map_err(|e| e.to_string())?;
    let unscaled = if negative { -unscaled } else { unscaled };
    let decimal = BigDecimal::new(unscaled, frac.len() as i64).normalized();
    Ok(format_decimal(&decimal))
}

/// Plain (non-exponent) form with at least one fractional digit.
fn format_decimal(value: &BigDecimal) -> String {
    let (unscaled, scale) = value.as_bigint_and_exponent();
    let sign = if unscaled.sign() == Sign::Minus { "-" } else { "" };
    let digits = unscaled.magnitude().to_string();

    if scale <= 0 {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        return format!("{}{}{}.0", sign, digits, zeros);
    }

    let scale = scale as usize;
    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int, frac) = padded.split_at(padded.len() - scale);
    format!("{}{}.{}", sign, int, frac)
}

fn normalize_floating(value: &str, single: bool) -> Normalized {
    match value {
        "INF" | "+INF" => return Ok("INF".to_string()),
        "-INF" => return Ok("-INF".to_string()),
        "NaN" => return Ok("NaN".to_string()),
        _ => {}
    }

    let (mantissa, exponent) = match value.find(['e', 'E']) {
        Some(i) => (&value[..i], Some(&value[i + 1..])),
        None => (value, None),
    };
    let exponent_ok = exponent.map_or(true, |e| {
        let (_, digits) = split_sign(e);
        !digits.is_empty() && all_digits(digits)
    });
    if !exponent_ok || split_decimal(mantissa).is_none() {
        return Err("not a floating-point number".to_string());
    }

    let (text, infinite, negative) = if single {
        let v: f32 = value.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
        (format!("{:E}", v), v.is_infinite(), v.is_sign_negative())
    } else {
        let v: f64 = value.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
        (format!("{:E}", v), v.is_infinite(), v.is_sign_negative())
    };

    if infinite {
        return Ok(if negative { "-INF" } else { "INF" }.to_string());
    }
    Ok(match text.split_once('E') {
        Some((m, e)) if !m.contains('.') => format!("{}.0E{}", m, e),
        _ => text,
    })
}

/// Whether `s` matches `shape`, where `d` stands for any ASCII digit.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes()
            .zip(shape.bytes())
            .all(|(c, p)| if p == b'd' { c.is_ascii_digit() } else { c == p })
}

/// Split a trailing `Z` or `±hh:mm` timezone designator.
fn split_timezone(s: &str) -> (&str, Option<&str>) {
    if let Some(main) = s.strip_suffix('Z') {
        return (main, Some("Z"));
    }
    if s.len() >= 6 && s.is_char_boundary(s.len() - 6) {
        let (main, tz) = s.split_at(s.len() - 6);
        if tz.starts_with(['+', '-']) && has_shape(&tz[1..], "dd:dd") {
            return (main, Some(tz));
        }
    }
    (s, None)
}

fn offset_seconds(tz: &str) -> std::result::Result<i32, String> {
    if tz == "Z" {
        return Ok(0);
    }
    let (negative, body) = split_sign(tz);
    let hours: i32 = body[..2].parse().map_err(|_| format!("bad timezone {}", tz))?;
    let minutes: i32 = body[3..].parse().map_err(|_| format!("bad timezone {}", tz))?;
    if minutes > 59 || hours > 14 || (hours == 14 && minutes > 0) {
        return Err(format!("timezone {} out of range", tz));
    }
    let secs = hours * 3600 + minutes * 60;
    Ok(if negative { -secs } else { secs })
}

/// `""` without a timezone, `Z` for a zero offset, the offset itself otherwise.
fn canonical_zone(tz: Option<&str>) -> std::result::Result<&str, String> {
    match tz {
        None => Ok(""),
        Some(tz) => Ok(if offset_seconds(tz)? == 0 { "Z" } else { tz }),
    }
}

/// Split `hh:mm:ss[.fff]` style text into the fixed head and the fraction
/// digits after the dot.
fn split_fraction(main: &str, head_len: usize) -> Option<(&str, &str)> {
    let head = main.get(..head_len)?;
    let rest = main.get(head_len..)?;
    if rest.is_empty() {
        return Some((head, ""));
    }
    let digits = rest.strip_prefix('.')?;
    (!digits.is_empty() && all_digits(digits)).then_some((head, digits))
}

/// Nanoseconds from fraction digits (precision beyond nanoseconds is dropped).
fn fraction_nanos(digits: &str) -> u32 {
    let mut padded: String = digits.chars().take(9).collect();
    while padded.len() < 9 {
        padded.push('0');
    }
    padded.parse().unwrap_or(0)
}

fn fraction_text(nanos: u32) -> String {
    if nanos == 0 {
        return String::new();
    }
    let text = format!(".{:09}", nanos);
    text.trim_end_matches('0').to_string()
}

fn normalize_date_time(value: &str) -> Normalized {
    let (main, tz) = split_timezone(value);
    let (head, digits) =
        split_fraction(main, 19).ok_or("expected YYYY-MM-DDThh:mm:ss[.fff][timezone]")?;
    if !has_shape(head, "dddd-dd-ddTdd:dd:dd") {
        return Err("expected YYYY-MM-DDThh:mm:ss[.fff][timezone]".to_string());
    }

    let naive = NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| e.to_string())?
        .with_nanosecond(fraction_nanos(digits))
        .ok_or("invalid fractional seconds")?;

    let (naive, zone) = match tz {
        None => (naive, ""),
        Some(tz) => {
            let offset = FixedOffset::east_opt(offset_seconds(tz)?)
                .ok_or_else(|| format!("bad timezone {}", tz))?;
            let utc = offset
                .from_local_datetime(&naive)
                .single()
                .ok_or("ambiguous local time")?
                .naive_utc();
            (utc, "Z")
        }
    };

    Ok(format!(
        "{}{}{}",
        naive.format("%Y-%m-%dT%H:%M:%S"),
        fraction_text(naive.nanosecond()),
        zone
    ))
}

fn normalize_date(value: &str) -> Normalized {
    let (main, tz) = split_timezone(value);
    if !has_shape(main, "dddd-dd-dd") {
        return Err("expected YYYY-MM-DD[timezone]".to_string());
    }
    NaiveDate::parse_from_str(main, "%Y-%m-%d").map_err(|e| e.to_string())?;
    Ok(format!("{}{}", main, canonical_zone(tz)?))
}

fn normalize_time(value: &str) -> Normalized {
    let (main, tz) = split_timezone(value);
    let (head, digits) = split_fraction(main, 8).ok_or("expected hh:mm:ss[.fff][timezone]")?;
    if !has_shape(head, "dd:dd:dd") {
        return Err("expected hh:mm:ss[.fff][timezone]".to_string());
    }
    NaiveTime::parse_from_str(head, "%H:%M:%S").map_err(|e| e.to_string())?;
    Ok(format!(
        "{}{}{}",
        head,
        fraction_text(fraction_nanos(digits)),
        canonical_zone(tz)?
    ))
}
