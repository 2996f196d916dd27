//! Attribute parsing over block bodies
//!
//! A line-oriented state machine: each `key = value` line starts an
//! attribute, continuation lines fold into the pending value, and bare
//! closing `}` / `]` lines terminate it. Keys repeat freely; the output
//! keeps list semantics in first-`=`-encountered order.

use tflens_domain::{Attribute, Attributes};

/// Parses a block body into its ordered attribute list.
///
/// Blank lines and `#` comment lines are skipped. A value that spans
/// multiple lines (arrays, maps, heredocs) is newline-joined and
/// trimmed; an attribute whose joined value ends up empty is dropped.
///
/// # Examples
///
/// ```
/// use tflens_application::terraform::parse_attributes;
///
/// let attributes = parse_attributes("source = \"../../modules/vpc\"\ncidr = \"10.0.0.0/16\"");
/// assert_eq!(attributes.first("source"), Some("\"../../modules/vpc\""));
/// assert_eq!(attributes.first("cidr"), Some("\"10.0.0.0/16\""));
/// ```
#[must_use]
pub fn parse_attributes(body: &str) -> Attributes {
    let mut attributes = Attributes::new();
    let mut current_key: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for raw_line in body.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, rest)) = split_assignment(line) {
            flush(&mut attributes, &mut current_key, &mut buffer);
            current_key = Some(key.to_string());
            buffer.push(rest);
        } else if line == "}" || line == "]" {
            buffer.push(line);
            flush(&mut attributes, &mut current_key, &mut buffer);
        } else {
            buffer.push(line);
        }
    }

    flush(&mut attributes, &mut current_key, &mut buffer);
    attributes
}

/// Splits `IDENT WS* = WS* REST` where `IDENT` is `[A-Za-z0-9_]+` and
/// `REST` is non-empty. Returns `None` for anything else, which makes
/// the line a continuation.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let ident_end = line
        .char_indices()
        .take_while(|(_, ch)| ch.is_ascii_alphanumeric() || *ch == '_')
        .last()
        .map(|(idx, ch)| idx + ch.len_utf8())?;

    let after_ident = line[ident_end..].trim_start();
    let rest = after_ident.strip_prefix('=')?.trim_start();
    if rest.is_empty() {
        return None;
    }

    Some((&line[..ident_end], rest))
}

fn flush(attributes: &mut Attributes, current_key: &mut Option<String>, buffer: &mut Vec<&str>) {
    if let Some(key) = current_key.take() {
        let value = buffer.join("\n").trim().to_string();
        if !value.is_empty() {
            attributes.push(Attribute::new(key, value));
        }
    }
    buffer.clear();
}
