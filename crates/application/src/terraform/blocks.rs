//! Block extraction over raw configuration text
//!
//! Locates top-level `kind "name" { ... }` occurrences and captures
//! their bodies with brace-depth tracking. Double-quoted spans are
//! opaque to the depth counter, so braces inside string literals cannot
//! corrupt it.

use tflens_domain::{Block, ScanError};

/// Outcome of scanning one source text for blocks of a single kind.
///
/// A malformed block never aborts the scan: it is reported in `errors`
/// and the scanner keeps looking for later well-formed blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockScan {
    /// Well-formed blocks in source order.
    pub blocks: Vec<Block>,

    /// Per-block failures, in the order they were encountered.
    pub errors: Vec<ScanError>,
}

struct Header {
    name: String,
    /// Byte index just past the opening brace.
    body_start: usize,
}

struct BodyEnd {
    /// Byte index of the closing brace.
    close: usize,
    /// Byte index just past the closing brace.
    resume: usize,
}

enum BodyFailure {
    Block,
    String,
}

/// Extracts every top-level block of the given kind from the text.
///
/// The scan resumes past each block's closing brace, so nested blocks of
/// the same kind are absorbed into the parent body rather than extracted
/// independently.
///
/// # Examples
///
/// ```
/// use tflens_application::terraform::extract_blocks;
///
/// let scan = extract_blocks("module", r#"module "net" { cidr = "10.0.0.0/16" }"#);
/// assert!(scan.errors.is_empty());
/// assert_eq!(scan.blocks.len(), 1);
/// assert_eq!(scan.blocks[0].name, "net");
/// assert_eq!(scan.blocks[0].body, r#"cidr = "10.0.0.0/16""#);
/// ```
#[must_use]
pub fn extract_blocks(kind: &str, text: &str) -> BlockScan {
    let mut scan = BlockScan::default();
    let mut position = 0;

    while let Some(header) = find_header(kind, text, position) {
        match scan_body(text, header.body_start) {
            Ok(end) => {
                let body = text[header.body_start..end.close].trim();
                scan.blocks.push(Block::new(kind, header.name, body));
                position = end.resume;
            }
            Err(failure) => {
                scan.errors.push(match failure {
                    BodyFailure::Block => ScanError::UnterminatedBlock {
                        kind: kind.to_string(),
                        name: header.name,
                    },
                    BodyFailure::String => ScanError::UnterminatedString {
                        kind: kind.to_string(),
                        name: header.name,
                    },
                });
                // Resume just past the failed header so later well-formed
                // blocks are still found.
                position = header.body_start;
            }
        }
    }

    scan
}

fn find_header(kind: &str, text: &str, from: usize) -> Option<Header> {
    if kind.is_empty() {
        return None;
    }

    let mut search = from;
    loop {
        let rel = text.get(search..)?.find(kind)?;
        let start = search + rel;
        if let Some(header) = match_header_at(text, start + kind.len()) {
            return Some(header);
        }
        let step = text[start..].chars().next().map_or(1, char::len_utf8);
        search = start + step;
    }
}

/// Matches `WHITESPACE+ "NAME" WHITESPACE* {` starting at `after_kind`.
/// The name must be non-empty; a header whose name cannot be captured is
/// not a header.
fn match_header_at(text: &str, after_kind: usize) -> Option<Header> {
    let rest = text.get(after_kind..)?;
    let mut chars = rest.char_indices();

    let (_, first) = chars.next()?;
    if !first.is_whitespace() {
        return None;
    }
    let mut current = chars.next()?;
    while current.1.is_whitespace() {
        current = chars.next()?;
    }

    if current.1 != '"' {
        return None;
    }

    let mut name = String::new();
    loop {
        current = chars.next()?;
        if current.1 == '"' {
            break;
        }
        name.push(current.1);
    }
    if name.is_empty() {
        return None;
    }

    current = chars.next()?;
    while current.1.is_whitespace() {
        current = chars.next()?;
    }
    if current.1 != '{' {
        return None;
    }

    Some(Header {
        name,
        body_start: after_kind + current.0 + 1,
    })
}

/// Walks the body from just past the opening brace, depth starting at 1.
/// Quoted spans (with backslash escapes) are skipped whole.
fn scan_body(text: &str, body_start: usize) -> Result<BodyEnd, BodyFailure> {
    let mut depth: usize = 1;
    let mut in_string = false;
    let mut chars = text[body_start..].char_indices();

    while let Some((offset, ch)) = chars.next() {
        if in_string {
            match ch {
                '\\' => {
                    chars.next();
                }
                '"' => in_string = false,
                _ => {}
            }
        } else {
            match ch {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(BodyEnd {
                            close: body_start + offset,
                            resume: body_start + offset + 1,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    Err(if in_string {
        BodyFailure::String
    } else {
        BodyFailure::Block
    })
}
