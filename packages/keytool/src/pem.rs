//! PEM encoding and decoding of DER key material
//!
//! Output format: standard padded base64, 64 characters per line, `\n` line
//! endings, `-----BEGIN <KIND> KEY-----` / `-----END <KIND> KEY-----` markers
//! and a trailing newline.

use crate::{
    error::{KeyToolError, KeyToolResult},
    types::KeyKind,
};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Characters per body line
pub const LINE_WIDTH: usize = 64;

/// Encode DER bytes as PEM text of the given kind
#[must_use]
pub fn encode(der: &[u8], kind: KeyKind) -> String {
    let body = STANDARD.encode(der);

    let mut pem = String::with_capacity(body.len() + body.len() / LINE_WIDTH + 64);
    pem.push_str(&kind.header());
    pem.push('\n');
    let mut rest = body.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        pem.push_str(line);
        pem.push('\n');
        rest = tail;
    }
    pem.push_str(&kind.footer());
    pem.push('\n');
    pem
}

/// Decode PEM text of the given kind to DER bytes
///
/// # Errors
/// Returns `KeyToolError::Encoding` if the markers do not match `kind`, the
/// body is empty, or the body is not valid base64.
pub fn decode(pem: &str, kind: KeyKind) -> KeyToolResult<Vec<u8>> {
    let body = armored_body(pem, kind)?;
    decode_body(&body)
}

/// Decode PEM text of either kind, reporting which kind it was
///
/// # Errors
/// Returns `KeyToolError::Encoding` if the text carries neither a public nor
/// a private key header, or if decoding fails as in [`decode`].
pub fn decode_any(pem: &str) -> KeyToolResult<(KeyKind, Vec<u8>)> {
    let trimmed = pem.trim();
    let kind = [KeyKind::Public, KeyKind::Private]
        .into_iter()
        .find(|kind| trimmed.starts_with(&kind.header()))
        .ok_or_else(|| KeyToolError::encoding("no PUBLIC KEY or PRIVATE KEY header"))?;
    Ok((kind, decode(trimmed, kind)?))
}

/// Strip the markers of `kind` and all whitespace, leaving the base64 body
///
/// The body is checked for emptiness but not for base64 validity.
pub(crate) fn armored_body(pem: &str, kind: KeyKind) -> KeyToolResult<String> {
    let trimmed = pem.trim();
    let header = kind.header();
    let footer = kind.footer();

    if !trimmed.starts_with(&header) {
        return Err(KeyToolError::encoding(&format!("missing {header} header")));
    }
    if !trimmed.ends_with(&footer) || trimmed.len() < header.len() + footer.len() {
        return Err(KeyToolError::encoding(&format!("missing {footer} footer")));
    }

    let body: String = trimmed[header.len()..trimmed.len() - footer.len()]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if body.is_empty() {
        return Err(KeyToolError::encoding(&format!("empty {} body", kind.label())));
    }
    Ok(body)
}

pub(crate) fn decode_body(body: &str) -> KeyToolResult<Vec<u8>> {
    STANDARD
        .decode(body)
        .map_err(|e| KeyToolError::encoding(&format!("invalid base64 body: {e}")))
}
