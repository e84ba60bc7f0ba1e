//! Locates the statistics JSON inside a replay container.
//!
//! The container format is undocumented, so this is a heuristic: find the
//! anchor token, then either a known trailing delimiter or the brace that
//! balances the opening one. Braces inside JSON strings are counted too;
//! that works for the payloads seen in practice because the embedded stat
//! records are themselves balanced, but it is not a real JSON tokenizer.

use crate::ReplayError;

pub const PAYLOAD_ANCHOR: &[u8] = br#"{"gameLength":"#;

/// Follows the statistics in well-formed files.
pub const PAYLOAD_END_MARKER: &[u8] = br#","gameId":"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum number of bytes, counted from the anchor, the brace fallback
    /// looks at before giving up.
    pub window: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { window: 500_000 }
    }
}

/// Returns the byte range `[start, end)` of the payload.
pub fn scan(config: &ScanConfig, buf: &[u8]) -> Result<std::ops::Range<usize>, ReplayError> {
    let start = find(buf, PAYLOAD_ANCHOR, 0).ok_or(ReplayError::PayloadNotFound)?;

    if let Some(end) = find(buf, PAYLOAD_END_MARKER, start) {
        tracing::trace!(start, end, "Found payload end marker");
        return Ok(start..end);
    }

    let limit = buf.len().min(start.saturating_add(config.window));

    let mut depth: usize = 0;
    for (offset, byte) in buf[start..limit].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                // the anchor opens with '{', so depth is at least 1 here
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + 1;
                    tracing::trace!(start, end, "Balanced payload braces");
                    return Ok(start..end);
                }
            }
            _ => {}
        }
    }

    Err(ReplayError::UnterminatedPayload {
        start,
        window: config.window,
    })
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}
