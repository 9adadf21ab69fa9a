// Copyright 2026 Mailproof Contributors
// Licensed under the Apache License, Version 2.0

//! Byte-offset location of the content fragment and the from header.
//!
//! Fragment matching is bounded to the first [`LOCATE_PREFIX_LEN`] bytes,
//! which keeps the scan cheap on long fragments; the assembler re-checks
//! the full fragment before committing to a tree range.

use mailproof_types::{ContentLocation, LOCATE_PREFIX_LEN};

use crate::error::{MailproofError, MailproofResult};

/// Header field names arrive lowercased by DKIM relaxed canonicalization.
const FROM_MARKER: &[u8] = b"from:";

/// Find the content fragment in the body and the from marker in the header.
pub fn locate(body: &[u8], header: &[u8], fragment: &[u8]) -> MailproofResult<ContentLocation> {
    if fragment.is_empty() {
        return Err(MailproofError::InputShape(
            "empty content fragment".into(),
        ));
    }
    let prefix = &fragment[..fragment.len().min(LOCATE_PREFIX_LEN)];
    let content_idx = find(body, prefix).ok_or(MailproofError::NotFound("content fragment"))?;
    let from_idx = find(header, FROM_MARKER).ok_or(MailproofError::NotFound("from header"))?;
    Ok(ContentLocation {
        content_idx,
        from_idx,
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
