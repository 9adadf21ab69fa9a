/// Longest content fragment the circuit accepts, in bytes. Shorter
/// fragments are right-padded with zeros to this width.
pub const MAX_CONTENT_LEN: usize = 258;

/// Fragment search matches on at most this many leading bytes.
pub const LOCATE_PREFIX_LEN: usize = 20;

/// Byte offsets located inside the email: where the content fragment
/// starts in the body, and where the from header starts in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentLocation {
    pub content_idx: usize,
    pub from_idx: usize,
}
