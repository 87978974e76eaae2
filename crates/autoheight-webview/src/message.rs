//! Inbound measurement messages.
//!
//! The measurement script sends a single string per observed resize: the
//! document height in logical pixels, in base 10. Nothing else travels over
//! the channel.

/// A raw message received from the embedded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    /// The payload exactly as it crossed the IPC boundary.
    pub data: String,
}

impl MessageEvent {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// The height carried by this message, if it is readable.
    pub fn height(&self) -> Option<u32> {
        parse_height(&self.data)
    }
}

/// Parse a height payload.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// longest run of leading decimal digits is taken; trailing text such as
/// `"px"` is ignored. Returns `None` when there are no digits, when the
/// value is negative, or when it does not fit in a `u32`.
pub fn parse_height(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    // "-0" is still zero
    if negative {
        return digits.bytes().all(|b| b == b'0').then_some(0);
    }

    digits.parse::<u32>().ok()
}
