//! Lossy transcoding into the document's single-byte encoding.
//!
//! The PDF uses the standard Helvetica font with WinAnsiEncoding, which agrees with
//! Latin-1 on the printable ranges 0x20..=0x7E and 0xA0..=0xFF. Characters outside
//! those ranges are dropped, never substituted, so a word made only of such
//! characters disappears and a mixed word loses just the foreign characters.
//! Newlines and tabs survive as layout whitespace.

/// Returns true if `c` can be written into the document.
pub fn is_representable(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF)
}

/// Drops every character the document encoding cannot carry.
pub fn to_latin1_lossy(text: &str) -> String {
    text.chars()
        .filter(|&c| c == '\n' || c == '\t' || is_representable(c))
        .collect()
}

/// Encodes already-transcoded text as WinAnsi bytes, one byte per character.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|&c| is_representable(c))
        .filter_map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}
