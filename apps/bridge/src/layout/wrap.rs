//! Greedy word wrap against the Helvetica metric table.
//!
//! Explicit newlines always break. Runs of whitespace inside a paragraph collapse
//! to one space. A word wider than the whole line is split between characters.

use crate::layout::font_metrics::{measure_str, PageConfig};

/// Wraps `text` into lines that each fit `config.text_width_pt()`.
///
/// Blank paragraphs are kept as empty lines; trailing newlines are not.
pub fn wrap_text(text: &str, config: &PageConfig) -> Vec<String> {
    let text = text.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return Vec::new();
    }

    let max_width = config.text_width_pt();
    let font_size = config.font_size_pt;
    let space_w = measure_str(" ", font_size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_w = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = measure_str(word, font_size);

            if word_w > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut chunks = split_long_word(word, max_width, font_size);
                // The tail of the word keeps filling the next line.
                current = chunks.pop().unwrap_or_default();
                current_w = measure_str(&current, font_size);
                lines.extend(chunks);
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_w = word_w;
            } else if current_w + space_w + word_w <= max_width {
                current.push(' ');
                current.push_str(word);
                current_w += space_w + word_w;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_w = word_w;
            }
        }

        lines.push(current);
    }

    lines
}

/// Splits a single word into chunks no wider than `max_width`.
/// Every chunk holds at least one character, so progress is guaranteed.
fn split_long_word(word: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_w = 0.0_f32;

    for c in word.chars() {
        let mut buf = [0u8; 4];
        let c_w = measure_str(c.encode_utf8(&mut buf), font_size);
        if !chunk.is_empty() && chunk_w + c_w > max_width {
            chunks.push(std::mem::take(&mut chunk));
            chunk_w = 0.0;
        }
        chunk.push(c);
        chunk_w += c_w;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}
