//! Punctuation-based sentence segmentation.
//!
//! Paragraph analysis needs raw text split into sentences before each one is
//! normalized and scored. The splitter breaks on terminal punctuation
//! ('.', '!', '?'), keeps the terminator with its sentence, treats runs of
//! terminators ("?!", "...") as a single boundary, and refuses to split
//! directly after a small set of common abbreviations.

/// Abbreviations that may end in a period mid-sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "shri", "smt", "st", "etc", "vs", "eg", "ie",
];

/// Split a paragraph into sentences, preserving their original order.
///
/// Returned sentences are trimmed and non-empty; text without any terminal
/// punctuation comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        current.push(c);

        let is_boundary_char = c == '!' || c == '?' || (c == '.' && !ends_with_abbreviation(&current));
        if is_boundary_char {
            // Absorb the rest of a terminator run ("?!", "...").
            while i + 1 < chars.len() && matches!(chars[i + 1], '.' | '!' | '?') {
                i += 1;
                current.push(chars[i]);
            }

            // A terminator glued to following text ("3.5", "a.b") is not a boundary.
            if i + 1 >= chars.len() || chars[i + 1].is_whitespace() {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }

        i += 1;
    }

    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Check whether the buffer ends with "<abbreviation>." (the period already pushed).
fn ends_with_abbreviation(buffer: &str) -> bool {
    let body = &buffer[..buffer.len() - 1];
    let word: String = body
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    !word.is_empty() && ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}
