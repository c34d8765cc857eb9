//! Text cleanup for feed titles and descriptions.

/// Maximum description length, in characters, before truncation.
pub const DESCRIPTION_LIMIT: usize = 200;

/// Decodes HTML entities, including double-encoded ones like `&amp;#160;`,
/// and trims the result. Applying it twice gives the same text as once.
pub fn clean_entities(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = clean_pass(&current);
        // Every change shrinks the text, so this terminates.
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    html_escape::decode_html_entities(text)
        .replace("[\u{2026}]", "...")
        .replace('\u{a0}', " ")
        .replace(['\u{201c}', '\u{201d}'], "\"")
        .trim()
        .to_string()
}

/// Removes markup tags. A `<` only opens a tag when followed by a letter,
/// `/` or `!`, so comparisons like `a < b` survive.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_tag = false;
    while let Some(ch) = chars.next() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
                out.push(' ');
            }
            continue;
        }
        if ch == '<' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphabetic() || next == '/' || next == '!' {
                    in_tag = true;
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit).collect();
    out.truncate(out.trim_end().len());
    out.push_str("...");
    out
}

/// Entities, tags and whitespace, but not length.
pub fn plain_text(raw: &str) -> String {
    collapse_whitespace(&strip_tags(&clean_entities(raw)))
}
