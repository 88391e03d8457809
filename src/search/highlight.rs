//! Case-insensitive match highlighting for suggestion rows

/// A display name split around the first match of the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpans<'a> {
    pub prefix: &'a str,
    pub matched: &'a str,
    pub suffix: &'a str,
}

/// Split `name` around the first case-insensitive occurrence of `query`
///
/// Returns `None` when the query is empty or does not occur, in which case the
/// whole name renders as a single plain span. Slices always fall on character
/// boundaries of `name`, so the matched text keeps the name's own casing.
pub fn highlight_spans<'a>(name: &'a str, query: &str) -> Option<HighlightSpans<'a>> {
    if query.is_empty() {
        return None;
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    name.char_indices().find_map(|(start, _)| {
        match_len(&name[start..], &needle).map(|len| HighlightSpans {
            prefix: &name[..start],
            matched: &name[start..start + len],
            suffix: &name[start + len..],
        })
    })
}

/// Byte length of the prefix of `text` matching `needle` (already lowercased)
fn match_len(text: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;

    for (offset, ch) in text.char_indices() {
        if matched == needle.len() {
            return Some(offset);
        }
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
    }

    (matched == needle.len()).then_some(text.len())
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
