use std::ops::Range;

fn fold(search: &str) -> Vec<char> {
    search.chars().flat_map(char::to_lowercase).collect()
}

/// Length in bytes of the match of `needle` starting exactly at `start`, if any.
///
/// Folding is applied one text character at a time, so a match always ends
/// on a character boundary of the original text.
fn match_len_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut remaining = needle.iter();
    let mut consumed = 0;

    for ch in text[start..].chars() {
        for folded in ch.to_lowercase() {
            if remaining.next() != Some(&folded) {
                return None;
            }
        }
        consumed += ch.len_utf8();
        if remaining.len() == 0 {
            return Some(consumed);
        }
    }
    None
}

fn find_in_text(text: &str, needle: &[char], start_pos: usize) -> Option<Range<usize>> {
    if needle.is_empty() || start_pos >= text.len() || !text.is_char_boundary(start_pos) {
        return None;
    }

    text[start_pos..].char_indices().find_map(|(offset, _)| {
        let pos = start_pos + offset;
        match_len_at(text, pos, needle).map(|len| pos..pos + len)
    })
}

/// All case-insensitive, non-overlapping occurrences of `search`, scanning
/// left to right.
///
/// Each scan resumes at the end of the previous match, so in `"aaaa"` the
/// term `"aa"` matches twice, not three times.
pub fn find_all_in_text(text: &str, search: &str) -> Vec<Range<usize>> {
    let needle = fold(search);
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(found) = find_in_text(text, &needle, pos) {
        pos = found.end;
        matches.push(found);
    }

    matches
}
