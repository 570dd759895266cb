/// Maximum length of a written header line, `TAG: ` prefix included.
pub const MAX_LINE_LENGTH: usize = 75;

const BREAK_CHARS: [char; 3] = [' ', '\t', '\n'];

/// Returns the number of value characters that fit on one `TAG: value` line.
///
/// The `TAG: ` prefix counts against [`MAX_LINE_LENGTH`], so every written
/// line fits in 75 characters. This is stricter than a budget of 75 on the
/// value alone: a value of 67 to 75 characters under `SOAPBOX` is split in
/// two and reads back as two lines.
pub(crate) fn value_budget(tag: &str) -> usize {
    MAX_LINE_LENGTH.saturating_sub(tag.len() + 2).max(1)
}

/// Splits `value` into segments of at most `budget` characters.
///
/// Callers pass [`value_budget`], which counts the tag prefix, rather than
/// a flat 75 on the value alone.
///
/// Each break happens after the last space, tab or newline within the
/// budget, which stays on the preceding segment. A segment without any
/// whitespace is cut hard at `budget`.
pub(crate) fn wrap(value: &str, budget: usize) -> Vec<&str> {
    let mut segments = Vec::with_capacity(value.len() / budget + 1);
    let mut rest = value;
    while let Some((head_end, _)) = rest.char_indices().nth(budget) {
        let split = rest[..head_end]
            .rfind(BREAK_CHARS)
            .map_or(head_end, |i| i + 1);
        let (segment, tail) = rest.split_at(split);
        segments.push(segment);
        rest = tail;
    }
    segments.push(rest);
    segments
}
