const IGNORED: &[char] = &[
    '“', '”', '’', '‘', '…', '"', '\'', '(', ')', '（', '）', '「', '」',
];

/// Canonical form used to spot repeated phrases: lowercase words separated
/// by single spaces, quotes, brackets and ellipses dropped.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| !IGNORED.contains(c))
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
