/// Split raw text into trimmed candidate lines, preserving top-to-bottom
/// order. A line survives only if its trimmed form is longer than three
/// characters and contains at least one alphanumeric character — this drops
/// blank lines, separator rules (`──────`), and stray punctuation.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| l.chars().count() > 3 && l.chars().any(char::is_alphanumeric))
        .collect()
}
