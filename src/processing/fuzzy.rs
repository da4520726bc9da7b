//! Token-sort fuzzy string similarity
//!
//! Mirrors the fuzzywuzzy `token_sort_ratio` used by the reference data:
//! full preprocessing, tokens sorted and rejoined, then the Indel ratio
//! `2 * lcs / (len_a + len_b)` scaled to 0-100.

/// Drop Latin-1 supplement characters, replace every non-word character
/// (anything but alphanumerics and `_`) with a space, lowercase and trim.
///
/// Characters above U+00FF are kept when alphanumeric.
pub fn process(text: &str) -> String {
    text.chars()
        .filter(|c| !('\u{80}'..='\u{ff}').contains(c))
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Processed tokens in lexicographic order, joined by single spaces
pub fn token_sort(text: &str) -> String {
    let processed = process(text);
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity in `0..=100` that ignores case, punctuation and word order.
///
/// Either side being empty after processing scores 0. Halves round to even.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let sorted_a = token_sort(a);
    let sorted_b = token_sort(b);

    if sorted_a.is_empty() || sorted_b.is_empty() {
        return 0;
    }

    let similarity = indel_similarity(&sorted_a, &sorted_b);
    (similarity * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// True if any candidate string reaches `threshold` against `target`
pub fn any_matches<'a, I>(target: &str, candidates: I, threshold: f64) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .any(|candidate| f64::from(token_sort_ratio(target, candidate)) >= threshold)
}

/// `1 - indel_distance / (len_a + len_b)`, counted in chars
fn indel_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    (2 * longest_common_subsequence(&a, &b)) as f64 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];

    for &left in a {
        let mut diagonal = 0;
        for (j, &right) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if left == right {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
