/// Case-insensitive similarity between two skill names in `[0.0, 1.0]`.
///
/// - identical → 1.0
/// - one contains the other → 0.7 plus up to 0.3 scaled by the length ratio
/// - otherwise → 1 minus (positional mismatches over the shared prefix length
///   plus the length difference) over the longer length
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a == b {
        return 1.0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if contains(longer, shorter) {
        let ratio = shorter.len() as f64 / longer.len() as f64;
        return 0.7 + ratio * 0.3;
    }

    let max_len = longer.len();
    let mismatches = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
    let distance = mismatches + (longer.len() - shorter.len());

    1.0 - distance as f64 / max_len as f64
}

fn contains(haystack: &[char], needle: &[char]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
