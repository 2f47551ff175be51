//! Log-likelihood scoring and normalization.

use shield_core::types::{BTreeMap, Scores, WordCounts};

/// `Σ ln P(word | class)` over `words`, with `P = count / total` for seen
/// words and `floor` for unseen ones. `total` must be positive.
pub fn log_likelihood(words: &[String], counts: &WordCounts, total: i64, floor: f64) -> f64 {
    let total = total as f64;
    words
        .iter()
        .map(|word| {
            let count = counts.get(word).copied().unwrap_or(0);
            let p = if count > 0 { count as f64 / total } else { floor };
            p.ln()
        })
        .sum()
}

/// Min-max normalize raw scores into `[0, 1]`. When every score is equal
/// (including a single class) each one normalizes to `1`.
pub fn normalize(raw: BTreeMap<String, f64>) -> Scores {
    let min = raw.values().copied().fold(f64::INFINITY, f64::min);
    let max = raw.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    raw.into_iter()
        .map(|(class, score)| {
            let norm = if span > 0.0 { (score - min) / span } else { 1.0 };
            (class, norm)
        })
        .collect()
}

/// The class with the strictly highest score. Ties go to the smallest class
/// name, since `Scores` iterates in name order.
pub fn best_class(scores: &Scores) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (class, &score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((class.as_str(), score)),
        }
    }
    best.map(|(class, _)| class)
}
