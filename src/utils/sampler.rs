// src/utils/sampler.rs

use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom};

use crate::error::QuizError;

/// Picks `count` distinct wrong answers for `correct` out of `universe`.
///
/// * `correct` is removed from the candidates first (it need not be in `universe`).
/// * Candidates are shuffled and the first `count` kept, so every subset of
///   size `count` is equally likely and the returned order is random.
///
/// Fails with `InsufficientCategories` when fewer than `count` candidates remain.
pub fn sample_distractors<R: Rng + ?Sized>(
    correct: &str,
    universe: &BTreeSet<String>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, QuizError> {
    let mut candidates: Vec<&String> = universe.iter().filter(|c| *c != correct).collect();

    if candidates.len() < count {
        return Err(QuizError::InsufficientCategories {
            required: count + 1,
            available: candidates.len() + 1,
        });
    }

    candidates.shuffle(rng);
    Ok(candidates.into_iter().take(count).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn universe(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_never_returns_correct_answer() {
        let mut rng = StdRng::seed_from_u64(7);
        let all = universe(&["Africa", "Asia", "Europe", "Oceania"]);
        for _ in 0..200 {
            let picked = sample_distractors("Asia", &all, 3, &mut rng).unwrap();
            assert_eq!(picked.len(), 3);
            assert!(!picked.contains(&"Asia".to_string()));
            let unique: BTreeSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 3, "distractors must be distinct: {picked:?}");
        }
    }

    #[test]
    fn test_exact_fit_uses_every_other_category() {
        let mut rng = StdRng::seed_from_u64(1);
        let all = universe(&["Africa", "Asia", "Europe"]);
        let picked: BTreeSet<String> = sample_distractors("Europe", &all, 2, &mut rng)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(picked, universe(&["Africa", "Asia"]));
    }

    #[test]
    fn test_insufficient_categories() {
        let mut rng = StdRng::seed_from_u64(1);
        let all = universe(&["Africa", "Europe"]);
        let err = sample_distractors("Europe", &all, 2, &mut rng).unwrap_err();
        assert_eq!(
            err,
            QuizError::InsufficientCategories {
                required: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let all = universe(&["Europe"]);
        assert!(sample_distractors("Europe", &all, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_every_candidate_gets_picked() {
        // 5 candidates, pick 1: each should show up over many draws.
        let mut rng = StdRng::seed_from_u64(99);
        let all = universe(&["A", "B", "C", "D", "E", "F"]);
        let mut seen = BTreeSet::new();
        for _ in 0..500 {
            seen.extend(sample_distractors("A", &all, 1, &mut rng).unwrap());
        }
        assert_eq!(seen, universe(&["B", "C", "D", "E", "F"]));
    }
}
