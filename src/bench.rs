//! Benchmark fixtures for Detective Quest.
//!
//! Deterministic inputs shared by the criterion benchmarks so every run
//! measures the same workload.

/// Generates `count` distinct clue strings in a scrambled order.
///
/// Consecutive indices are spread with a multiplicative step so that the clue
/// tree stays reasonably balanced when the clues are inserted in order.
pub fn clue_corpus(count: usize) -> Vec<String> {
    let modulus = count.max(1);
    let step = (0..)
        .map(|offset| 7919 + offset)
        .find(|candidate| gcd(*candidate, modulus) == 1)
        .unwrap_or(1);

    (0..count)
        .map(|index| format!("Pista {:08}", (index * step) % modulus))
        .collect()
}

/// Command script that walks from the entrance down to `Escritorio`, preceded
/// by `rejected` invalid commands.
pub fn exploration_script(rejected: usize) -> String {
    let mut script = "x\n".repeat(rejected);
    script.push_str("e\ne\n");
    script
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_clue_corpus_is_distinct() {
        let corpus = clue_corpus(1000);
        let unique: HashSet<&String> = corpus.iter().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn test_exploration_script() {
        assert_eq!(exploration_script(2), "x\nx\ne\ne\n");
    }
}
