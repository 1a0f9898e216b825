use rand::seq::SliceRandom;
use rand::Rng;

/// Whether a simulated voter ranks every candidate or only a random-length
/// prefix of their preference order. The service accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingPolicy {
    FullPermutation,
    RandomPrefix,
}

/// The fixed candidate labels for a run, plus the policy used to derive
/// ballots from them. The template itself is never mutated; each ballot is
/// shuffled on its own copy so no ordering leaks between iterations.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    labels: Vec<String>,
    policy: RankingPolicy,
}

impl CandidateSet {
    pub fn new(labels: Vec<String>, policy: RankingPolicy) -> Self {
        Self { labels, policy }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Generates one ballot: a uniformly random permutation of the labels,
    /// truncated to a random length under `RankingPolicy::RandomPrefix`.
    pub fn ballot<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        let mut choices = self.labels.clone();
        if choices.is_empty() {
            return choices;
        }
        choices.shuffle(rng);
        if self.policy == RankingPolicy::RandomPrefix {
            let len = rng.gen_range(1..=choices.len());
            choices.truncate(len);
        }
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn labels() -> Vec<String> {
        ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_permutation_uses_every_label_exactly_once() {
        let set = CandidateSet::new(labels(), RankingPolicy::FullPermutation);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let ballot = set.ballot(&mut rng);
            assert_eq!(ballot.len(), 5);
            let unique: HashSet<&String> = ballot.iter().collect();
            assert_eq!(unique.len(), 5);
            for label in &ballot {
                assert!(set.labels().contains(label), "invented label {label}");
            }
        }
    }

    #[test]
    fn template_order_is_unchanged_after_generation() {
        let set = CandidateSet::new(labels(), RankingPolicy::FullPermutation);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            set.ballot(&mut rng);
        }
        assert_eq!(set.labels(), labels().as_slice());
    }

    #[test]
    fn random_prefix_lengths_stay_in_range_and_vary() {
        let set = CandidateSet::new(labels(), RankingPolicy::RandomPrefix);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_lengths = HashSet::new();
        for _ in 0..500 {
            let ballot = set.ballot(&mut rng);
            assert!((1..=5).contains(&ballot.len()));
            let unique: HashSet<&String> = ballot.iter().collect();
            assert_eq!(unique.len(), ballot.len(), "duplicate label in ballot");
            seen_lengths.insert(ballot.len());
        }
        assert_eq!(seen_lengths.len(), 5, "expected every prefix length over 500 draws");
    }

    // All 120 orderings of five candidates should come up with roughly
    // uniform frequency. The bounds are generous; this guards against a
    // biased shuffle, not for exact equality.
    #[test]
    fn permutations_are_roughly_uniform() {
        let set = CandidateSet::new(labels(), RankingPolicy::FullPermutation);
        let mut rng = StdRng::seed_from_u64(4);
        let draws = 60_000;
        let mut counts: HashMap<Vec<String>, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(set.ballot(&mut rng)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 120, "every permutation should be visited");
        let mean = draws as f64 / 120.0;
        for (ballot, count) in counts {
            let ratio = count as f64 / mean;
            assert!(
                (0.5..2.0).contains(&ratio),
                "permutation {ballot:?} seen {count} times against mean {mean}"
            );
        }
    }

    #[test]
    fn empty_candidate_set_yields_empty_ballot() {
        let set = CandidateSet::new(Vec::new(), RankingPolicy::RandomPrefix);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(set.ballot(&mut rng).is_empty());
    }
}
