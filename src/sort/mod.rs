//! Step-producing sorting algorithms.
//!
//! Each algorithm is a plain [`Iterator`] over [`Step`]s. Nothing here knows
//! about timing or rendering; the scheduler decides how fast steps are shown.
//!
//! ```text
//! Vec<u32> ──→ Algorithm::steps ──→ Steps (lazy) ──→ Scheduler
//! ```

mod bubble;
mod insertion;
mod quick;
mod step;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use bubble::BubbleSteps;
pub use insertion::InsertionSteps;
pub use quick::QuickSteps;
pub use step::{Step, StepKind};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("unknown algorithm '{name}' (expected one of: bubble, insertion, quick)")]
    UnknownAlgorithm { name: String },
}

/// The sorting algorithms a run can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    #[serde(alias = "bubbleSort")]
    Bubble,
    #[serde(alias = "insertionSort")]
    Insertion,
    #[serde(alias = "quickSort")]
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick];

    /// Short identifier used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|a| *a == self)
            .unwrap_or_default()
    }

    /// Build the lazy step sequence for `values`.
    pub fn steps(self, values: Vec<u32>) -> Steps {
        match self {
            Algorithm::Bubble => Steps::Bubble(BubbleSteps::new(values)),
            Algorithm::Insertion => Steps::Insertion(InsertionSteps::new(values)),
            Algorithm::Quick => Steps::Quick(QuickSteps::new(values)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bubble" | "bubbleSort" => Ok(Algorithm::Bubble),
            "insertion" | "insertionSort" => Ok(Algorithm::Insertion),
            "quick" | "quickSort" => Ok(Algorithm::Quick),
            other => Err(SortError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// Step sequence for whichever algorithm was selected.
#[derive(Debug, Clone)]
pub enum Steps {
    Bubble(BubbleSteps),
    Insertion(InsertionSteps),
    Quick(QuickSteps),
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self {
            Steps::Bubble(steps) => steps.next(),
            Steps::Insertion(steps) => steps.next(),
            Steps::Quick(steps) => steps.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_arrays() -> Vec<Vec<u32>> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        (0..200)
            .map(|_| {
                let len = rng.gen_range(0..24);
                (0..len).map(|_| rng.gen_range(0..10)).collect()
            })
            .collect()
    }

    fn final_array(algorithm: Algorithm, input: &[u32]) -> Vec<u32> {
        algorithm
            .steps(input.to_vec())
            .last()
            .map(|step| step.snapshot)
            .unwrap_or_else(|| input.to_vec())
    }

    #[test]
    fn every_algorithm_sorts_and_permutes() {
        for input in random_arrays() {
            let mut expected = input.clone();
            expected.sort_unstable();
            for algorithm in Algorithm::ALL {
                assert_eq!(
                    final_array(algorithm, &input),
                    expected,
                    "{algorithm} on {input:?}"
                );
            }
        }
    }

    #[test]
    fn steps_stay_in_bounds_and_change_by_one_swap() {
        for input in random_arrays() {
            for algorithm in Algorithm::ALL {
                let mut prev = input.clone();
                for step in algorithm.steps(input.clone()) {
                    assert!(step.in_bounds());
                    assert_eq!(step.snapshot.len(), input.len());
                    let changed: Vec<usize> = (0..prev.len())
                        .filter(|&i| prev[i] != step.snapshot[i])
                        .collect();
                    assert!(changed.is_empty() || changed.len() == 2, "{changed:?}");
                    let lomuto_move = algorithm == Algorithm::Quick
                        && step.kind == StepKind::Compare
                        && step.swapped;
                    if lomuto_move {
                        // Lomuto compares (j, pivot) but moves j into the
                        // store slot, which sits somewhere left of j.
                        // Equal values make the move invisible.
                        let j = step.indices.0;
                        if !changed.is_empty() {
                            assert!(changed.contains(&j), "{changed:?} lacks {j}");
                            assert!(changed.iter().all(|i| *i <= j), "{changed:?}");
                        }
                    } else if step.swapped {
                        let (a, b) = step.indices;
                        assert!(changed.iter().all(|i| *i == a || *i == b));
                    } else {
                        assert!(changed.is_empty());
                    }
                    prev = step.snapshot;
                }
            }
        }
    }

    #[test]
    fn sorted_input_has_no_swaps_for_bubble_and_insertion() {
        let sorted: Vec<u32> = (0..20).collect();
        for algorithm in [Algorithm::Bubble, Algorithm::Insertion] {
            assert!(algorithm.steps(sorted.clone()).all(|s| !s.swapped));
        }
    }

    #[test]
    fn same_input_same_steps() {
        for input in random_arrays().into_iter().take(20) {
            for algorithm in Algorithm::ALL {
                let first: Vec<Step> = algorithm.steps(input.clone()).collect();
                let second: Vec<Step> = algorithm.steps(input.clone()).collect();
                assert_eq!(first, second);
                assert_eq!(
                    serde_json::to_string(&first).ok(),
                    serde_json::to_string(&second).ok()
                );
            }
        }
    }

    #[test]
    fn exhausted_sequences_stay_exhausted() {
        for algorithm in Algorithm::ALL {
            let mut steps = algorithm.steps(vec![2, 1]);
            while steps.next().is_some() {}
            assert!(steps.next().is_none());
            assert!(steps.next().is_none());
        }
    }

    #[test]
    fn parses_known_names_and_rejects_others() {
        assert_eq!("bubble".parse::<Algorithm>(), Ok(Algorithm::Bubble));
        assert_eq!("insertionSort".parse::<Algorithm>(), Ok(Algorithm::Insertion));
        assert_eq!("quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(SortError::UnknownAlgorithm {
                name: "bogo".to_string()
            })
        );
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(Algorithm::Quick.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Quick);
        assert_eq!(Algorithm::Bubble.next().next(), Algorithm::Quick);
    }
}
