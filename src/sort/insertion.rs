use super::step::{Step, StepKind};

/// Lazy insertion sort.
///
/// The key walks left one slot per step while its left neighbour is
/// strictly greater, so each emitted `Swap` step is exactly one shift and
/// the key's final placement needs no step of its own.
#[derive(Debug, Clone)]
pub struct InsertionSteps {
    values: Vec<u32>,
    /// Index of the next key to insert.
    next_key: usize,
    /// Current position of the key being inserted, if any.
    cursor: Option<usize>,
}

impl InsertionSteps {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            next_key: 1,
            cursor: None,
        }
    }
}

impl Iterator for InsertionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let j = match self.cursor {
                Some(j) => j,
                None => {
                    if self.next_key >= self.values.len() {
                        return None;
                    }
                    let key = self.next_key;
                    self.next_key += 1;
                    key
                }
            };

            if j > 0 && self.values[j - 1] > self.values[j] {
                self.values.swap(j - 1, j);
                self.cursor = Some(j - 1);
                return Some(Step::new(StepKind::Swap, (j - 1, j), true, &self.values));
            }
            self.cursor = None;
        }
    }
}
