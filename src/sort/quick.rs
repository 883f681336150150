use super::step::{Step, StepKind};

/// In-progress Lomuto partition of `low..=high`.
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    /// Next slot for an element smaller than the pivot.
    store: usize,
    /// Element currently being compared against the pivot.
    scan: usize,
}

/// Lazy quicksort with Lomuto partitioning and the last element as pivot.
///
/// Recursion is replaced by a stack of pending ranges. The right half is
/// pushed before the left so ranges pop in the same order a recursive
/// left-first quicksort would visit them.
#[derive(Debug, Clone)]
pub struct QuickSteps {
    values: Vec<u32>,
    pending: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl QuickSteps {
    pub fn new(values: Vec<u32>) -> Self {
        let mut pending = Vec::new();
        if values.len() > 1 {
            pending.push((0, values.len() - 1));
        }
        Self {
            values,
            pending,
            active: None,
        }
    }

    fn start_next_partition(&mut self) -> Option<Partition> {
        while let Some((low, high)) = self.pending.pop() {
            if low < high {
                return Some(Partition {
                    low,
                    high,
                    store: low,
                    scan: low,
                });
            }
        }
        None
    }

    fn finish_partition(&mut self, part: Partition) -> Step {
        let Partition {
            low, high, store, ..
        } = part;
        self.values.swap(store, high);

        // Right first, so the left range is popped next.
        if store + 1 < high {
            self.pending.push((store + 1, high));
        }
        if store > low + 1 {
            self.pending.push((low, store - 1));
        }

        Step::new(StepKind::Settle, (store, high), store != high, &self.values)
    }
}

impl Iterator for QuickSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let mut part = match self.active.take() {
            Some(part) => part,
            None => self.start_next_partition()?,
        };

        if part.scan == part.high {
            return Some(self.finish_partition(part));
        }

        let j = part.scan;
        part.scan += 1;

        let pivot = self.values[part.high];
        let mut swapped = false;
        if self.values[j] < pivot {
            swapped = part.store != j;
            self.values.swap(part.store, j);
            part.store += 1;
        }
        self.active = Some(part);

        Some(Step::new(StepKind::Compare, (j, part.high), swapped, &self.values))
    }
}
