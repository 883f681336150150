use super::step::{Step, StepKind};

/// Lazy bubble sort. Every adjacent pair visited yields one `Compare`
/// step, whether or not the pair was exchanged.
#[derive(Debug, Clone)]
pub struct BubbleSteps {
    values: Vec<u32>,
    pass: usize,
    pos: usize,
}

impl BubbleSteps {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            pass: 0,
            pos: 0,
        }
    }
}

impl Iterator for BubbleSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.values.len();
        if n < 2 || self.pass >= n - 1 {
            return None;
        }

        // Advance to the next pass once the current one hits the sorted tail.
        while self.pos + 1 >= n - self.pass {
            self.pass += 1;
            self.pos = 0;
            if self.pass >= n - 1 {
                return None;
            }
        }

        let j = self.pos;
        self.pos += 1;

        let swapped = self.values[j] > self.values[j + 1];
        if swapped {
            self.values.swap(j, j + 1);
        }
        Some(Step::new(StepKind::Compare, (j, j + 1), swapped, &self.values))
    }
}
