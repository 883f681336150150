use serde::Serialize;

/// What a step did to the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Two positions were compared and possibly exchanged.
    Compare,
    /// An element shifted one slot (insertion sort).
    Swap,
    /// A quicksort pivot moved into its final position.
    Settle,
}

/// One observable unit of algorithm progress.
///
/// `snapshot` is the whole array *after* any mutation this step implies,
/// so a consumer can render a step without replaying the ones before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub indices: (usize, usize),
    pub swapped: bool,
    pub snapshot: Vec<u32>,
}

impl Step {
    pub(crate) fn new(kind: StepKind, indices: (usize, usize), swapped: bool, snapshot: &[u32]) -> Self {
        Self {
            kind,
            indices,
            swapped,
            snapshot: snapshot.to_vec(),
        }
    }

    /// True when both indices fall inside the snapshot.
    pub fn in_bounds(&self) -> bool {
        let len = self.snapshot.len();
        self.indices.0 < len && self.indices.1 < len
    }
}
