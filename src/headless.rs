//! Runs without the terminal UI.

use std::io::{self, Write};

use crate::render::{RenderAdapter, TextRenderer};
use crate::run::{RunId, RunOutcome, RunToken};
use crate::scheduler::Scheduler;
use crate::sort::Algorithm;
use crate::store::ArrayStore;

/// Write the unpaced step sequence as one JSON object per line.
pub fn write_steps<W: Write>(algorithm: Algorithm, values: Vec<u32>, mut out: W) -> io::Result<usize> {
    let mut count = 0;
    for step in algorithm.steps(values) {
        serde_json::to_writer(&mut out, &step)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Play one paced run, printing the initial array and every frame.
pub async fn play<W: Write>(
    algorithm: Algorithm,
    values: Vec<u32>,
    scheduler: Scheduler,
    out: W,
) -> io::Result<(RunOutcome, W)> {
    let store = ArrayStore::new(values);
    let run = RunId::new(1);
    let steps = algorithm.steps(store.claim(run));

    let mut renderer = TextRenderer::new(out);
    renderer.draw(&store.snapshot());
    let outcome = scheduler
        .drive(run, steps, &store, &mut renderer, &RunToken::new())
        .await;
    store.release(run);

    Ok((outcome, renderer.finish()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn json_lines_carry_kind_and_snapshot() {
        let mut out = Vec::new();
        let count = write_steps(Algorithm::Bubble, vec![2, 1], &mut out).expect("write to vec");
        assert_eq!(count, 1);
        let text = String::from_utf8_lossy(&out);
        let value: serde_json::Value =
            serde_json::from_str(text.trim()).expect("each line is JSON");
        assert_eq!(value["kind"], "compare");
        assert_eq!(value["swapped"], true);
        assert_eq!(value["snapshot"], serde_json::json!([1, 2]));
    }

    #[tokio::test]
    async fn play_prints_every_frame() {
        let scheduler = Scheduler::new(Duration::ZERO);
        let (outcome, out) = play(Algorithm::Insertion, vec![3, 1, 2], scheduler, Vec::new())
            .await
            .expect("write to vec");
        assert_eq!(outcome, RunOutcome::Completed { steps: 2 });
        assert_eq!(
            String::from_utf8_lossy(&out),
            "3 1 2\n<1> <3> 2\n1 <2> <3>\n"
        );
    }
}
