use std::io;

use anyhow::Context;
use clap::Parser;

use sortviz::cli::Cli;
use sortviz::headless;
use sortviz::logging::{init_tracing, LogTarget};
use sortviz::scheduler::Scheduler;
use sortviz::store::ArrayGenerator;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("loading configuration")?;
    let explicit = cli.explicit_values()?;

    if cli.json || cli.headless {
        init_tracing(LogTarget::Stderr).context("initialising logging")?;
    } else {
        init_tracing(LogTarget::File).context("initialising logging")?;
    }

    let algorithm = config.defaults.algorithm;

    if cli.json {
        let values = explicit.unwrap_or_else(|| ArrayGenerator::new(&config.array).generate());
        headless::write_steps(algorithm, values, io::stdout().lock())?;
        return Ok(());
    }

    if cli.headless {
        let values = explicit.unwrap_or_else(|| ArrayGenerator::new(&config.array).generate());
        let scheduler = Scheduler::new(config.animation.step_delay());
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("starting runtime")?;
        let (outcome, _) =
            runtime.block_on(headless::play(algorithm, values, scheduler, io::stdout()))?;
        tracing::info!(algorithm = algorithm.name(), steps = outcome.steps(), "run complete");
        return Ok(());
    }

    sortviz::ui::run(config, explicit)?;
    Ok(())
}
