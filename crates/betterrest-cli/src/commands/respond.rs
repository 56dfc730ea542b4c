//! Line-delimited JSON estimate service over stdin/stdout.

use clap::Args;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use betterrest_core::error::Result;
use betterrest_core::{from_fn, respond_json, BedtimeEstimator, Config, Predictor};

use super::load_model;

#[derive(Args)]
pub struct RespondArgs {
    /// Sleep model file to use instead of the configured one
    #[arg(long)]
    model: Option<PathBuf>,
}

pub fn run(args: RespondArgs) -> Result<()> {
    let config = Config::read()?;

    // A model that fails to load still answers, with prediction_failed
    let model = load_model(&config, args.model.as_deref());
    if let Err(e) = &model {
        tracing::warn!(kind = e.kind(), "Sleep model unavailable: {}", e);
    }
    let estimator = BedtimeEstimator::new(from_fn(move |wake, sleep, coffee| match &model {
        Ok(model) => model.predict(wake, sleep, coffee),
        Err(e) => Err(e.clone()),
    }));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", respond_json(&estimator, &line))?;
        stdout.flush()?;
    }
    Ok(())
}
