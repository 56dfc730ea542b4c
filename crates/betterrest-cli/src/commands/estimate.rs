//! Bedtime estimate command.

use clap::Args;
use std::path::PathBuf;

use betterrest_core::error::Result;
use betterrest_core::{
    Alert, BedtimeEstimator, ClockStyle, CoffeeIntake, Config, EstimateResponse, SleepGoal,
    WakeTime,
};

use super::load_model;

#[derive(Args)]
pub struct EstimateArgs {
    /// Wake-up time (e.g. 07:00 or 6:30am)
    #[arg(long, default_value_t = WakeTime::default())]
    wake: WakeTime,
    /// Desired hours of sleep
    #[arg(long, default_value_t = SleepGoal::DEFAULT)]
    sleep: f64,
    /// Cups of coffee per day
    #[arg(long, default_value_t = CoffeeIntake::DEFAULT)]
    coffee: u32,
    /// Clock style for the bedtime (12h or 24h)
    #[arg(long)]
    clock: Option<ClockStyle>,
    /// Sleep model file to use instead of the configured one
    #[arg(long)]
    model: Option<PathBuf>,
    /// Print a JSON response instead of the alert
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let config = Config::read()?;

    let wake = args.wake;
    let sleep_hours = args.sleep;
    let coffee_cups = args.coffee;
    let clock = args.clock.unwrap_or(config.display.clock);

    if !SleepGoal::is_within_widget_range(sleep_hours) {
        tracing::warn!(
            "Sleep goal {} is outside {}-{} hours in {}h steps",
            sleep_hours,
            SleepGoal::RANGE.start(),
            SleepGoal::RANGE.end(),
            SleepGoal::STEP
        );
    }
    if !CoffeeIntake::is_within_widget_range(coffee_cups) {
        tracing::warn!(
            "Coffee intake {} is outside {}-{} cups",
            coffee_cups,
            CoffeeIntake::RANGE.start(),
            CoffeeIntake::RANGE.end()
        );
    }

    tracing::info!(
        "Estimating for wake {}, {}, {}",
        wake,
        SleepGoal::label(sleep_hours),
        CoffeeIntake::label(coffee_cups)
    );

    let result = load_model(&config, args.model.as_deref())
        .and_then(|model| BedtimeEstimator::new(model).estimate(wake, sleep_hours, coffee_cups));

    if args.json {
        let response = EstimateResponse::from_result(&result);
        println!("{}", serde_json::to_string(&response)?);
    } else {
        let alert = Alert::from_result(&result, clock);
        println!("{}", alert.title);
        println!("{}", alert.message);
    }

    result?;
    Ok(())
}
