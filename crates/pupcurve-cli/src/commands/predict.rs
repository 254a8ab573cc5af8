//! `predict` command: run one prediction request.
//!
//! Age can be supplied either directly in weeks or as a birthdate resolved
//! against today. Output is a text summary (factor, typical weight, warning
//! banners, sampled curve rows) or the full response JSON with `--json`.

use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tracing::debug;

use pupcurve_core::config::{GridPolicy, PredictorConfig};
use pupcurve_core::pipeline::{GrowthPredictor, PredictionResponse};
use pupcurve_core::stubs::GompertzOracle;
use pupcurve_core::types::{AgeInput, Query, Sex};

use crate::CliExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GridPolicyArg {
    /// Fixed display range of 100 weeks
    Fixed,
    /// Round the current age up to the next multiple of 100 weeks
    Adaptive,
}

impl From<GridPolicyArg> for GridPolicy {
    fn from(arg: GridPolicyArg) -> Self {
        match arg {
            GridPolicyArg::Fixed => GridPolicy::Fixed { upper_weeks: 100 },
            GridPolicyArg::Adaptive => GridPolicy::Adaptive,
        }
    }
}

/// Arguments for `predict`
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Breed name (see `pupcurve breeds` for known levels)
    #[arg(long)]
    pub breed: String,

    /// Dog sex
    #[arg(long, value_enum)]
    pub sex: SexArg,

    /// Current age in weeks (slider mode)
    #[arg(long, conflicts_with = "birthdate", required_unless_present = "birthdate")]
    pub age_weeks: Option<u32>,

    /// Birthdate (YYYY-MM-DD); age is derived as elapsed whole weeks
    #[arg(long, required_unless_present = "age_weeks")]
    pub birthdate: Option<NaiveDate>,

    /// Current weight in lbs
    #[arg(long)]
    pub weight_lbs: f32,

    /// Covariate grid upper-bound policy
    #[arg(long, value_enum, default_value = "fixed")]
    pub grid_policy: GridPolicyArg,

    /// Let breeds outside the registry through to the oracle
    #[arg(long)]
    pub allow_unseen_breeds: bool,

    /// Emit the full response as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub async fn predict_command(args: PredictArgs) -> CliExitCode {
    debug!("predict_command: args={:?}", args);

    let age = match (args.age_weeks, args.birthdate) {
        (Some(weeks), _) => AgeInput::Weeks(weeks),
        (None, Some(date)) => AgeInput::Birthdate(date),
        // clap's required_unless_present rules make this unreachable
        (None, None) => {
            eprintln!("either --age-weeks or --birthdate is required");
            return CliExitCode::InvalidQuery;
        }
    };

    let query = Query {
        breed: args.breed,
        sex: args.sex.into(),
        age,
        current_weight_lbs: args.weight_lbs,
    };
    let config = PredictorConfig {
        grid_policy: args.grid_policy.into(),
        allow_unseen_breeds: args.allow_unseen_breeds,
        ..PredictorConfig::default()
    };
    let predictor = GrowthPredictor::new(Arc::new(GompertzOracle::new()), config);

    match predictor.predict(&query).await {
        Ok(response) => {
            if args.json {
                match serde_json::to_string_pretty(&response) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("failed to serialize response: {e}");
                        return CliExitCode::PipelineFailure;
                    }
                }
            } else {
                print_summary(&response);
            }
            CliExitCode::Success
        }
        Err(err) => {
            eprintln!("prediction failed: {err}");
            CliExitCode::from(&err)
        }
    }
}

fn print_summary(response: &PredictionResponse) {
    let q = &response.query;
    println!(
        "Trajectory for a {} {} at {} weeks, {} lbs (model {})",
        q.sex, q.breed, q.age_weeks, q.current_weight_lbs, response.model_id
    );
    println!(
        "Typical weight at this age: {:.1} lbs (scaling factor {:.4})",
        response.typical_weight_lbs, response.scaling_factor
    );

    if !response.warnings.is_empty() {
        println!();
        for warning in response.warnings.iter() {
            println!("WARNING: {}", warning.message());
        }
    }

    println!();
    println!("{:>5} {:>10} {:>10} {:>10}", "WEEK", "LOW", "PREDICTED", "HIGH");
    for point in response
        .adjusted_curve
        .points()
        .iter()
        .filter(|p| p.age_weeks % 10 == 0 || p.age_weeks == q.age_weeks)
    {
        let marker = if point.age_weeks == q.age_weeks { "  <- now" } else { "" };
        println!(
            "{:>5} {:>10.1} {:>10.1} {:>10.1}{}",
            point.age_weeks, point.low, point.point, point.high, marker
        );
    }
}
