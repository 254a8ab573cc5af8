//! `breeds` command: list the breed levels the model was trained on.

use clap::Args;

use pupcurve_core::types::BreedRegistry;

use crate::CliExitCode;

/// Arguments for `breeds`
#[derive(Args, Debug)]
pub struct BreedsArgs {
    /// Emit the registry as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn breeds_command(args: BreedsArgs) -> CliExitCode {
    let registry = BreedRegistry::new();

    if args.json {
        match serde_json::to_string_pretty(registry.all()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize breed registry: {e}");
                return CliExitCode::PipelineFailure;
            }
        }
        return CliExitCode::Success;
    }

    println!("{:<32} {:>16}", "BREED", "ADULT WEIGHT (LBS)");
    for spec in registry.all() {
        println!("{:<32} {:>16.0}", spec.name, spec.adult_weight_lbs);
    }
    CliExitCode::Success
}
