use anyhow::Result;
use clap::Parser;

use ambiclass::cli::{Cli, Commands};
use ambiclass::commands::{self, ClassifyConfig, EvaluateConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            input,
            ambiguous_output,
            proper_output,
            config,
        } => {
            let classify_config = ClassifyConfig {
                input,
                ambiguous_output,
                proper_output,
                config,
            };
            commands::handle_classify(classify_config)
        }
        Commands::Evaluate {
            gold_standard,
            ambiguous_predictions,
            proper_predictions,
            json_report,
            summary_only,
            show_mismatches,
        } => {
            let evaluate_config = EvaluateConfig {
                gold_standard,
                ambiguous_predictions,
                proper_predictions,
                json_report,
                summary_only,
                show_mismatches,
            };
            commands::handle_evaluate(evaluate_config)
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
