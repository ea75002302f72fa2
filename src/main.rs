use clap::Parser;
use whisker_intake::utils::{logger, validation::Validate};
use whisker_intake::{
    CliConfig, ConsoleNotifier, DraftField, FormController, IntakeConfig, IntakeEngine,
    SubmissionClient, SubmitOutcome,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting whisker-intake CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match IntakeConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // Fill the draft from the flags, the way a form would field by field.
    let mut controller = FormController::new();
    controller.set_field(DraftField::BreedName, cli.breed.clone());
    controller.set_field(DraftField::AgeYears, cli.age.clone());
    for status in &cli.statuses {
        controller.toggle_diet_status(*status, true);
    }

    if let Err(e) = controller.draft().validate() {
        tracing::error!("Draft validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // Submission resets the draft on success; keep a snapshot for the
    // follow-up question fetch.
    let submitted = controller.draft().clone();
    let show_questions = config.show_questions;

    let client = SubmissionClient::new(config);
    let mut engine = IntakeEngine::new(controller, client, ConsoleNotifier);

    match engine.submit().await {
        Ok(SubmitOutcome::Accepted { .. }) => {
            if show_questions {
                match engine.client().fetch_preset_questions(&submitted).await {
                    Ok(questions) => {
                        println!("💬 Questions for your next vet visit:");
                        for question in questions {
                            println!("   - {}", question);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Could not fetch preset questions: {}", e);
                        eprintln!("❌ Could not fetch preset questions: {}", e);
                    }
                }
            }
        }
        Ok(SubmitOutcome::Rejected { .. }) => std::process::exit(1),
        Ok(SubmitOutcome::Unreachable) => std::process::exit(2),
        Ok(SubmitOutcome::AlreadyInFlight) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Submission failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
