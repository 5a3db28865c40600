use crate::cli::CompleteArgs;
use crate::config::build_config;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use crate::output;
use rxnrebuild::core::models::transformation::Format;
use rxnrebuild::workflows;
use tracing::{info, warn};

pub fn run(args: CompleteArgs) -> Result<()> {
    info!("Initializing data manager...");
    let data_manager = DataManager::new()?;

    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(&args, &data_manager)?;

    info!(rule_id = %app.rule_id, "Reaction rule");
    info!(transformation = %app.transformation, "Transformation to complete");
    if let Some(template_id) = &app.completion.template_id {
        info!(template_id = %template_id, "Template reaction");
    }

    let cache = DataManager::with_custom_path(app.cache_dir.clone()).load_cache()?;

    info!("Invoking the core completion workflow...");
    let results = workflows::complete::run(
        &cache,
        &app.rule_id,
        &app.transformation,
        &app.completion,
    )?;

    info!(
        "Workflow finished, received {} completed transformation(s).",
        results.len()
    );
    if results.is_empty() {
        warn!("Workflow completed but no transformation could be completed.");
    }

    let format = Format::detect(&app.transformation).ok_or_else(|| {
        CliError::Argument(format!(
            "Transformation '{}' has no side separator",
            app.transformation
        ))
    })?;
    println!("{}", output::render(&results, format, &cache, app.output)?);

    Ok(())
}
