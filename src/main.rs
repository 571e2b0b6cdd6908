mod cli;

use cli::Args;
use einv_sol::adapters::outbound::logging::DEFAULT_LOG_FILE;
use einv_sol::config::{
    discover_config, load_config_from_path, load_env_file, resolve_log_file, ApiEndpoints,
    ConfigFile, Settings, SettingsOverrides, ENV_FILENAME,
};
use einv_sol::prelude::*;
use einv_sol::shared::error::ExitCode;
use std::io;
use std::path::Path;
use std::process;

fn main() {
    // clap prints help/version and exits 0; invalid input exits 2
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(err) => {
            if err.use_stderr() {
                record_invocation_error(&err);
            }
            err.exit();
        }
    };

    let mut logger: Option<DualRunLogger> = None;
    if let Err(e) = run(&args, &mut logger) {
        if let Some(logger) = logger.as_ref() {
            logger.record_failure(&format!("{:#}", e));
        }

        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Best effort: the run log may not be writable yet
fn record_invocation_error(err: &clap::Error) {
    let Ok(working_dir) = std::env::current_dir() else {
        return;
    };
    if let Ok(logger) = DualRunLogger::new(&working_dir.join(DEFAULT_LOG_FILE)) {
        logger.record_failure(err.to_string().trim_end());
    }
}

fn run(args: &Args, logger_slot: &mut Option<DualRunLogger>) -> Result<()> {
    let working_dir = std::env::current_dir()?;

    // The log file is opened before anything else can fail
    let config = load_config(args.config.as_deref(), &working_dir);
    let log_file = resolve_log_file(config.as_ref().ok().and_then(Option::as_ref), &working_dir);
    let logger = logger_slot.insert(DualRunLogger::new(&log_file)?);
    let logger: &DualRunLogger = logger;
    let config = config?;

    let env_file = args
        .env_file
        .clone()
        .unwrap_or_else(|| working_dir.join(ENV_FILENAME));
    let env_loaded = load_env_file(&env_file)?;

    let overrides = SettingsOverrides {
        solutions_dir: args.dir.clone(),
        output_dir: args.output_dir.clone(),
        created_user: args.user.clone(),
    };
    let settings = Settings::resolve(&overrides, config.as_ref(), &working_dir, |key| {
        std::env::var(key).ok()
    })?;

    logger.info("*********************************************************************");
    let runtime_args: Vec<String> = std::env::args().skip(1).collect();
    if !runtime_args.is_empty() {
        logger.info(&format!("Runtime arguments: {:?}", runtime_args));
    }
    if !env_loaded {
        logger.warn(&format!(
            "No {} file found at {}; relying on the process environment",
            ENV_FILENAME,
            env_file.display()
        ));
    }
    if let Some(config) = config.as_ref() {
        for warning in config.unknown_field_warnings() {
            logger.warn(&warning);
        }
    }

    // Fail before prompting when the remote settings are incomplete
    let endpoints = if args.dry_run {
        None
    } else {
        Some(ApiEndpoints::from_env()?)
    };

    let writer = FileSystemWriter::new(settings.output_dir.clone());
    let id_provider: Box<dyn SolutionIdProvider + '_> = match args.solution_id.as_ref() {
        Some(id) => Box::new(FixedSolutionId::new(id.clone())),
        None => Box::new(PromptSolutionIdProvider::new(io::stdin().lock(), logger)),
    };

    let consolidate = ConsolidateSolutionsUseCase::new(
        FileSystemReader::new(),
        id_provider,
        &writer,
        logger,
        PayloadBuilder::new(settings.created_user.clone()),
    );
    let response = consolidate.execute(ConsolidationRequest::new(settings.solutions_dir.clone()))?;

    let Some(endpoints) = endpoints else {
        logger.info(&format!(
            "Dry run: payload written to {}, remote calls skipped",
            response.payload_path.display()
        ));
        return Ok(());
    };

    let client = SolutionApiClient::new(endpoints)?;
    logger.info(&format!("Calling API: {}", client.create_url()));

    let publish = PublishSolutionUseCase::new(client, &writer, logger);
    let result = publish.execute(&response.solution_id, &response.payload_bytes)?;

    if result.exported {
        logger.info(&format!(
            "Solution {} created and exported",
            result.solution_id
        ));
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(working_dir),
    }
}
