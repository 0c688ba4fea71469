#[cfg(test)]
#[macro_use]
extern crate parameterized;

mod config;
mod scene;

use std::process::ExitCode;

use config::{CommandLine, ProgramConfig, USAGE};
use log::LevelFilter;
use scene::LoadError;

fn init_logging(level: LevelFilter) {
    if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("could not initialize logging: {}", e);
    }
}

fn init_config() -> Result<(CommandLine, ProgramConfig), config::ConfigError> {
    let command_line = CommandLine::parse(std::env::args().skip(1))?;
    let mut config = ProgramConfig::from_file(&command_line.config_path)?;
    config.apply(&command_line);

    Ok((command_line, config))
}

fn run(
    command_line: &CommandLine,
    config: &ProgramConfig,
) -> Result<Vec<scene::QueryResult>, LoadError> {
    let scene = scene::load_scene(&command_line.scene_path)?;
    log::info!("Loaded scene {}", command_line.scene_path.display());

    let masks = scene::build_masks(&scene, &config.data_dir)?;
    scene::run_queries(&scene, &masks)
}

fn main() -> ExitCode {
    /* Initialize */
    let (command_line, config) = match init_config() {
        Ok(init) => init,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.log_level);

    /* Queries */
    match run(&command_line, &config) {
        Ok(results) => {
            for result in results {
                println!("{} = {}", result.description, result.outcome);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
