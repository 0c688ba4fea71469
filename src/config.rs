use std::{
    error::Error,
    fmt,
    path::{Path, PathBuf},
};

use configparser::ini::Ini;
use log::LevelFilter;

pub const USAGE: &str = "usage: mask_check <scene.json> [--data-dir DIR] [--config PATH]";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Ini(String),
    InvalidLogLevel(String),
    MissingArgument(&'static str),
    UnknownArgument(String),
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Ini(e) => write!(f, "could not read config: {}", e),
            ConfigError::InvalidLogLevel(level) => write!(f, "invalid log level {:?}", level),
            ConfigError::MissingArgument(name) => write!(f, "missing {}", name),
            ConfigError::UnknownArgument(arg) => write!(f, "unknown argument {:?}", arg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    pub log_level: LevelFilter,
    /// Directory that PBM paths in scene files are relative to
    pub data_dir: PathBuf,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        ProgramConfig {
            log_level: LevelFilter::Info,
            data_dir: PathBuf::from("."),
        }
    }
}

impl ProgramConfig {
    /// Reads the config from an INI file, a missing file gives the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Ini::new();
        if path.exists() {
            config.load(path).map_err(ConfigError::Ini)?;
            ProgramConfig::from_ini(&config)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(ProgramConfig::default())
        }
    }

    fn from_ini(config: &Ini) -> Result<Self, ConfigError> {
        let defaults = ProgramConfig::default();
        let log_level = match config.get("Logging", "Level") {
            Some(level) => level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => defaults.log_level,
        };
        let data_dir = config
            .get("Data", "Directory")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        Ok(ProgramConfig {
            log_level,
            data_dir,
        })
    }

    pub fn apply(&mut self, command_line: &CommandLine) {
        if let Some(data_dir) = &command_line.data_dir {
            self.data_dir = data_dir.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub scene_path: PathBuf,
    pub config_path: PathBuf,
    pub data_dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut scene_path = None;
        let mut config_path = PathBuf::from("config.ini");
        let mut data_dir = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    let dir = args.next().ok_or(ConfigError::MissingArgument("--data-dir value"))?;
                    data_dir = Some(PathBuf::from(dir));
                }
                "--config" => {
                    let path = args.next().ok_or(ConfigError::MissingArgument("--config value"))?;
                    config_path = PathBuf::from(path);
                }
                _ if arg.starts_with("--") || scene_path.is_some() => {
                    return Err(ConfigError::UnknownArgument(arg));
                }
                _ => scene_path = Some(PathBuf::from(arg)),
            }
        }

        Ok(CommandLine {
            scene_path: scene_path.ok_or(ConfigError::MissingArgument("scene path"))?,
            config_path,
            data_dir,
        })
    }
}
