use crate::errors::{self, Error};
use crate::time::{self, TimeProvider};
use crate::users::Users;
use crate::{color, debug};
use chrono::NaiveDate;
use chrono_tz::Tz;
use homedir::my_home as get_my_home;
use rand::distributions::{Alphanumeric, DistString};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// App configuration, serialized as json in $XDG_CONFIG_HOME/roster.cfg
#[derive(Clone, Serialize, Deserialize, Eq, PartialEq, Debug)]
pub struct Config {
    /// Path to config file
    pub path: String,
    /// Roster fixture to read instead of the bundled one
    pub fixture: Option<String>,
    /// Date to check offsets at, YYYY-MM-DD
    pub reference_date: Option<String>,
    pub verbose: Option<bool>,
    /// Command line flags, never saved
    #[serde(skip)]
    pub args: Args,
}

/// Flags that take precedence over the config file
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Args {
    pub verbose: bool,
    pub fixture: Option<String>,
    pub date: Option<String>,
}

impl Config {
    pub fn new(path: &str) -> Config {
        Config {
            path: path.to_string(),
            fixture: None,
            reference_date: None,
            verbose: None,
            args: Args::default(),
        }
    }

    /// Write a new config file, refusing to overwrite one
    pub fn create(self) -> Result<Config, Error> {
        if Path::new(&self.path).exists() {
            return Err(errors::new(
                "config",
                &format!("Config already exists at {}", self.path),
            ));
        }
        self.save()?;
        Ok(self)
    }

    pub fn load(path: &str) -> Result<Config, Error> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str::<Config>(&json)?;
        Ok(Config {
            path: path.to_string(),
            ..config
        })
    }

    pub fn save(&self) -> Result<String, Error> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&self.path, json)?;
        Ok(color::ok_string("✓"))
    }

    pub fn with_args(self, args: Args) -> Config {
        Config { args, ..self }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or_default() || self.args.verbose
    }

    /// The --fixture flag wins over the config file
    pub fn fixture_path(&self) -> Result<Option<String>, Error> {
        match self.args.fixture.as_ref().or(self.fixture.as_ref()) {
            None => Ok(None),
            Some(path) => expand_homedir(path).map(Some),
        }
    }

    /// Load the roster named by flags or config, else the bundled one
    pub fn users(&self) -> Result<Users, Error> {
        match self.fixture_path()? {
            Some(path) => {
                debug::maybe_print(self, format!("Loading roster from {path}"));
                Users::load(&path)
            }
            None => {
                debug::maybe_print(self, String::from("Loading bundled roster"));
                Users::bundled()
            }
        }
    }

    /// The --date flag, then the config file, then today in UTC
    pub fn reference_date(&self, provider: &impl TimeProvider) -> Result<NaiveDate, Error> {
        match self.args.date.as_ref().or(self.reference_date.as_ref()) {
            Some(date) => time::date_from_str(date),
            None => Ok(provider.today(Tz::UTC)),
        }
    }
}

/// Load the config if there is one, otherwise use defaults without writing a file
pub fn get_or_default(config_path: Option<String>, args: Args) -> Result<Config, Error> {
    let path = match config_path {
        None => generate_path()?,
        Some(path) => expand_homedir(path.trim())?,
    };

    let config = if Path::new(&path).exists() {
        Config::load(&path)?
    } else {
        Config::new(&path)
    }
    .with_args(args);

    debug::maybe_print(&config, format!("Using config at {path}"));
    Ok(config)
}

pub fn generate_path() -> Result<String, Error> {
    if cfg!(test) {
        let random_string = Alphanumeric.sample_string(&mut rand::thread_rng(), 30);
        let temp_directory = std::env::temp_dir();
        let temp_directory = temp_directory
            .to_str()
            .ok_or_else(|| errors::new("config", "Could not convert temp directory to string"))?
            .to_owned();
        return Ok(format!("{temp_directory}/roster-{random_string}.testcfg"));
    }

    let config_directory = dirs::config_dir()
        .ok_or_else(|| errors::new("config", "Could not find config directory"))?
        .to_str()
        .ok_or_else(|| errors::new("config", "Could not convert config directory to string"))?
        .to_owned();
    Ok(format!("{config_directory}/roster.cfg"))
}

/// Expands a leading "~" to the home directory
/// e.g., "~/.config/roster.cfg" --> "/home/user/.config/roster.cfg"
fn expand_homedir(path: &str) -> Result<String, Error> {
    if !path.starts_with('~') {
        return Ok(path.to_string());
    }

    let home = get_my_home()?.ok_or_else(|| errors::new("config", "Could not find home"))?;
    let home = home
        .to_str()
        .ok_or_else(|| errors::new("config", "Could not convert home directory to string"))?;
    Ok(format!("{home}{}", &path[1..]))
}
