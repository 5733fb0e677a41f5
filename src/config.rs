use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RosterError;

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "roster.toml";
pub const ENV_PREFIX: &str = "ROSTER_";

/// Listing and creation share one collection path.
pub const STUDENTS_PATH: &str = "api/students";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: Url,
    pub default_grade: String,
    pub loglevel: String,
    pub proxy: Option<Url>,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1:5000").expect("static default url is valid"),
            default_grade: "A".to_string(),
            loglevel: "info".to_string(),
            proxy: None,
            connect_timeout_secs: 5,
            timeout_secs: 15,
        }
    }
}

impl Config {
    /// Defaults, then `roster.toml`, then `ROSTER_*` environment variables.
    pub fn load() -> Result<Self, RosterError> {
        Self::figment().extract().map_err(RosterError::from)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
