//! Settings read from an optional `kinsfolk.toml` and `KINSFOLK_*` environment variables.

use std::path::Path;

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::batch::Options;
use crate::error::Result;

pub const DEFAULT_BIND: &str = "127.0.0.1:8091";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// A tracing filter directive such as `info` or `kinsfolk=debug`.
    pub filter: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    pub output: Options,
    pub log: LogSettings,
}

impl Settings {
    /// Layers defaults, the config file and the environment, in that order.
    ///
    /// An explicit `path` must exist; without one, `kinsfolk.toml` in the
    /// working directory is used when present. Environment variables use `__`
    /// between levels, e.g. `KINSFOLK_OUTPUT__PLACE_ROW_LAYOUT=canonical`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("kinsfolk").required(false),
        };
        let settings = Config::builder()
            .set_default("server.bind", DEFAULT_BIND)?
            .set_default("output.place_row_layout", "legacy")?
            .set_default("output.language", "en")?
            .set_default("log.filter", "info")?
            .add_source(file)
            .add_source(Environment::with_prefix("KINSFOLK").prefix_separator("_").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
