use std::{fmt::Debug, path::PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}
fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn load<P: Into<PathBuf> + Debug>(path: P) -> anyhow::Result<Self> {
        let path = path.into();
        (|| toml::from_str(&fs_err::read_to_string(&path)?).map_err(anyhow::Error::new))()
            .with_context(|| {
                format!(
                    "While trying to parse {path:?} as {}",
                    std::any::type_name::<Self>()
                )
            })
    }

    /// Values given on the command line take precedence over the file.
    pub fn with_overrides(self, host: Option<String>, port: Option<u16>) -> Self {
        Self {
            host: host.unwrap_or(self.host),
            port: port.unwrap_or(self.port),
        }
    }
}
