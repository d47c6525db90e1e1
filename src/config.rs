use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::normalize::NormalizeOptions;

/// Runtime settings for the collaborator layer. The extraction core never
/// reads these directly; it only sees the derived [`NormalizeOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Decode HTML entities in extracted strings. Opt-in: pages escape for
    /// a reason, so the default leaves text as-is.
    #[serde(default)]
    pub unescape_html: bool,

    /// Sent on fetches; many recipe sites refuse requests without a
    /// browser-looking agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            unescape_html: false,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

impl Settings {
    /// Load settings with the following priority (highest to lowest):
    /// 1. Environment variables with GRABBER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("GRABBER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            unescape_html: self.unescape_html,
        }
    }
}
