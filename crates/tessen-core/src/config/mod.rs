use anyhow::Result;
use chrono_tz::Tz;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Octet limit for a folded content line (RFC 5545 §3.1).
pub const DEFAULT_FOLD_WIDTH: usize = 75;

/// Narrowest fold width: the continuation space plus one octet of content.
pub const MIN_FOLD_WIDTH: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub ical: IcalConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IcalConfig {
    /// IANA timezone used to interpret floating date-times. Absent means UTC.
    pub default_timezone: Option<String>,
    pub fold_width: usize,
    pub canonical_order: bool,
}

impl IcalConfig {
    /// ## Summary
    /// Resolves the configured default timezone.
    ///
    /// Returns `None` when no timezone is configured, which readers treat as UTC.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is not a known IANA zone.
    pub fn timezone(&self) -> CoreResult<Option<Tz>> {
        self.default_timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>().map_err(|e| {
                    CoreError::InvalidConfiguration(format!("unknown timezone {name:?}: {e}"))
                })
            })
            .transpose()
    }

    /// ## Summary
    /// Checks settings that deserialize fine but cannot be honored.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `fold_width` is below [`MIN_FOLD_WIDTH`].
    pub fn validate(&self) -> CoreResult<()> {
        if self.fold_width < MIN_FOLD_WIDTH {
            return Err(CoreError::InvalidConfiguration(format!(
                "ical.fold_width must be at least {MIN_FOLD_WIDTH}, got {}",
                self.fold_width
            )));
        }
        Ok(())
    }
}

impl Default for IcalConfig {
    fn default() -> Self {
        Self {
            default_timezone: None,
            fold_width: DEFAULT_FOLD_WIDTH,
            canonical_order: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// Builder pre-populated with every default.
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("ical.fold_width", i64::try_from(DEFAULT_FOLD_WIDTH)?)?
            .set_default("ical.canonical_order", true)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// Variables use the `TESSEN_` prefix and `__` between sections,
    /// e.g. `TESSEN_ICAL__DEFAULT_TIMEZONE=Europe/Berlin`.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                config::Environment::with_prefix("TESSEN")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.ical.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the TOML is invalid, does not deserialize into `Settings`,
    /// or fails validation.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.ical.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
