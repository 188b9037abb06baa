//! Viewer configuration.

use std::env;
use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Environment variable selecting the [`OutputFormat`].
pub const FORMAT_VAR: &str = "REACT_VIEW_FORMAT";
/// Environment variable toggling colored output.
pub const COLOR_VAR: &str = "REACT_VIEW_COLOR";

/// How the conversation is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Human readable blocks, one per segment.
    #[default]
    Pretty,
    /// The conversation snapshot as JSON.
    Json,
    /// The JSON schema of a segment record.
    Schema,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            "schema" => Ok(OutputFormat::Schema),
            _ => Err(ConfigError::invalid(FORMAT_VAR, s)),
        }
    }
}

/// Describes an invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

impl ConfigError {
    #[inline]
    fn invalid(key: &'static str, value: &str) -> Self {
        Self {
            key,
            value: value.to_owned(),
        }
    }

    /// Returns the name of the offending setting.
    #[inline]
    pub fn key(&self) -> &str {
        self.key
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.key)
    }
}

impl Error for ConfigError {}

/// Builder for [`ViewConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewConfigBuilder {
    format: Option<OutputFormat>,
    color: Option<bool>,
}

impl ViewConfigBuilder {
    /// Creates a builder with nothing set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from the `REACT_VIEW_*` environment variables.
    ///
    /// Unset variables are left for the defaults.
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::new();
        if let Some(format) = lookup(FORMAT_VAR) {
            builder = builder.with_format(format.parse()?);
        }
        if let Some(color) = lookup(COLOR_VAR) {
            builder = builder.with_color(parse_bool(COLOR_VAR, &color)?);
        }
        Ok(builder)
    }

    /// Sets the output format.
    #[inline]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Enables or disables colored output.
    #[inline]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> ViewConfig {
        ViewConfig {
            format: self.format.unwrap_or_default(),
            color: self.color.unwrap_or(true),
        }
    }
}

/// Configuration of the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewConfig {
    /// The output format.
    pub format: OutputFormat,
    /// Whether pretty output is colored.
    pub color: bool,
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value)),
    }
}
