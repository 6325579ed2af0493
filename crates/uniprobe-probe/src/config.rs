//! Probe configuration (deterministic defaults, env-overridable).
//!
//! Invalid values never abort a run: each one is reported as a
//! [`ConfigError`] and the default for that field is kept.

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use uniprobe_format::EngineKind;

const ENV_ENGINE: &str = "UNIPROBE_ENGINE";
const ENV_SECTIONS: &str = "UNIPROBE_SECTIONS";
const ENV_STRICT: &str = "UNIPROBE_STRICT";
const ENV_ENCODING: &str = "UNIPROBE_ENCODING";
const ENV_REPORT_PATH: &str = "UNIPROBE_REPORT_PATH";
const ENV_LOG: &str = "UNIPROBE_LOG";

/// Converter label probed when none is configured.
pub const DEFAULT_ENCODING: &str = "Shift-JIS";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// One demonstration or verification section, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Case mapping and string length.
    Strings,
    /// Locale display names and currency formatting.
    Locale,
    /// Sentence and word segmentation.
    Segment,
    /// Script transliteration.
    Translit,
    /// Data verification checks.
    Bundle,
}

impl Section {
    /// Every section, in run order.
    pub const ALL: [Section; 5] = [
        Section::Strings,
        Section::Locale,
        Section::Segment,
        Section::Translit,
        Section::Bundle,
    ];

    /// Parse a config token (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strings" | "string" => Some(Self::Strings),
            "locale" | "locales" => Some(Self::Locale),
            "segment" | "break" | "breaks" => Some(Self::Segment),
            "translit" | "transliteration" => Some(Self::Translit),
            "bundle" | "data" => Some(Self::Bundle),
            _ => None,
        }
    }

    /// Config token for this section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strings => "strings",
            Self::Locale => "locale",
            Self::Segment => "segment",
            Self::Translit => "translit",
            Self::Bundle => "bundle",
        }
    }

    /// Human-readable title used in section headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Strings => "Unicode String",
            Self::Locale => "Locale",
            Self::Segment => "Break Iterator",
            Self::Translit => "Transliteration",
            Self::Bundle => "Data Bundle",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probe run configuration.
///
/// # Environment Variables
/// - `UNIPROBE_ENGINE` = native|regex
/// - `UNIPROBE_SECTIONS` = comma list of strings|locale|segment|translit|bundle
/// - `UNIPROBE_STRICT` (bool)
/// - `UNIPROBE_ENCODING` (converter label)
/// - `UNIPROBE_REPORT_PATH` (JSONL file path)
/// - `UNIPROBE_LOG` (tracing filter directive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub engine: EngineKind,
    pub sections: Vec<Section>,
    pub strict: bool,
    pub encoding: String,
    pub report_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Native,
            sections: Section::ALL.to_vec(),
            strict: false,
            encoding: DEFAULT_ENCODING.to_string(),
            report_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: ProbeConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ProbeConfig {
    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Parse config from a custom key lookup.
    #[must_use]
    pub fn from_lookup<F>(get: F) -> ConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        from_env_with(get)
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.sections.is_empty() {
            errors.push(ConfigError::new(
                "sections",
                "",
                "at least one section must be enabled",
            ));
        }
        if self.encoding.trim().is_empty() {
            errors.push(ConfigError::new(
                "encoding",
                self.encoding.clone(),
                "converter label must not be empty",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether a section is enabled.
    #[must_use]
    pub fn runs(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

fn from_env_with<F>(mut get: F) -> ConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = ProbeConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_ENGINE) {
        match EngineKind::parse(&value) {
            Some(parsed) => config.engine = parsed,
            None => errors.push(ConfigError::new("engine", value, "expected native|regex")),
        }
    }

    if let Some(value) = get(ENV_SECTIONS) {
        match parse_sections(&value) {
            Ok(parsed) => config.sections = parsed,
            Err(message) => errors.push(ConfigError::new("sections", value, message)),
        }
    }

    if let Some(value) = get(ENV_STRICT) {
        match parse_bool(&value) {
            Some(parsed) => config.strict = parsed,
            None => errors.push(ConfigError::new(
                "strict",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_ENCODING) {
        if value.trim().is_empty() {
            errors.push(ConfigError::new(
                "encoding",
                value,
                "converter label must not be empty",
            ));
        } else {
            config.encoding = value.trim().to_string();
        }
    }

    if let Some(value) = get(ENV_REPORT_PATH)
        && !value.trim().is_empty()
    {
        config.report_path = Some(PathBuf::from(value.trim()));
    }

    if let Some(value) = get(ENV_LOG)
        && !value.trim().is_empty()
    {
        config.log_filter = value.trim().to_string();
    }

    if let Err(mut invalid) = config.validate() {
        errors.append(&mut invalid);
    }

    ConfigParse { config, errors }
}

/// Parse a comma list of sections; order is normalized to run order.
fn parse_sections(value: &str) -> Result<Vec<Section>, String> {
    let mut sections = Vec::new();
    for token in value.split(',').filter(|token| !token.trim().is_empty()) {
        match Section::parse(token) {
            Some(section) => sections.push(section),
            None => {
                return Err(format!(
                    "unknown section '{}', expected strings|locale|segment|translit|bundle",
                    token.trim()
                ));
            }
        }
    }
    if sections.is_empty() {
        return Err("at least one section must be enabled".to_string());
    }
    sections.sort_unstable();
    sections.dedup();
    Ok(sections)
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
