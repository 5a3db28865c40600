use super::direction::Direction;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {parameter}, expected one of: {expected}")]
    InvalidValue {
        parameter: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("Compound identifiers to ignore cannot be empty")]
    EmptyIgnoredCompound,
}

/// How missing compounds are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionMode {
    /// Use the exclusion lists stored on each rule record.
    #[default]
    Precomputed,
    /// Diff template and rule live, and look up every structure.
    Legacy,
}

impl FromStr for DetectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "precomputed" => Ok(Self::Precomputed),
            "legacy" => Ok(Self::Legacy),
            _ => Err(ConfigError::InvalidValue {
                parameter: "detection mode",
                value: s.to_string(),
                expected: "precomputed, legacy",
            }),
        }
    }
}

/// What a completed-versus-template count mismatch does to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsistencyPolicy {
    /// Record a diagnostic and keep the result.
    #[default]
    Warn,
    /// Drop the candidate without producing a result.
    Strict,
}

impl FromStr for ConsistencyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::InvalidValue {
                parameter: "consistency policy",
                value: s.to_string(),
                expected: "warn, strict",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    /// Restrict completion to this template reaction; all variants otherwise.
    pub template_id: Option<String>,
    pub direction: Direction,
    pub compounds_to_ignore: Vec<String>,
    pub mode: DetectionMode,
    pub consistency: ConsistencyPolicy,
    /// In legacy mode, whether compounds without a structure still complete
    /// the transformation (keyed by their identifier). When false, such a
    /// candidate gets no `full_transfo`.
    pub allow_structureless: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            template_id: None,
            direction: Direction::Reverse,
            compounds_to_ignore: Vec::new(),
            mode: DetectionMode::Precomputed,
            consistency: ConsistencyPolicy::Warn,
            allow_structureless: true,
        }
    }
}

#[derive(Default)]
pub struct CompletionConfigBuilder {
    template_id: Option<String>,
    direction: Option<Direction>,
    compounds_to_ignore: Vec<String>,
    mode: Option<DetectionMode>,
    consistency: Option<ConsistencyPolicy>,
    allow_structureless: Option<bool>,
}

impl CompletionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template_id(mut self, template_id: Option<String>) -> Self {
        self.template_id = template_id;
        self
    }
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
    pub fn compounds_to_ignore<I, S>(mut self, compounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compounds_to_ignore = compounds.into_iter().map(Into::into).collect();
        self
    }
    pub fn mode(mut self, mode: DetectionMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn consistency(mut self, policy: ConsistencyPolicy) -> Self {
        self.consistency = Some(policy);
        self
    }
    pub fn allow_structureless(mut self, allow: bool) -> Self {
        self.allow_structureless = Some(allow);
        self
    }

    pub fn build(self) -> Result<CompletionConfig, ConfigError> {
        let defaults = CompletionConfig::default();

        let mut compounds_to_ignore: Vec<String> = Vec::with_capacity(self.compounds_to_ignore.len());
        for id in self.compounds_to_ignore {
            let id = id.trim();
            if id.is_empty() {
                return Err(ConfigError::EmptyIgnoredCompound);
            }
            if !compounds_to_ignore.iter().any(|existing| existing == id) {
                compounds_to_ignore.push(id.to_string());
            }
        }

        Ok(CompletionConfig {
            template_id: self
                .template_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            direction: self.direction.unwrap_or(defaults.direction),
            compounds_to_ignore,
            mode: self.mode.unwrap_or(defaults.mode),
            consistency: self.consistency.unwrap_or(defaults.consistency),
            allow_structureless: self
                .allow_structureless
                .unwrap_or(defaults.allow_structureless),
        })
    }
}
