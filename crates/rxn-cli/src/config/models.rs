use crate::cli::OutputFormat;
use rxnrebuild::engine::config::CompletionConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub rule_id: String,
    pub transformation: String,
    pub cache_dir: PathBuf,
    pub output: OutputFormat,
    pub completion: CompletionConfig,
}
