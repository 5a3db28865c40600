use crate::error::{CliError, Result};
use directories::ProjectDirs;
use rxnrebuild::core::cache::{COMPOUNDS_FILE, MemoryCache, RULES_FILE, TEMPLATES_FILE};
use std::fs::{self};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CACHE_FILES: [&str; 3] = [RULES_FILE, TEMPLATES_FILE, COMPOUNDS_FILE];

/// Locates the compound cache directory: a custom path recorded in
/// `path.conf`, or the OS-specific data directory.
#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    /// Which of the cache files exist under the data path.
    pub fn cache_files(&self) -> Vec<(&'static str, bool)> {
        CACHE_FILES
            .iter()
            .map(|&name| (name, self.base_path.join(name).is_file()))
            .collect()
    }

    /// Loads the compound cache from the data path, which must exist.
    pub fn load_cache(&self) -> Result<MemoryCache> {
        if !self.base_path.is_dir() {
            return Err(CliError::Data(format!(
                "Compound cache directory does not exist: {:?}.\nHint: Run 'rxn-rebuild cache set-path <PATH>' or pass --cache-dir.",
                self.base_path
            )));
        }
        info!("Loading compound cache from {:?}", self.base_path);
        Ok(MemoryCache::load_dir(&self.base_path)?)
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        if !path.is_absolute() {
            return Err(CliError::Argument(format!(
                "Cache path must be absolute, got '{}'.",
                path.display()
            )));
        }
        let config_path = Self::get_path_config_file()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, path.to_string_lossy().as_bytes()).map_err(CliError::from)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn determine_data_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) if config_path.exists() => {
                Self::read_path_config(&config_path)?.map_or_else(Self::get_default_data_path, Ok)
            }
            _ => Self::get_default_data_path(),
        }
    }

    fn read_path_config(config_path: &Path) -> Result<Option<PathBuf>> {
        let custom_path_str = fs::read_to_string(config_path)?.trim().to_string();
        if custom_path_str.is_empty() {
            warn!("Custom path config file is empty, falling back to default path.");
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(custom_path_str)))
        }
    }

    fn get_path_config_file() -> Result<PathBuf> {
        ProjectDirs::from("org", "brsynth", "rxn-rebuild")
            .map(|dirs| dirs.config_dir().join("path.conf"))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        ProjectDirs::from("org", "brsynth", "rxn-rebuild")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxnrebuild::core::cache::CompoundCache;
    use tempfile::tempdir;

    #[test]
    fn cache_files_reports_presence_of_each_file() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(RULES_FILE), "{}").unwrap();

        let manager = DataManager::with_custom_path(temp_dir.path().to_path_buf());

        assert_eq!(
            manager.cache_files(),
            vec![
                (RULES_FILE, true),
                (TEMPLATES_FILE, false),
                (COMPOUNDS_FILE, false)
            ]
        );
    }

    #[test]
    fn load_cache_reads_json_tables() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(COMPOUNDS_FILE),
            r#"{"MNXM4": {"smiles": "O=O"}}"#,
        )
        .unwrap();

        let manager = DataManager::with_custom_path(temp_dir.path().to_path_buf());
        let cache = manager.load_cache().unwrap();

        assert_eq!(
            cache
                .compound_structure("MNXM4")
                .and_then(|record| record.structure()),
            Some("O=O")
        );
    }

    #[test]
    fn load_cache_fails_for_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let manager = DataManager::with_custom_path(temp_dir.path().join("nowhere"));

        assert!(matches!(manager.load_cache(), Err(CliError::Data(_))));
    }

    #[test]
    fn malformed_cache_file_is_a_load_error() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(TEMPLATES_FILE), "not json").unwrap();

        let manager = DataManager::with_custom_path(temp_dir.path().to_path_buf());
        let result = manager.load_cache();

        assert!(matches!(result, Err(CliError::CacheLoad(_))));
    }

    #[test]
    fn path_config_is_read_and_blank_config_is_ignored() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("path.conf");

        fs::write(&config_path, "  /srv/rr_cache\n").unwrap();
        assert_eq!(
            DataManager::read_path_config(&config_path).unwrap(),
            Some(PathBuf::from("/srv/rr_cache"))
        );

        fs::write(&config_path, "   ").unwrap();
        assert_eq!(DataManager::read_path_config(&config_path).unwrap(), None);
    }

    #[test]
    fn relative_custom_path_is_rejected() {
        let result = DataManager::set_custom_path(Path::new("relative/cache"));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
