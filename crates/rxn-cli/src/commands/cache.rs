use crate::cli::{CacheArgs, CacheCommands};
use crate::data::DataManager;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: CacheArgs) -> Result<()> {
    match args.command {
        CacheCommands::Path => handle_path(),
        CacheCommands::SetPath { path } => handle_set_path(path),
        CacheCommands::ResetPath => handle_reset_path(),
    }
}

fn handle_path() -> Result<()> {
    let manager = DataManager::new()?;
    println!("{}", manager.get_data_path().display());
    for (name, present) in manager.cache_files() {
        let status = if present { "found" } else { "missing" };
        println!("  {}: {}", name, status);
    }
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    DataManager::set_custom_path(&path)?;
    info!("Compound cache path set to {:?}", path);
    println!("✓ Compound cache path set to: {}", path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    DataManager::reset_path()?;
    let manager = DataManager::new()?;
    info!("Compound cache path reset to {:?}", manager.get_data_path());
    println!(
        "✓ Compound cache path reset to default: {}",
        manager.get_data_path().display()
    );
    Ok(())
}
