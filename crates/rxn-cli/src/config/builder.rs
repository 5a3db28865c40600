use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{CompleteArgs, OutputFormat};
use crate::data::DataManager;
use crate::error::{CliError, Result};
use clap::ValueEnum;
use rxnrebuild::engine::config::{
    CompletionConfigBuilder, ConfigError, ConsistencyPolicy, DetectionMode,
};
use std::str::FromStr;

pub fn build_config(args: &CompleteArgs, data_manager: &DataManager) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let completion_file = file_config.completion.take().unwrap_or_default();
    let cache_file = file_config.cache.take().unwrap_or_default();

    let direction = parse_or(
        args.direction
            .as_deref()
            .or(completion_file.direction.as_deref()),
        defaults.direction,
    )?;

    let detection_mode = if args.legacy {
        DetectionMode::Legacy
    } else {
        parse_or(
            completion_file.detection_mode.as_deref(),
            defaults.detection_mode,
        )?
    };

    let consistency = if args.strict {
        ConsistencyPolicy::Strict
    } else {
        parse_or(completion_file.consistency.as_deref(), defaults.consistency)?
    };

    let allow_structureless = if args.no_structureless {
        false
    } else {
        completion_file
            .allow_structureless
            .unwrap_or(defaults.allow_structureless)
    };

    let mut compounds_to_ignore = completion_file.compounds_to_ignore.unwrap_or_default();
    compounds_to_ignore.extend(args.ignore.iter().cloned());

    let output = match (args.output, file_config.output.as_deref()) {
        (Some(output), _) => output,
        (None, Some(value)) => <OutputFormat as ValueEnum>::from_str(value, true).map_err(|_| {
            CliError::Config(format!(
                "Invalid value '{}' for output, expected one of: text, json",
                value
            ))
        })?,
        (None, None) => defaults.output,
    };

    let cache_dir = args
        .cache_dir
        .clone()
        .or(cache_file.path)
        .unwrap_or_else(|| data_manager.get_data_path().to_path_buf());

    let completion = CompletionConfigBuilder::new()
        .template_id(args.template_id.clone())
        .direction(direction)
        .compounds_to_ignore(compounds_to_ignore)
        .mode(detection_mode)
        .consistency(consistency)
        .allow_structureless(allow_structureless)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        rule_id: args.rule_id.clone(),
        transformation: args.transformation.clone(),
        cache_dir,
        output,
        completion,
    })
}

fn parse_or<T>(value: Option<&str>, default: T) -> Result<T>
where
    T: FromStr<Err = ConfigError>,
{
    match value {
        Some(value) => value
            .parse()
            .map_err(|e: ConfigError| CliError::Config(e.to_string())),
        None => Ok(default),
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "completion.direction" => {
                config
                    .completion
                    .get_or_insert_with(Default::default)
                    .direction = Some(value_str.to_string());
            }
            "completion.detection-mode" => {
                config
                    .completion
                    .get_or_insert_with(Default::default)
                    .detection_mode = Some(value_str.to_string());
            }
            "completion.consistency" => {
                config
                    .completion
                    .get_or_insert_with(Default::default)
                    .consistency = Some(value_str.to_string());
            }
            "completion.allow-structureless" => {
                config
                    .completion
                    .get_or_insert_with(Default::default)
                    .allow_structureless = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            "completion.compounds-to-ignore" => {
                config
                    .completion
                    .get_or_insert_with(Default::default)
                    .compounds_to_ignore = Some(
                    value_str
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(str::to_string)
                        .collect(),
                );
            }
            "cache.path" => {
                config.cache.get_or_insert_with(Default::default).path = Some(value_str.into());
            }
            "output" => {
                config.output = Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxnrebuild::engine::direction::Direction;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_complete_args() -> CompleteArgs {
        CompleteArgs {
            rule_id: "RR-1".to_string(),
            transformation: "MNXM179=MNXM22+MNXM23".to_string(),
            template_id: None,
            direction: None,
            ignore: vec![],
            legacy: false,
            strict: false,
            no_structureless: false,
            config: None,
            cache_dir: None,
            output: None,
            set_values: vec![],
        }
    }

    fn manager() -> DataManager {
        DataManager::with_custom_path(PathBuf::from("/data/rr_cache"))
    }

    #[test]
    fn build_config_falls_back_to_defaults() {
        let app = build_config(&base_complete_args(), &manager()).expect("build ok");
        let defaults = DefaultsConfig::default();

        assert_eq!(app.rule_id, "RR-1");
        assert_eq!(app.transformation, "MNXM179=MNXM22+MNXM23");
        assert_eq!(app.cache_dir, PathBuf::from("/data/rr_cache"));
        assert_eq!(app.output, defaults.output);
        assert_eq!(app.completion.direction, defaults.direction);
        assert_eq!(app.completion.mode, defaults.detection_mode);
        assert_eq!(app.completion.consistency, defaults.consistency);
        assert_eq!(
            app.completion.allow_structureless,
            defaults.allow_structureless
        );
        assert!(app.completion.compounds_to_ignore.is_empty());
        assert_eq!(app.completion.template_id, None);
    }

    #[test]
    fn build_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        let toml = r#"
            output = "json"

            [completion]
            direction = "forward"
            detection-mode = "legacy"
            consistency = "strict"
            allow-structureless = false
            compounds-to-ignore = ["MNXM1", "MNXM3"]

            [cache]
            path = "/srv/rr_cache"
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let mut args = base_complete_args();
        args.config = Some(cfg_path);

        let app = build_config(&args, &manager()).expect("build ok");

        assert_eq!(app.output, OutputFormat::Json);
        assert_eq!(app.cache_dir, PathBuf::from("/srv/rr_cache"));
        assert_eq!(app.completion.direction, Direction::Forward);
        assert_eq!(app.completion.mode, DetectionMode::Legacy);
        assert_eq!(app.completion.consistency, ConsistencyPolicy::Strict);
        assert!(!app.completion.allow_structureless);
        assert_eq!(app.completion.compounds_to_ignore, vec!["MNXM1", "MNXM3"]);
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        let toml = r#"
            output = "json"
            [completion]
            direction = "forward"
            compounds-to-ignore = ["MNXM1"]
            [cache]
            path = "/srv/rr_cache"
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let mut args = base_complete_args();
        args.config = Some(cfg_path);
        args.direction = Some("reverse".to_string());
        args.output = Some(OutputFormat::Text);
        args.cache_dir = Some(PathBuf::from("/tmp/other_cache"));
        args.ignore = vec!["MNXM3".to_string(), "MNXM1".to_string()];
        args.legacy = true;
        args.template_id = Some("MNXR94688".to_string());

        let app = build_config(&args, &manager()).expect("build ok");

        assert_eq!(app.output, OutputFormat::Text);
        assert_eq!(app.cache_dir, PathBuf::from("/tmp/other_cache"));
        assert_eq!(app.completion.direction, Direction::Reverse);
        assert_eq!(app.completion.mode, DetectionMode::Legacy);
        assert_eq!(app.completion.compounds_to_ignore, vec!["MNXM1", "MNXM3"]);
        assert_eq!(app.completion.template_id.as_deref(), Some("MNXR94688"));
    }

    #[test]
    fn set_values_override() {
        let mut args = base_complete_args();
        args.set_values = vec![
            "completion.direction=forward".to_string(),
            "completion.detection-mode=legacy".to_string(),
            "completion.consistency=strict".to_string(),
            "completion.allow-structureless=false".to_string(),
            "completion.compounds-to-ignore=MNXM1, MNXM2".to_string(),
            "cache.path=/opt/cache".to_string(),
            "output=json".to_string(),
        ];

        let app = build_config(&args, &manager()).expect("build ok");

        assert_eq!(app.completion.direction, Direction::Forward);
        assert_eq!(app.completion.mode, DetectionMode::Legacy);
        assert_eq!(app.completion.consistency, ConsistencyPolicy::Strict);
        assert!(!app.completion.allow_structureless);
        assert_eq!(app.completion.compounds_to_ignore, vec!["MNXM1", "MNXM2"]);
        assert_eq!(app.cache_dir, PathBuf::from("/opt/cache"));
        assert_eq!(app.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let mut args = base_complete_args();
        args.direction = Some("sideways".to_string());
        assert!(matches!(
            build_config(&args, &manager()),
            Err(CliError::Config(msg)) if msg.contains("sideways")
        ));

        let mut args = base_complete_args();
        args.set_values = vec!["completion.unknown=1".to_string()];
        assert!(matches!(
            build_config(&args, &manager()),
            Err(CliError::Config(_))
        ));

        let mut args = base_complete_args();
        args.set_values = vec!["completion.direction".to_string()];
        assert!(matches!(
            build_config(&args, &manager()),
            Err(CliError::Config(_))
        ));

        let mut args = base_complete_args();
        args.ignore = vec!["  ".to_string()];
        assert!(matches!(
            build_config(&args, &manager()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "[completion]\nmode = \"legacy\"\n").unwrap();

        let mut args = base_complete_args();
        args.config = Some(cfg_path);

        assert!(matches!(
            build_config(&args, &manager()),
            Err(CliError::FileParsing { .. })
        ));
    }
}
