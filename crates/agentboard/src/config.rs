use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub logging: Option<LoggingCfg>,
    pub collection: Option<CollectionCfg>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub to_file: Option<bool>,
    pub dir: Option<String>,
    pub json: Option<bool>,
    pub compact: Option<bool>,
    pub pretty: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollectionCfg {
    pub dir: Option<String>,           // prompt collection directory
    pub registry_file: Option<String>, // TOML player → file overrides
    pub agent_index: Option<usize>,
    pub format: Option<String>, // text | json | html
}

pub fn load_user_config(home: &Path) -> anyhow::Result<Option<UserConfig>> {
    let path = home.join("config.toml");
    if !path.exists() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path)?;
    let cfg: UserConfig = toml::from_str(&s)?;
    Ok(Some(cfg))
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_user_config(dir.path()).expect("ok").is_none());
    }

    #[test]
    fn reads_logging_and_collection_tables() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("config.toml"),
            r#"
[logging]
level = "debug"
to_file = false

[collection]
dir = "/data/prompt_collection"
agent_index = 1
format = "json"
"#,
        )
        .expect("write");
        let cfg = load_user_config(dir.path()).expect("ok").expect("some");
        let logging = cfg.logging.expect("logging");
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.to_file, Some(false));
        let collection = cfg.collection.expect("collection");
        assert_eq!(collection.dir.as_deref(), Some("/data/prompt_collection"));
        assert_eq!(collection.agent_index, Some(1));
        assert_eq!(collection.format.as_deref(), Some("json"));
        assert!(collection.registry_file.is_none());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("config.toml"), "[collection\n").expect("write");
        assert!(load_user_config(dir.path()).is_err());
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("rel/path"), PathBuf::from("rel/path"));
    }
}
