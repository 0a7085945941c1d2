use anyhow::Context as _;

use super::default::default_player_files;
use super::{PlayerRegistry, RawRegistryFile};

pub fn from_toml_str(s: &str) -> anyhow::Result<PlayerRegistry> {
    let raw: RawRegistryFile = toml::from_str(s)?;
    Ok(build_registry(raw))
}

pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<PlayerRegistry> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read player registry {}", path.display()))?;
    from_toml_str(&content).with_context(|| format!("invalid player registry {}", path.display()))
}

pub fn load_default() -> PlayerRegistry {
    PlayerRegistry::new(default_player_files())
}

fn build_registry(raw: RawRegistryFile) -> PlayerRegistry {
    let defaults = if raw.include_defaults.unwrap_or(true) {
        default_player_files()
    } else {
        Default::default()
    };
    PlayerRegistry::new(defaults.into_iter().chain(raw.players))
}
