use serde::Deserialize;
use std::collections::HashMap;

/// Case-insensitive player → config file name mapping.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    /// Keys are lowercased player names; values are file names relative to
    /// the prompt collection directory.
    by_player: HashMap<String, String>,
}

impl PlayerRegistry {
    /// Later entries override earlier ones with the same normalized name.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut by_player = HashMap::new();
        for (player, file) in entries {
            let key = player.as_ref().trim().to_ascii_lowercase();
            let file = file.into();
            if key.is_empty() {
                tracing::warn!("player registry: skipping entry with empty name ({})", file);
                continue;
            }
            by_player.insert(key, file);
        }
        Self { by_player }
    }

    pub fn resolve(&self, player: &str) -> Option<&str> {
        self.by_player
            .get(&player.trim().to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Registered players sorted by name.
    pub fn players(&self) -> Vec<(&str, &str)> {
        let mut v: Vec<(&str, &str)> = self
            .by_player
            .iter()
            .map(|(p, f)| (p.as_str(), f.as_str()))
            .collect();
        v.sort_unstable();
        v
    }

    pub fn len(&self) -> usize {
        self.by_player.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_player.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRegistryFile {
    #[serde(default)]
    pub players: HashMap<String, String>,
    /// Start from the built-in table (default) or from nothing.
    #[serde(default)]
    pub include_defaults: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_player_names() {
        let reg = PlayerRegistry::new([(" Alice ", "a.yml"), ("", "blank.yml"), ("ALICE", "a2.yml")]);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.resolve("alice"), Some("a2.yml"));
        assert_eq!(reg.players(), vec![("alice", "a2.yml")]);
    }
}
