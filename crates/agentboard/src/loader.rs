//! Load player configuration documents from the prompt collection.
//!
//! Responsibilities:
//! - Resolve a leaderboard player name to a config file through the registry.
//! - Read the file asynchronously and hand its text to the parser.
//! - Collapse failures to "configuration not available" for display callers,
//!   logging the reason.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinSet;

use crate::model::AgentDocument;
use crate::parser::{AgentParser, AgentYamlParser};
use crate::registry::PlayerRegistry;

/// Where player documents live and how player names map onto them.
#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// Directory holding the per-player config files.
    pub collection_dir: PathBuf,
    pub registry: PlayerRegistry,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no config file registered for player '{0}'")]
    UnknownPlayer(String),
    #[error("unsupported config file: {}", .0.display())]
    Unsupported(PathBuf),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse a single configuration file.
pub async fn load_config_file(path: &Path) -> Result<AgentDocument, LoadError> {
    if !AgentYamlParser::supports(path) {
        return Err(LoadError::Unsupported(path.to_path_buf()));
    }
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let doc = AgentDocument::new(AgentYamlParser::parse(&content));
    tracing::debug!("parsed {} agent(s) from {}", doc.len(), path.display());
    Ok(doc)
}

/// Resolve `player` through the registry and load its document.
pub async fn load_player_config(
    settings: &LoaderSettings,
    player: &str,
) -> Result<AgentDocument, LoadError> {
    let file = settings
        .registry
        .resolve(player)
        .ok_or_else(|| LoadError::UnknownPlayer(player.to_string()))?;
    load_config_file(&settings.collection_dir.join(file)).await
}

/// Load a player's document, logging and discarding any failure.
pub async fn lookup_player(settings: &LoaderSettings, player: &str) -> Option<AgentDocument> {
    match load_player_config(settings, player).await {
        Ok(doc) => Some(doc),
        Err(e @ LoadError::UnknownPlayer(_)) => {
            tracing::warn!("{}", e);
            None
        }
        Err(e) => {
            tracing::error!("error loading config for {}: {}", player, e);
            None
        }
    }
}

/// Look up several players concurrently; results keep the input order.
pub async fn lookup_players(
    settings: Arc<LoaderSettings>,
    players: Vec<String>,
) -> Vec<(String, Option<AgentDocument>)> {
    let mut set = JoinSet::new();
    for (idx, player) in players.iter().cloned().enumerate() {
        let settings = Arc::clone(&settings);
        set.spawn(async move {
            let doc = lookup_player(&settings, &player).await;
            (idx, doc)
        });
    }

    let mut docs: Vec<Option<AgentDocument>> = vec![None; players.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, doc)) => docs[idx] = doc,
            Err(e) => tracing::error!("config lookup task failed: {}", e),
        }
    }
    players.into_iter().zip(docs).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PromptKind;

    const DOC: &str = r#"agent:
  model:
    provider: openai
    name: gpt-4o
  prompts:
    system_prompt: |
      Play to win.
"#;

    fn settings_with(dir: &Path, players: &[(&str, &str)]) -> LoaderSettings {
        LoaderSettings {
            collection_dir: dir.to_path_buf(),
            registry: PlayerRegistry::new(players.iter().copied()),
        }
    }

    #[tokio::test]
    async fn loads_registered_player() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("alice_config.yml"), DOC).expect("write");
        let settings = settings_with(dir.path(), &[("alice", "alice_config.yml")]);

        let doc = load_player_config(&settings, "Alice").await.expect("load ok");
        assert_eq!(doc.len(), 1);
        let agent = doc.first().expect("agent");
        assert_eq!(agent.model.name.as_deref(), Some("gpt-4o"));
        assert_eq!(agent.prompt(PromptKind::System), Some("Play to win."));
    }

    #[tokio::test]
    async fn unknown_player_and_missing_file_are_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = settings_with(dir.path(), &[("bob", "bob.yml")]);

        let err = load_player_config(&settings, "carol").await.unwrap_err();
        assert!(matches!(err, LoadError::UnknownPlayer(ref p) if p == "carol"));

        let err = load_player_config(&settings, "bob").await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(lookup_player(&settings, "bob").await.is_none());
    }

    #[tokio::test]
    async fn rejects_unsupported_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, DOC).expect("write");
        let err = load_config_file(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Unsupported(_)));
    }

    #[tokio::test]
    async fn concurrent_lookups_keep_input_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("a.yml"), DOC).expect("write");
        std::fs::write(dir.path().join("c.yaml"), "agent:\n").expect("write");
        let settings = Arc::new(settings_with(
            dir.path(),
            &[("a", "a.yml"), ("c", "c.yaml")],
        ));

        let results = lookup_players(
            settings,
            vec!["c".to_string(), "b".to_string(), "a".to_string()],
        )
        .await;
        let names: Vec<&str> = results.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
        assert_eq!(results[0].1.as_ref().map(AgentDocument::len), Some(1));
        assert!(results[1].1.is_none());
        assert_eq!(
            results[2]
                .1
                .as_ref()
                .and_then(|d| d.first())
                .and_then(|a| a.model.provider.as_deref()),
            Some("openai")
        );
    }
}
