use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use env_flags::env_flags;
use once_cell::sync::OnceCell;

use agentboard::config::{UserConfig, expand_home, load_user_config};
use agentboard::loader::{LoaderSettings, load_config_file, lookup_players};
use agentboard::model::AgentDocument;
use agentboard::parser::{AgentParser, AgentYamlParser};
use agentboard::registry;
use agentboard::view::{ConfigView, render_html, render_text};

env_flags! {
    /// Tracing filter, e.g. "info", "debug", or targets format.
    RUST_LOG: &str = "warn";
    /// Preferred filter env (alias). If set, overrides RUST_LOG.
    TRACING_FILTER: &str = "";
    /// Pretty formatting for logs (ignored if TRACING_JSON=true).
    TRACING_PRETTY: bool = false;
    /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
    TRACING_COMPACT: bool = true;
    /// JSON formatting for logs
    TRACING_JSON: bool = false;
    /// If true, also log to file under <AGENTBOARD_HOME>/logs or LOG_DIR
    LOG_TO_FILE: bool = false;
    /// Optional explicit log directory (absolute). Defaults to <AGENTBOARD_HOME>/logs
    LOG_DIR: &str = "";
    /// Agentboard home directory (absolute). Defaults to $HOME/.agentboard
    AGENTBOARD_HOME: &str = "";
    /// Directory holding per-player config documents.
    PROMPT_COLLECTION_DIR: &str = "data/prompt_collection";
    /// Optional TOML file with player → config file entries.
    PLAYER_REGISTRY: &str = "";
    /// Which agent of a multi-agent document to show (0 = first).
    AGENT_INDEX: usize = 0;
    /// Output format: text, json, or html.
    OUTPUT_FORMAT: &str = "text";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => Err(anyhow::anyhow!(
                "unknown output format '{}' (expected text, json, or html)",
                other
            )),
        }
    }
}

enum Target {
    File(PathBuf),
    Player(String),
}

fn env_set(k: &str) -> bool {
    std::env::var_os(k).is_some()
}

fn agentboard_home() -> PathBuf {
    if !(*AGENTBOARD_HOME).is_empty() {
        PathBuf::from((*AGENTBOARD_HOME).to_string())
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".agentboard")
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".agentboard")
    }
}

fn init_tracing(home: &Path, user_cfg: Option<&UserConfig>) {
    use tracing_subscriber::{EnvFilter, Layer, Registry, prelude::*};

    let mut filter_spec = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let mut tracing_json = *TRACING_JSON;
    let mut tracing_compact = *TRACING_COMPACT;
    let mut tracing_pretty = *TRACING_PRETTY;
    let mut log_to_file = *LOG_TO_FILE;
    let mut log_dir: Option<PathBuf> = if !(*LOG_DIR).is_empty() {
        Some(PathBuf::from((*LOG_DIR).to_string()))
    } else {
        None
    };

    // Config file values apply only where the environment is silent.
    if let Some(cfg) = user_cfg.and_then(|c| c.logging.as_ref()) {
        if !(env_set("TRACING_FILTER") || env_set("RUST_LOG"))
            && let Some(level) = cfg.level.as_ref()
        {
            filter_spec = level.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            tracing_json = v;
        }
        if !env_set("TRACING_COMPACT")
            && let Some(v) = cfg.compact
        {
            tracing_compact = v;
        }
        if !env_set("TRACING_PRETTY")
            && let Some(v) = cfg.pretty
        {
            tracing_pretty = v;
        }
        if !env_set("LOG_TO_FILE")
            && let Some(v) = cfg.to_file
        {
            log_to_file = v;
        }
        if !env_set("LOG_DIR")
            && let Some(dir) = cfg.dir.as_ref()
        {
            log_dir = Some(expand_home(dir));
        }
    }

    let filter = EnvFilter::try_new(filter_spec).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries rendered views; logs always go to stderr.
    let stderr = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    if tracing_json {
        layers.push(stderr.json().boxed());
    } else if tracing_compact {
        layers.push(stderr.compact().boxed());
    } else if tracing_pretty {
        layers.push(stderr.pretty().boxed());
    } else {
        layers.push(stderr.boxed());
    }

    static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
    let mut dir_error = None;
    if log_to_file {
        let dir = log_dir.unwrap_or_else(|| home.join("logs"));
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "agentboard.log");
                let (nb, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(nb);
                if tracing_json {
                    layers.push(file_layer.json().boxed());
                } else {
                    layers.push(file_layer.compact().boxed());
                }
            }
            Err(e) => dir_error = Some((dir, e)),
        }
    }

    if let Err(e) = tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
    {
        eprintln!("tracing already set: {:?}", e);
    }
    if let Some((dir, e)) = dir_error {
        tracing::warn!("failed to create log dir {}: {}", dir.display(), e);
    }
}

fn loader_settings(user_cfg: Option<&UserConfig>) -> anyhow::Result<LoaderSettings> {
    let collection = user_cfg.and_then(|c| c.collection.as_ref());

    let collection_dir = if env_set("PROMPT_COLLECTION_DIR") {
        expand_home(*PROMPT_COLLECTION_DIR)
    } else {
        collection
            .and_then(|c| c.dir.as_deref())
            .map(expand_home)
            .unwrap_or_else(|| expand_home(*PROMPT_COLLECTION_DIR))
    };

    let registry_file: Option<PathBuf> = if !(*PLAYER_REGISTRY).is_empty() {
        Some(expand_home(*PLAYER_REGISTRY))
    } else {
        collection
            .and_then(|c| c.registry_file.as_deref())
            .map(expand_home)
    };
    let registry = match registry_file {
        Some(path) => {
            let reg = registry::load_from_file(&path)?;
            tracing::info!(
                "loaded player registry from {} (players={})",
                path.display(),
                reg.len()
            );
            reg
        }
        None => registry::load_default(),
    };

    tracing::debug!("prompt collection dir: {}", collection_dir.display());
    Ok(LoaderSettings {
        collection_dir,
        registry,
    })
}

fn classify(arg: String) -> Target {
    let path = Path::new(&arg);
    if AgentYamlParser::supports(path) && path.is_file() {
        Target::File(path.to_path_buf())
    } else {
        Target::Player(arg)
    }
}

fn list_players(settings: &LoaderSettings) {
    for (player, file) in settings.registry.players() {
        let status = if settings.collection_dir.join(file).is_file() {
            "ok"
        } else {
            "missing"
        };
        println!("{}\t{}\t{}", player, file, status);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let home = agentboard_home();
    let user_cfg = match load_user_config(&home) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ignoring unreadable {}/config.toml: {}", home.display(), e);
            None
        }
    };
    init_tracing(&home, user_cfg.as_ref());

    let collection = user_cfg.as_ref().and_then(|c| c.collection.as_ref());
    let format = if env_set("OUTPUT_FORMAT") {
        OutputFormat::parse(*OUTPUT_FORMAT)?
    } else {
        match collection.and_then(|c| c.format.as_deref()) {
            Some(f) => OutputFormat::parse(f)?,
            None => OutputFormat::parse(*OUTPUT_FORMAT)?,
        }
    };
    let agent_index = if env_set("AGENT_INDEX") {
        *AGENT_INDEX
    } else {
        collection
            .and_then(|c| c.agent_index)
            .unwrap_or(*AGENT_INDEX)
    };

    let settings = Arc::new(
        loader_settings(user_cfg.as_ref()).context("failed to configure config loader")?,
    );

    let targets: Vec<Target> = std::env::args().skip(1).map(classify).collect();
    if targets.is_empty() {
        list_players(&settings);
        return Ok(());
    }

    let players: Vec<String> = targets
        .iter()
        .filter_map(|t| match t {
            Target::Player(p) => Some(p.clone()),
            Target::File(_) => None,
        })
        .collect();
    let mut player_docs = lookup_players(Arc::clone(&settings), players)
        .await
        .into_iter();

    let mut views: Vec<ConfigView> = Vec::with_capacity(targets.len());
    for target in targets {
        let (title, doc): (String, Option<AgentDocument>) = match target {
            Target::File(path) => {
                let doc = match load_config_file(&path).await {
                    Ok(doc) => Some(doc),
                    Err(e) => {
                        tracing::error!("{}", e);
                        None
                    }
                };
                (path.display().to_string(), doc)
            }
            Target::Player(_) => player_docs
                .next()
                .ok_or_else(|| anyhow::anyhow!("player lookup results out of sync"))?,
        };
        views.push(ConfigView::build(&title, doc.as_ref(), agent_index));
    }
    tracing::info!("rendering {} view(s) as {:?}", views.len(), format);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Text => {
            let out: Vec<String> = views.iter().map(render_text).collect();
            print!("{}", out.join("\n"));
        }
        OutputFormat::Html => {
            for view in &views {
                print!("{}", render_html(view));
            }
        }
    }
    Ok(())
}
