use serde::Deserialize;
use std::env;

pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn non_empty_env(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub inference: InferenceConfig,
    pub llm: Option<LlmConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `file:<path>`, a bare path, `:memory:`, or a `libsql://` / `https://` remote.
    pub url: String,
    pub auth_token: Option<String>,
    /// Local replica file for a remote url. Ignored for local databases.
    pub local_path: Option<String>,
    pub busy_timeout_ms: u64,
    pub journal_mode: JournalMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
            busy_timeout_ms: 5000,
            journal_mode: JournalMode::Wal,
        }
    }
}

/// SQLite `journal_mode` applied to local and replica databases on open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JournalMode {
    Delete,
    Truncate,
    Persist,
    Memory,
    Wal,
    Off,
}

impl JournalMode {
    pub fn as_pragma(self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Persist => "PERSIST",
            JournalMode::Memory => "MEMORY",
            JournalMode::Wal => "WAL",
            JournalMode::Off => "OFF",
        }
    }
}

impl std::str::FromStr for JournalMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DELETE" => Ok(JournalMode::Delete),
            "TRUNCATE" => Ok(JournalMode::Truncate),
            "PERSIST" => Ok(JournalMode::Persist),
            "MEMORY" => Ok(JournalMode::Memory),
            "WAL" => Ok(JournalMode::Wal),
            "OFF" => Ok(JournalMode::Off),
            other => Err(format!("unknown journal mode '{other}'")),
        }
    }
}

/// Hosted inference endpoints used for question generation and sentiment.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    pub base_url: String,
    /// Bearer token. `None` makes every gateway call fail with a missing credential.
    pub api_token: Option<String>,
    pub question_model: String,
    pub sentiment_model: String,
    pub timeout_secs: u64,
}

/// Chat-completion model used for recipe suggestions
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INFERENCE_BASE_URL.to_string(),
            api_token: None,
            question_model: "iarfmoose/t5-base-question-generator".to_string(),
            sentiment_model: "distilbert-base-uncased-finetuned-sst-2-english".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let inference_defaults = InferenceConfig::default();
        let database_defaults = DatabaseConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("HEARTH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("HEARTH_PORT", 3000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:hearth.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
                busy_timeout_ms: parse_env_or(
                    "DATABASE_BUSY_TIMEOUT_MS",
                    database_defaults.busy_timeout_ms,
                ),
                journal_mode: parse_env_or(
                    "DATABASE_JOURNAL_MODE",
                    database_defaults.journal_mode,
                ),
            },
            inference: InferenceConfig {
                base_url: env::var("HF_BASE_URL").unwrap_or(inference_defaults.base_url),
                api_token: non_empty_env("HF_API_TOKEN"),
                question_model: env::var("HF_QG_MODEL")
                    .unwrap_or(inference_defaults.question_model),
                sentiment_model: env::var("HF_SENTIMENT_MODEL")
                    .unwrap_or(inference_defaults.sentiment_model),
                timeout_secs: parse_env_or("INFERENCE_TIMEOUT", inference_defaults.timeout_secs),
            },
            llm: non_empty_env("OPENAI_API_KEY").map(|api_key| LlmConfig {
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                api_key,
                base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
                timeout_secs: parse_env_or("LLM_TIMEOUT", 60),
            }),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
