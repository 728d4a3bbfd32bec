use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foodchat_core::{
    domain::common::{DatabaseConfig, FoodChatConfig, LLMConfig},
    infrastructure::llm::openai_client::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodchat-api", version, about = "Favorite foods chatbot")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Generate synthetic conversations and write them to a results file
    Simulate(SimulateArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "foodchat")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "foodchat",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "foodchat")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = DEFAULT_OPENAI_MODEL)]
    pub model: String,

    #[arg(long = "openai-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SimulateArgs {
    #[arg(long, default_value_t = 100)]
    pub iterations: u32,

    /// Pause between two iterations, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    #[arg(long, default_value = "conversation_results.txt")]
    pub output: PathBuf,

    /// Fixes the food suggestions for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<Args> for FoodChatConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                openai_api_key: args.llm.api_key,
                openai_model: args.llm.model,
                openai_base_url: args.llm.base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulate_command() {
        let args = Args::try_parse_from([
            "foodchat-api",
            "--openai-api-key",
            "sk-test",
            "simulate",
            "--iterations",
            "5",
            "--delay-ms",
            "0",
            "--seed",
            "9",
        ])
        .unwrap();

        match args.command {
            Some(Command::Simulate(simulate)) => {
                assert_eq!(simulate.iterations, 5);
                assert_eq!(simulate.delay_ms, 0);
                assert_eq!(simulate.seed, Some(9));
                assert_eq!(simulate.output, PathBuf::from("conversation_results.txt"));
            }
            other => panic!("expected simulate command, got {other:?}"),
        }
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from([
            "foodchat-api",
            "--openai-api-key",
            "sk-test",
            "--openai-model",
            "gpt-4o-mini",
            "--database-name",
            "chat",
        ])
        .unwrap();
        assert!(args.command.is_none());

        let config = FoodChatConfig::from(args);
        assert_eq!(config.llm.openai_api_key, "sk-test");
        assert_eq!(config.llm.openai_model, "gpt-4o-mini");
        assert_eq!(config.database.name, "chat");
    }
}
