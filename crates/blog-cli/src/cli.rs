use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Minimal blog post service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, env = "BLOG_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Database URL (e.g. sqlite:demo.sqlite)
        #[arg(long, env = "DATABASE_URL")]
        database: Option<String>,

        /// Create the posts table before serving if it does not exist
        #[arg(long)]
        init_schema: bool,
    },

    /// Create the posts table if it does not exist
    InitDb {
        /// Database URL (e.g. sqlite:demo.sqlite)
        #[arg(long, env = "DATABASE_URL")]
        database: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "blog",
            "serve",
            "--port",
            "8080",
            "--database",
            "sqlite::memory:",
            "--init-schema",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                host,
                port,
                database,
                init_schema,
            } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
                assert_eq!(database.as_deref(), Some("sqlite::memory:"));
                assert!(init_schema);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::try_parse_from(["blog", "init-db", "--config", "/tmp/blog.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/blog.toml")));
        assert!(matches!(cli.command, Commands::InitDb { .. }));
    }
}
