//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal stopwatch with big ASCII-art digits
#[derive(Parser, Debug)]
#[command(name = "ascii-stopwatch")]
#[command(version, about = "Terminal stopwatch with big ASCII-art digits", long_about = None)]
#[command(after_help = "KEYS (while running):
    r        Restart from zero
    p        Pause / resume
    q        Quit (Ctrl+C also quits)")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Start paused (press p to begin counting)
    #[arg(long)]
    pub paused: bool,

    /// Hide the key hint line
    #[arg(long)]
    pub no_hints: bool,

    /// Draw on the main screen instead of the alternate screen
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the clock face for a number of seconds and exit
    Render {
        /// Elapsed seconds to render
        seconds: u64,
        /// Hide the key hint line
        #[arg(long)]
        no_hints: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["ascii-stopwatch"]);
        assert!(!args.paused);
        assert!(!args.no_hints);
        assert!(!args.no_alt_screen);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.log_file.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from(["ascii-stopwatch", "--paused", "--no-hints", "--no-alt-screen"]);
        assert!(args.paused);
        assert!(args.no_hints);
        assert!(args.no_alt_screen);
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["ascii-stopwatch", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["ascii-stopwatch", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_logging_options() {
        let args = Args::parse_from([
            "ascii-stopwatch",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/sw.log",
        ]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/sw.log")));
    }

    #[test]
    fn test_args_render_subcommand() {
        let args = Args::parse_from(["ascii-stopwatch", "render", "3725"]);
        match args.command {
            Some(Command::Render { seconds, no_hints }) => {
                assert_eq!(seconds, 3725);
                assert!(!no_hints);
            }
            _ => panic!("Expected Render subcommand"),
        }

        let args = Args::parse_from(["ascii-stopwatch", "render", "5", "--no-hints"]);
        assert!(matches!(
            args.command,
            Some(Command::Render {
                seconds: 5,
                no_hints: true
            })
        ));
    }

    #[test]
    fn test_args_render_rejects_negative() {
        assert!(Args::try_parse_from(["ascii-stopwatch", "render", "-5"]).is_err());
        assert!(Args::try_parse_from(["ascii-stopwatch", "render", "abc"]).is_err());
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["ascii-stopwatch", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_subcommand() {
        let args = Args::parse_from(["ascii-stopwatch", "config", "init"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Init,
            }) => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }
}
