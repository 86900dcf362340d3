//! Subcommand handlers for render and config actions.

use std::io::{self, Write};
use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::app;
use crate::config::{self, Config, ConfigError};
use crate::render::Renderer;

/// Print one clock face for `seconds` to `out`, followed by a newline.
pub fn render_once<W: Write>(out: &mut W, seconds: u64, hints: bool) -> io::Result<()> {
    let frame = Renderer::new(hints).render(seconds);
    writeln!(out, "{}", frame.to_string_display())?;
    out.flush()
}

/// Describe the effective configuration and where it came from.
///
/// `config` should already include command-line overrides; see
/// [`app::effective_config`].
pub fn show_config(config: &Config, path: &Path) -> String {
    let mut text = String::from("Effective configuration (config file + command-line flags):\n\n");
    text.push_str(&config.to_toml());
    text.push('\n');
    if path.exists() {
        text.push_str(&format!("Config file: {} (exists)\n", path.display()));
    } else {
        text.push_str(&format!("Config file: {} (not found)\n", path.display()));
    }
    text
}

/// Handle config subcommand actions.
///
/// `args.config` selects the file; without it the default path is used.
/// `show` prints what a session started with the same `args` would use.
pub fn handle_config_action(action: ConfigAction, args: &Args) -> Result<(), ConfigError> {
    let path = args.config.as_deref();
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(path)?;
            print!("{}", show_config(&app::effective_config(args, &config), &config_path));
        }
        ConfigAction::Init => {
            config::write_default(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
