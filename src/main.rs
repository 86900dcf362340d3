use ascii_stopwatch::app::{self, Settings};
use ascii_stopwatch::cli::{self, Args, Command};
use ascii_stopwatch::config::Config;
use ascii_stopwatch::error::AppError;
use ascii_stopwatch::logging;
use clap::Parser;

fn main() {
    let args = Args::parse();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}

fn run(args: Args) -> Result<i32, AppError> {
    match args.command {
        Some(Command::Render { seconds, no_hints }) => {
            let mut stdout = std::io::stdout().lock();
            cli::render_once(&mut stdout, seconds, !no_hints).map_err(AppError::Terminal)?;
            Ok(0)
        }
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone(), &args)?;
            Ok(0)
        }
        None => {
            // If --config is specified, require the file to exist.
            // Otherwise, fall back to defaults if the default file is missing.
            let config = Config::load(args.config.as_deref())?;
            let settings = Settings::resolve(&args, &config)?;
            logging::init(settings.log_level, settings.log_file.as_deref())?;
            log::debug!("settings: {:?}", settings);

            let exit = app::run(&settings)?;
            Ok(exit.code())
        }
    }
}
