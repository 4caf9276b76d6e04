use tokio::io::BufReader;
use tracing::{error, info};

use vfsys::{Config, Namespace, Router, Shell};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let config = match Config::load_with_env(&path).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            if config.validate().is_err() {
                config = Config::default();
            }
            config
        }
    };

    // Initialize logging
    if let Err(e) = vfsys::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        vfsys::logging::init_console_only(&config.logging.level);
    }

    info!(timezone = %config.shell.timezone, "vfsys - in-memory virtual file system");

    let router = Router::new(Namespace::new())
        .with_timezone(config.shell.timezone.as_str())
        .with_datetime_format(config.shell.datetime_format.as_str());
    let mut shell = Shell::new(router).with_prompt(config.shell.prompt.as_str());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = shell.run(stdin, &mut stdout).await {
        error!("Shell terminated: {e}");
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }
}
