use anyhow::Result;
use clap::Parser;
use resumeforge::cli::{self, Cli, Commands};
use resumeforge::ui::terminal_guard::install_panic_hook;
use resumeforge::{util, App, Config, ResumeDocument};
use std::fs::{self, OpenOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.resumeforge/logs/resumeforge.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let document = match &cli.input {
        Some(path) => cli::load_snapshot(path)?,
        None => ResumeDocument::default(),
    };

    match cli.command {
        Some(Commands::Preview { json }) => {
            print!("{}", cli::preview_output(&document, json)?);
            Ok(())
        }
        Some(Commands::Export) => {
            let path = cli::export_document(&document, &config)?;
            println!("{}", path.display());
            Ok(())
        }
        None => {
            install_panic_hook();
            let mut app = App::with_document(config, document);
            app.run().await
        }
    }
}
