use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use file_picker_tui::config::{AppConfig, GeneralConfig, LayoutConfig, LoggingConfig, ThemeConfig};
use file_picker_tui::error::{self, AppError};
use file_picker_tui::tui::{install_panic_hook, Tui};
use file_picker_tui::{logging, run_dialog, CrosstermEvents, DialogConfig};

/// Pick a file in a terminal dialog and print its path.
#[derive(Parser, Debug)]
#[command(name = "pick", version, about)]
struct Cli {
    /// Directory to start browsing in (defaults to the current directory)
    path: Option<PathBuf>,

    /// Explicit config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color scheme: dark, light, classic, custom
    #[arg(long)]
    theme: Option<String>,

    /// Terminal rows per entry (3 or more draws bordered cells)
    #[arg(long)]
    row_height: Option<u16>,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Partial config built from the flags that were given.
    fn overrides(&self) -> error::Result<AppConfig> {
        let start_path = match &self.path {
            Some(path) => Some(path.canonicalize().map_err(|_| {
                AppError::InvalidPath(format!("{} does not exist", path.display()))
            })?),
            None => None,
        };
        if let Some(path) = &start_path {
            if !path.is_dir() {
                return Err(AppError::InvalidPath(format!(
                    "{} is not a directory",
                    path.display()
                )));
            }
        }

        Ok(AppConfig {
            general: GeneralConfig {
                start_path,
                ..Default::default()
            },
            layout: LayoutConfig {
                row_height: self.row_height,
                ..Default::default()
            },
            theme: ThemeConfig {
                scheme: self.theme.clone(),
                custom: None,
            },
            logging: LoggingConfig {
                file: self.log_file.clone(),
                level: None,
            },
        })
    }
}

fn run(cli: &Cli) -> error::Result<Option<PathBuf>> {
    let overrides = cli.overrides()?;
    let config = AppConfig::load(cli.config.as_deref(), Some(&overrides));
    logging::init(&config)?;

    let dialog_config = DialogConfig::from_config(&config);

    install_panic_hook();
    let mut tui = Tui::new()?;
    let outcome = run_dialog(tui.terminal_mut(), &mut CrosstermEvents, &dialog_config);
    tui.restore()?;

    Ok(outcome?.into_selected_path())
}

/// Process exit status: 0 for a picked file, 1 when the user backed out,
/// 2 when the dialog could not run.
fn exit_status(outcome: &error::Result<Option<PathBuf>>) -> u8 {
    match outcome {
        Ok(Some(_)) => 0,
        Ok(None) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = run(&cli);
    match &outcome {
        Ok(Some(path)) => println!("{}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("pick: {}", e),
    }
    ExitCode::from(exit_status(&outcome))
}
