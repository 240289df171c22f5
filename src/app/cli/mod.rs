//! CLI Adapter.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};

use crate::app::api;
use crate::domain::{AppError, HostConfig, InstanceId};

#[derive(Parser, Debug)]
#[command(name = "octoctl")]
#[command(version)]
#[command(about = "Provision, remove, and list numbered OctoPrint instances", long_about = None)]
#[command(group(
    ArgGroup::new("mode").required(true).args(["create", "delete", "list", "verbose"])
))]
struct Cli {
    /// Create the given instances, replacing any existing ones
    #[arg(short = 'i', value_name = "ID", num_args = 1..)]
    create: Option<Vec<InstanceId>>,
    /// Delete the given instances
    #[arg(short = 'd', value_name = "ID", num_args = 1..)]
    delete: Option<Vec<InstanceId>>,
    /// List instance install directories
    #[arg(short = 'l')]
    list: bool,
    /// Print usage and exit with status 1
    #[arg(short = 'v')]
    verbose: bool,
    /// Host configuration file (defaults to ./octoctl.toml, then built-in defaults)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Identifiers trailing `-l`; accepted and ignored.
    #[arg(hide = true, requires = "list")]
    ignored: Vec<String>,
}

/// The mutually exclusive primary modes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Create(Vec<InstanceId>),
    Delete(Vec<InstanceId>),
    List,
    Usage,
}

impl Cli {
    fn mode(&self) -> Mode {
        if let Some(ids) = &self.create {
            Mode::Create(ids.clone())
        } else if let Some(ids) = &self.delete {
            Mode::Delete(ids.clone())
        } else if self.list {
            if !self.ignored.is_empty() {
                log::debug!("ignoring identifiers in list mode: {}", self.ignored.join(" "));
            }
            Mode::List
        } else {
            Mode::Usage
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let mode = cli.mode();
    if mode == Mode::Usage {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }

    let result = api::load_config(cli.config.as_deref()).and_then(|config| dispatch(&config, mode));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(config: &HostConfig, mode: Mode) -> Result<(), AppError> {
    match mode {
        Mode::Create(ids) => run_create(config, &ids),
        Mode::Delete(ids) => run_delete(config, &ids),
        Mode::List => run_list(config),
        Mode::Usage => Ok(()),
    }
}

fn run_create(config: &HostConfig, ids: &[InstanceId]) -> Result<(), AppError> {
    // One identifier at a time so earlier successes are reported before a later failure.
    for id in ids {
        for outcome in api::create_instances(config, std::slice::from_ref(id))? {
            let instance = &outcome.instance;
            if outcome.replaced {
                println!("ℹ️ Replaced existing instance {}", instance.id);
            }
            println!(
                "✅ Created instance {} at {} (port {})",
                instance.id,
                instance.install_dir.display(),
                instance.port
            );
        }
    }
    Ok(())
}

fn run_delete(config: &HostConfig, ids: &[InstanceId]) -> Result<(), AppError> {
    for id in ids {
        for outcome in api::delete_instances(config, std::slice::from_ref(id))? {
            if !outcome.was_present() {
                println!("ℹ️ Instance {} not found", outcome.id);
                continue;
            }
            for path in &outcome.removed {
                println!("🗑️ Removed {}", path.display());
            }
            println!("✅ Deleted instance {}", outcome.id);
        }
    }
    Ok(())
}

fn run_list(config: &HostConfig) -> Result<(), AppError> {
    for instance in api::list_instances(config)? {
        println!("{}", instance.install_dir.display());
    }
    Ok(())
}
