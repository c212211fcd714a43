//! dit - project scaffolding and manifest management
//!
//! Maintains a JSON project manifest (Project -> Package -> Module -> File)
//! and mirrors additions with on-disk skeletons.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dit::commands::{self, OutputFormat};
use dit::config;
use dit::store::ManifestStore;

#[derive(Parser)]
#[command(name = "dit")]
#[command(version, about = "Project scaffolding and manifest management")]
struct Cli {
    /// Path to the manifest document (defaults to the configured manifest
    /// file name in the working directory)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project manifest in the current directory
    Init {
        /// Project name
        name: String,

        /// Project description
        #[arg(short, long)]
        description: Option<String>,

        /// Project version
        #[arg(short, long)]
        version: Option<String>,
    },

    /// Create a project in a new directory
    New {
        /// Project name (also the directory name)
        name: String,

        /// Project description
        #[arg(short, long)]
        description: Option<String>,

        /// Project version
        #[arg(short, long)]
        version: Option<String>,
    },

    /// Add an entity to the manifest (and scaffold it on disk)
    Add {
        #[command(subcommand)]
        entity: AddCommands,
    },

    /// Print the manifest
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run lint checks over the manifest
    Check {
        /// Fail on warnings
        #[arg(long)]
        strict: bool,
    },

    /// Synchronize project dependencies
    Sync,

    /// Build the project
    Build,

    /// Publish the project
    Publish,
}

#[derive(Subcommand)]
enum AddCommands {
    /// Add a package to the project
    Package {
        /// Package name
        name: String,

        /// Package description
        #[arg(short, long)]
        description: Option<String>,

        /// Package version
        #[arg(short, long)]
        version: Option<String>,
    },

    /// Add a module to a package
    Module {
        /// Module name
        name: String,

        /// Owning package
        #[arg(short, long)]
        package: String,

        /// Module description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Add a file entry to a module
    File {
        /// File name
        name: String,

        /// Owning module (first match across packages)
        #[arg(short, long)]
        module: String,

        /// File content
        #[arg(short, long)]
        content: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = config::load_config()?;
    let store = match &cli.manifest {
        Some(path) => ManifestStore::new(path),
        None => ManifestStore::new(&config.manifest_file),
    };

    match cli.command {
        Commands::Init {
            name,
            description,
            version,
        } => {
            commands::init(
                &store,
                &name,
                description.as_deref().unwrap_or(&config.project_description),
                version.as_deref().unwrap_or(&config.default_version),
            )?;
        }
        Commands::New {
            name,
            description,
            version,
        } => {
            commands::new_project(
                &config,
                &name,
                description.as_deref().unwrap_or(&config.project_description),
                version.as_deref().unwrap_or(&config.default_version),
            )?;
        }
        Commands::Add { entity } => match entity {
            AddCommands::Package {
                name,
                description,
                version,
            } => {
                commands::add_package(
                    &store,
                    &name,
                    description.as_deref().unwrap_or(&config.package_description),
                    version.as_deref().unwrap_or(&config.default_version),
                )?;
            }
            AddCommands::Module {
                name,
                package,
                description,
            } => {
                commands::add_module(
                    &store,
                    &package,
                    &name,
                    description.as_deref().unwrap_or(&config.module_description),
                )?;
            }
            AddCommands::File {
                name,
                module,
                content,
            } => {
                commands::add_file(
                    &store,
                    &module,
                    &name,
                    content.as_deref().unwrap_or(&config.file_content),
                )?;
            }
        },
        Commands::Show { json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Summary
            };
            commands::show(&store, format)?;
        }
        Commands::Check { strict } => {
            commands::check(&store, strict)?;
        }
        Commands::Sync => {
            commands::sync()?;
        }
        Commands::Build => {
            commands::build()?;
        }
        Commands::Publish => {
            commands::publish()?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
