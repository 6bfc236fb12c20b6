use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{DocgenConfig, CONFIG_FILE_NAME};
use crate::generator::{compile_api, generate_document, write_setup_config, GenerateOptions};
use crate::logging::{init_logging, LogConfig};

/// Command-line interface for openapi-docgen
///
/// Compiles a compact resource description into an OpenAPI document.
#[derive(Parser)]
#[command(name = "openapi-docgen", version)]
#[command(about = "Generate draft OpenAPI documents from a resource DSL", long_about = None)]
pub struct Cli {
    /// Log every step of the DSL interpretation
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Configuration file (default: ./docgen.toml when present)
    #[arg(short, long, global = true, env = "DOCGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an OpenAPI document
    ///
    /// Resources are comma-separated tokens of the form
    /// `[ancestor/...]name[ops]::tag`, e.g. `location/address[9], invoice::billing`.
    Generate {
        /// API name: letters, numbers, spaces or hyphens
        name: String,

        /// Resources to expose
        #[arg(short, long, default_value = "")]
        resources: String,

        /// API version
        #[arg(short = 'a', long = "api-version", default_value = "v1")]
        version: String,

        /// Output directory (default: configured output location)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append a unique suffix to the output file name
        #[arg(short, long, default_value_t = false)]
        unique: bool,

        /// Template name (default: configured default template)
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Print the compiled API model without rendering a template
    Inspect {
        /// API name: letters, numbers, spaces or hyphens
        name: String,

        /// Resources to expose
        #[arg(short, long, default_value = "")]
        resources: String,

        /// API version
        #[arg(short = 'a', long = "api-version", default_value = "v1")]
        version: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = InspectFormat::Json)]
        format: InspectFormat,
    },
    /// Write a draft configuration file with the default settings
    Setup {
        /// Where to write the file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

/// Serialization used by `inspect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Json,
    Yaml,
}

/// Parse the command line and run the selected command.
///
/// # Errors
///
/// Returns the first error raised by logging setup, configuration loading or
/// the command itself.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env();
    let log_config = if cli.verbose {
        log_config.verbose()
    } else {
        log_config
    };
    init_logging(&log_config)?;

    match &cli.command {
        Commands::Setup { path, force } => {
            write_setup_config(path, *force)?;
            Ok(())
        }
        Commands::Generate {
            name,
            resources,
            version,
            output,
            unique,
            template,
        } => {
            let config = DocgenConfig::load(cli.config.as_deref())?;
            let options = GenerateOptions {
                name: name.clone(),
                version: version.clone(),
                resources: resources.clone(),
                template: template.clone(),
                output: output.clone(),
                unique: *unique,
            };
            generate_document(&options, &config)?;
            Ok(())
        }
        Commands::Inspect {
            name,
            resources,
            version,
            format,
        } => {
            let config = DocgenConfig::load(cli.config.as_deref())?;
            let api = compile_api(name, version, resources, &config)?;
            let rendered = match format {
                InspectFormat::Json => serde_json::to_string_pretty(&api)?,
                InspectFormat::Yaml => serde_yaml::to_string(&api)?,
            };
            println!("{}", rendered.trim_end());
            Ok(())
        }
    }
}
