#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Unit tests for CLI parsing

use crate::cli::{Cli, Commands, InspectFormat};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_generate_defaults() {
    let cli = Cli::try_parse_from(["openapi-docgen", "generate", "Billing API"]).unwrap();
    assert!(!cli.verbose);
    assert!(cli.config.is_none());

    match cli.command {
        Commands::Generate {
            name,
            resources,
            version,
            output,
            unique,
            template,
        } => {
            assert_eq!(name, "Billing API");
            assert_eq!(resources, "");
            assert_eq!(version, "v1");
            assert!(output.is_none());
            assert!(!unique);
            assert!(template.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_with_flags() {
    let cli = Cli::try_parse_from([
        "openapi-docgen",
        "generate",
        "Geo",
        "-r",
        "location/address[9], invoice::billing",
        "-a",
        "v2",
        "-o",
        "out",
        "-u",
        "-t",
        "basic.yaml.j2",
        "--verbose",
    ])
    .unwrap();
    assert!(cli.verbose);

    match cli.command {
        Commands::Generate {
            name,
            resources,
            version,
            output,
            unique,
            template,
        } => {
            assert_eq!(name, "Geo");
            assert_eq!(resources, "location/address[9], invoice::billing");
            assert_eq!(version, "v2");
            assert_eq!(output, Some(PathBuf::from("out")));
            assert!(unique);
            assert_eq!(template.as_deref(), Some("basic.yaml.j2"));
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_global_config_before_subcommand() {
    let cli = Cli::try_parse_from([
        "openapi-docgen",
        "-c",
        "custom.toml",
        "inspect",
        "Geo",
        "--format",
        "yaml",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));

    match cli.command {
        Commands::Inspect { name, format, .. } => {
            assert_eq!(name, "Geo");
            assert_eq!(format, InspectFormat::Yaml);
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn test_inspect_defaults_to_json() {
    let cli = Cli::try_parse_from(["openapi-docgen", "inspect", "Geo", "-r", "location"]).unwrap();
    match cli.command {
        Commands::Inspect { format, resources, .. } => {
            assert_eq!(format, InspectFormat::Json);
            assert_eq!(resources, "location");
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn test_setup_defaults() {
    let cli = Cli::try_parse_from(["openapi-docgen", "setup"]).unwrap();
    match cli.command {
        Commands::Setup { path, force } => {
            assert_eq!(path, PathBuf::from("docgen.toml"));
            assert!(!force);
        }
        _ => panic!("Expected Setup command"),
    }
}

#[test]
fn test_generate_requires_name() {
    assert!(Cli::try_parse_from(["openapi-docgen", "generate"]).is_err());
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["openapi-docgen", "inspect", "Geo", "--format", "xml"]).is_err());
}
