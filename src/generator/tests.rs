#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::model::ModelOptions;
use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("docgen_test_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn api(name: &str, version: &str) -> Api {
    Api::build(name, version, "invoice", &ModelOptions::default()).unwrap()
}

const TEMPLATE: &str = "\
title: {{ name }}
paths:
{% for resource in resources %}
{% if resource.collectionPath %}
  - \"{{ resource.collectionPath }}\"
{% endif %}
{% if resource.resourcePath %}
  - \"{{ resource.resourcePath }}\"
{% endif %}
{% endfor %}
";

fn config_with_templates(templates: &Path, output: &Path) -> DocgenConfig {
    fs::write(templates.join("paths.yaml.j2"), TEMPLATE).unwrap();
    DocgenConfig {
        templates_base_location: templates.display().to_string(),
        default_template: "paths.yaml.j2".to_string(),
        default_output_location: output.to_path_buf(),
        ..DocgenConfig::default()
    }
}

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name(&api("Billing API", "v1"), false), "billing-api-v1.yaml");
    assert_eq!(output_file_name(&api("Shop", "2.0 beta"), false), "shop-2-0-beta.yaml");
}

#[test]
fn test_output_file_name_unique() {
    let api = api("Billing", "v1");
    let first = output_file_name(&api, true);
    let second = output_file_name(&api, true);
    assert!(first.starts_with("billing-v1-"));
    assert!(first.ends_with(".yaml"));
    // "billing-v1-" + 26 ULID characters + ".yaml"
    assert_eq!(first.len(), "billing-v1-".len() + 26 + ".yaml".len());
    assert_eq!(first, first.to_lowercase());
    assert_ne!(first, second);
}

#[test]
fn test_output_file_name_without_name() {
    assert_eq!(output_file_name(&api("", "v1"), false), "openapi-v1.yaml");
}

#[test]
fn test_write_document_creates_directories() {
    let dir = temp_dir().join("nested").join("out");
    let path = write_document(&dir, "doc.yaml", "openapi: 3.0.3\n").unwrap();
    assert_eq!(path, dir.join("doc.yaml"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "openapi: 3.0.3\n");

    // overwrite in place
    write_document(&dir, "doc.yaml", "openapi: 3.1.0\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "openapi: 3.1.0\n");
}

#[test]
fn test_setup_config_renders_defaults() {
    let rendered = SetupConfigTemplate::from(&DocgenConfig::default())
        .render()
        .unwrap();
    assert!(rendered.contains("template_provider = 'FileSystem'"));
    assert!(rendered.contains("default_ops = 235"));
    let parsed: DocgenConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, DocgenConfig::default());
}

#[test]
fn test_write_setup_config_skips_existing() {
    let dir = temp_dir();
    let path = dir.join("docgen.toml");

    assert!(write_setup_config(&path, false).unwrap());
    let loaded = DocgenConfig::from_file(&path).unwrap().unwrap();
    assert_eq!(loaded, DocgenConfig::default());

    fs::write(&path, "default_ops = 9\n").unwrap();
    assert!(!write_setup_config(&path, false).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "default_ops = 9\n");

    assert!(write_setup_config(&path, true).unwrap());
    assert!(fs::read_to_string(&path).unwrap().contains("default_ops = 235"));
}

#[test]
fn test_compile_api_uses_configured_default_ops() {
    let config = DocgenConfig {
        default_ops: 9,
        ..DocgenConfig::default()
    };
    let api = compile_api("Geo", "v1", "location", &config).unwrap();
    assert_eq!(api.resources()[0].ops().bits(), 9);
}

#[test]
fn test_compile_api_rejects_bad_default_ops() {
    let config = DocgenConfig {
        default_ops: 6,
        ..DocgenConfig::default()
    };
    assert!(compile_api("Geo", "v1", "location", &config).is_err());
}

#[test]
fn test_compile_api_reports_token() {
    let err = compile_api("Geo", "v1", "location[300]", &DocgenConfig::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Cannot build API Geo"), "{message}");
    assert!(message.contains("300"), "{message}");
}

#[test]
fn test_generate_document_end_to_end() {
    let templates = temp_dir();
    let output = temp_dir().join("docs");
    let config = config_with_templates(&templates, &output);

    let options = GenerateOptions::new("Geo API", "v2", "location/address");
    let path = generate_document(&options, &config).unwrap();

    assert_eq!(path, output.join("geo-api-v2.yaml"));
    let document = fs::read_to_string(&path).unwrap();
    let yaml: serde_yaml::Value = serde_yaml::from_str(&document).unwrap();
    assert_eq!(yaml["title"], "Geo");
    let paths: Vec<&str> = yaml["paths"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/locations"));
    assert!(paths.contains(&"/locations/{locationId}/addresses"));
    assert!(paths.contains(&"/locations/{locationId}/addresses/{addressId}"));
}

#[test]
fn test_generate_document_flags_override_config() {
    let templates = temp_dir();
    let config = config_with_templates(&templates, &temp_dir());
    fs::write(templates.join("other.yaml.j2"), "api: {{ urlFriendlyName }}\n").unwrap();

    let output = temp_dir();
    let mut options = GenerateOptions::new("Shop", "v1", "order");
    options.template = Some("other.yaml.j2".to_string());
    options.output = Some(output.clone());
    options.unique = true;

    let path = generate_document(&options, &config).unwrap();
    assert_eq!(path.parent().unwrap(), output.as_path());
    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("shop-v1-"), "{file_name}");
    assert_eq!(fs::read_to_string(&path).unwrap(), "api: shop\n");
}

#[test]
fn test_generate_document_missing_template() {
    let templates = temp_dir();
    let config = DocgenConfig {
        templates_base_location: templates.display().to_string(),
        default_template: "absent.yaml.j2".to_string(),
        default_output_location: temp_dir(),
        ..DocgenConfig::default()
    };
    let options = GenerateOptions::new("Shop", "v1", "order");
    let err = generate_document(&options, &config).unwrap_err();
    assert!(format!("{err:#}").contains("absent.yaml.j2"));
}
