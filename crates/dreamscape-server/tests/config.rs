use std::collections::HashMap;
use std::time::Duration;

use dreamscape_export::pdf::PageFormat;
use dreamscape_server::config::{ModelConfig, ServerConfig};

fn config(pairs: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_with_only_an_api_key() {
    let cfg = config(&[("OPENAI_API_KEY", "sk-test-1234567890")]).unwrap();

    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.output_dir.to_str(), Some("pdfs"));
    assert_eq!(cfg.templates_dir.to_str(), Some("assets/templates"));
    assert_eq!(cfg.banner_path.to_str(), Some("assets/banner.png"));
    assert_eq!(cfg.page_format, PageFormat::A4);
    match cfg.model {
        ModelConfig::OpenAi {
            model,
            base_url,
            timeout,
            ..
        } => {
            assert_eq!(model, "gpt-4o");
            assert_eq!(base_url, "https://api.openai.com/v1");
            assert_eq!(timeout, Duration::from_secs(120));
        }
        other => panic!("unexpected provider: {other:?}"),
    }
}

#[test]
fn openai_requires_api_key() {
    assert!(config(&[]).is_err());
    assert!(config(&[("OPENAI_API_KEY", "  ")]).is_err());
}

#[test]
fn bedrock_needs_no_api_key() {
    let cfg = config(&[("LLM_PROVIDER", "Bedrock"), ("LLM_MODEL", "us.anthropic.claude-x")]).unwrap();
    match cfg.model {
        ModelConfig::Bedrock { model } => assert_eq!(model, "us.anthropic.claude-x"),
        other => panic!("unexpected provider: {other:?}"),
    }
}

#[test]
fn overrides_are_honoured() {
    let cfg = config(&[
        ("OPENAI_API_KEY", "sk-test-1234567890"),
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("OUTPUT_DIR", "/tmp/out"),
        ("PDF_PAGE_FORMAT", "letter"),
    ])
    .unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.output_dir.to_str(), Some("/tmp/out"));
    assert_eq!(cfg.page_format, PageFormat::Letter);
}

#[test]
fn invalid_values_are_errors() {
    let key = ("OPENAI_API_KEY", "sk-test-1234567890");
    assert!(config(&[key, ("PORT", "http")]).is_err());
    assert!(config(&[key, ("LLM_PROVIDER", "carrier-pigeon")]).is_err());
    assert!(config(&[key, ("PDF_PAGE_FORMAT", "tabloid")]).is_err());
    assert!(config(&[key, ("LLM_TIMEOUT_SECS", "-1")]).is_err());
}

#[test]
fn debug_output_redacts_api_key() {
    let cfg = config(&[("OPENAI_API_KEY", "sk-test-1234567890")]).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("sk-test-1234567890"));
    assert!(debug.contains("sk-...7890"));
}
