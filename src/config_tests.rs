use super::*;
use tempfile::TempDir;

fn extra_brand(id: &str, name: &str) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        color: "#123456".to_string(),
        popular_items: vec!["招牌紅茶".to_string()],
        custom_toppings: None,
        custom_sizes: None,
    }
}

#[test]
fn default_config_is_valid_and_writes_a_readable_stub() {
    let config = default_config();
    validate_config(&config).expect("default config valid");
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.json");
    write_config(&path, &config).expect("write stub");
    let stub = fs::read_to_string(&path).expect("read stub");
    assert!(stub.contains("\"schema_version\": 1"));
    assert_eq!(load_config(&path).expect("load stub"), config);
}

#[test]
fn missing_config_file_means_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let config = load_config_or_default(&dir.path().join("config.json")).expect("defaults");
    assert_eq!(config, default_config());
}

#[test]
fn written_config_loads_back() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nested").join("config.json");
    let mut config = default_config();
    config.extra_brands.push(extra_brand("corner", "巷口茶舖"));
    write_config(&path, &config).expect("write");
    assert_eq!(load_config(&path).expect("load"), config);
}

#[test]
fn sparse_config_fills_suggestion_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"schema_version": 1, "suggestions": {"backend": "gemini"}}"#,
    )
    .expect("write");
    let config = load_config(&path).expect("load");
    assert_eq!(config.suggestions.backend, SuggestBackend::Gemini);
    assert_eq!(config.suggestions.model, "gemini-3-flash-preview");
    assert_eq!(config.suggestions.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.suggestions.timeout_secs, 20);
}

#[test]
fn rejects_unknown_schema_version() {
    let mut config = default_config();
    config.schema_version = 2;
    let err = validate_config(&config).expect_err("schema mismatch");
    assert!(err.to_string().contains("schema_version"));
}

#[test]
fn rejects_unknown_fields() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"schema_version": 1, "colour": "red"}"#).expect("write");
    assert!(load_config(&path).is_err());
}

#[test]
fn command_backend_requires_a_command() {
    let mut config = default_config();
    config.suggestions.backend = SuggestBackend::Command;
    assert!(validate_config(&config).is_err());
    config.suggestions.command = Some("   ".to_string());
    assert!(validate_config(&config).is_err());
    config.suggestions.command = Some("llm -m local".to_string());
    validate_config(&config).expect("valid command backend");
}

#[test]
fn rejects_reserved_blank_and_duplicate_brand_ids() {
    let mut config = default_config();
    config.extra_brands = vec![extra_brand(CUSTOM_BRAND_ID, "自訂")];
    assert!(validate_config(&config).is_err());

    config.extra_brands = vec![extra_brand(" ", "空白")];
    assert!(validate_config(&config).is_err());

    config.extra_brands = vec![extra_brand("a", "甲"), extra_brand("a", "乙")];
    assert!(validate_config(&config).is_err());

    config.extra_brands = vec![extra_brand("a", "  ")];
    assert!(validate_config(&config).is_err());
}

#[test]
fn lm_command_override_forces_the_command_backend() {
    let mut config = default_config();
    apply_lm_command(&mut config, "  ");
    assert_eq!(config.suggestions.backend, SuggestBackend::None);

    apply_lm_command(&mut config, "ollama run llama3");
    assert_eq!(config.suggestions.backend, SuggestBackend::Command);
    assert_eq!(
        config.suggestions.command.as_deref(),
        Some("ollama run llama3")
    );
}
