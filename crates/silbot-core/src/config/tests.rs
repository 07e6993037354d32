use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.bot.api_url, "https://api.telegram.org");
    assert_eq!(config.bot.request_timeout_secs, 10);
    assert_eq!(config.polling.timeout_secs, 0);
    assert_eq!(config.polling.max_concurrency, 64);
    assert_eq!(config.polling.backoff_initial_ms, 1_000);
    assert_eq!(config.polling.backoff_max_ms, 60_000);
    assert_eq!(config.logging.level, "info");
    assert!(config.bot.parse_mode.is_none());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let toml_str = r#"
        [bot]
        token = "123:abc"
        parse_mode = "HTML"
        disable_notification = true

        [polling]
        timeout_secs = 30
        allowed_updates = ["message", "callback_query"]
    "#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.bot.token, "123:abc");
    assert_eq!(config.bot.parse_mode, Some(ParseMode::Html));
    assert_eq!(config.bot.disable_notification, Some(true));
    assert_eq!(config.bot.request_timeout_secs, 10);
    assert_eq!(config.polling.timeout_secs, 30);
    assert_eq!(config.polling.allowed_updates.as_ref().unwrap().len(), 2);
    assert_eq!(config.polling.max_concurrency, 64);
    assert_eq!(config.storage.db_path, "~/.silbot/silbot.db");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let config = load("/definitely/not/here/silbot.toml").unwrap();
    assert_eq!(config.bot.api_url, "https://api.telegram.org");
    assert!(!config.storage.db_path.starts_with('~') || std::env::var_os("HOME").is_none());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[bot]\napi_url = \"http://127.0.0.1:8081\"\n[storage]\ndb_path = \"/tmp/x.db\""
    )
    .unwrap();
    let config = load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.bot.api_url, "http://127.0.0.1:8081");
    assert_eq!(config.storage.db_path, "/tmp/x.db");
}

#[test]
fn test_load_rejects_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[bot\ntoken = ").unwrap();
    let err = load(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, SilbotError::Config(ref msg) if msg.contains("failed to parse")));
}

#[test]
fn test_resolve_token_override() {
    let config = Config::default().resolve(Some("999:env".into()));
    assert_eq!(config.bot.token, "999:env");

    let mut config = Config::default();
    config.bot.token = "111:file".into();
    assert_eq!(config.resolve(None).bot.token, "111:file");
}

#[test]
fn test_validate() {
    let mut config = Config::default();
    assert!(config.validate().is_err());
    config.bot.token = "1:a".into();
    assert!(config.validate().is_ok());
    config.polling.limit = Some(0);
    assert!(config.validate().is_err());
    config.polling.limit = Some(100);
    config.polling.max_concurrency = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_shellexpand() {
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
    if let Some(home) = std::env::var_os("HOME") {
        assert_eq!(
            shellexpand("~/x.db"),
            format!("{}/x.db", home.to_string_lossy())
        );
    }
}
