//! Configuration loader for Voxbot.
//!
//! Reads an optional `config.toml` and deserializes it into [`VoxbotConfig`].
//! Falls back to defaults when the file is missing or malformed.

use std::path::Path;

use voxbot_types::config::VoxbotConfig;

/// Load configuration from `path`.
///
/// - If no path is given or the file does not exist, returns [`VoxbotConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config; absent keys take their defaults.
pub async fn load_config(path: Option<&Path>) -> VoxbotConfig {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return VoxbotConfig::default();
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return VoxbotConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return VoxbotConfig::default();
        }
    };

    match toml::from_str::<VoxbotConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            VoxbotConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_without_path_returns_default() {
        let config = load_config(None).await;
        assert_eq!(config.completion.max_tokens, 150);
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(Some(&tmp.path().join("config.toml"))).await;
        assert_eq!(config.speech.voice_id, "21m00Tcm4TlvDq8ikWAM");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[completion]
model = "gpt-4o-mini"
temperature = 0.2

[speech]
max_audio_bytes = 2048
"#,
        )
        .await
        .unwrap();

        let config = load_config(Some(&config_path)).await;
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert!((config.completion.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.completion.max_tokens, 150);
        assert_eq!(config.speech.max_audio_bytes, 2048);
    }

    #[tokio::test]
    async fn load_config_malformed_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "[completion\nmodel = ").await.unwrap();

        let config = load_config(Some(&config_path)).await;
        assert_eq!(config.completion.model, "gpt-3.5-turbo");
    }
}
