//! Server configuration.

use axum::http::HeaderValue;
use thiserror::Error;

/// Default port, shared with the client's default URL
pub const DEFAULT_PORT: u16 = 3001;
/// Default origin allowed to open cross-origin connections
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid allowed origin '{0}'")]
    InvalidOrigin(String),
}

/// Listen address and cross-origin policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse the allowed origin into a header value
    pub fn allowed_origin_header(&self) -> Result<HeaderValue, ConfigError> {
        let origin = self.allowed_origin.trim_end_matches('/');
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::InvalidOrigin(self.allowed_origin.clone()));
        }
        HeaderValue::from_str(origin)
            .map_err(|_| ConfigError::InvalidOrigin(self.allowed_origin.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // テスト項目: デフォルト設定はポート 3001、許可 Origin は http://localhost:3000
        // given (前提条件):

        // when (操作):
        let config = ServerConfig::default();

        // then (期待する結果):
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(
            config.allowed_origin_header().unwrap(),
            HeaderValue::from_static("http://localhost:3000")
        );
    }

    #[test]
    fn test_allowed_origin_trailing_slash_is_removed() {
        // テスト項目: 末尾のスラッシュは Origin ヘッダーの形式に合わせて除去される
        // given (前提条件):
        let config = ServerConfig {
            allowed_origin: "https://chat.example.com/".to_string(),
            ..ServerConfig::default()
        };

        // when (操作):
        let result = config.allowed_origin_header();

        // then (期待する結果):
        assert_eq!(
            result.unwrap(),
            HeaderValue::from_static("https://chat.example.com")
        );
    }

    #[test]
    fn test_allowed_origin_without_scheme_is_rejected() {
        // テスト項目: スキームの無い Origin は設定エラーになる
        // given (前提条件):
        let config = ServerConfig {
            allowed_origin: "localhost:3000".to_string(),
            ..ServerConfig::default()
        };

        // when (操作):
        let result = config.allowed_origin_header();

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::InvalidOrigin(_))));
    }

    #[test]
    fn test_allowed_origin_with_invalid_characters_is_rejected() {
        // テスト項目: ヘッダーに使えない文字を含む Origin は設定エラーになる
        // given (前提条件):
        let config = ServerConfig {
            allowed_origin: "http://local\nhost".to_string(),
            ..ServerConfig::default()
        };

        // when (操作):
        let result = config.allowed_origin_header();

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::InvalidOrigin(_))));
    }
}
