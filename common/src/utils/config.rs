use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub surrealdb_address: String,
    pub surrealdb_username: String,
    pub surrealdb_password: String,
    pub surrealdb_namespace: String,
    pub surrealdb_database: String,
    pub http_port: u16,
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,
    /// Characters of extracted text each document may contribute to a tutor prompt.
    #[serde(default = "default_tutor_document_char_limit")]
    pub tutor_document_char_limit: usize,
    /// Key required by the document admin endpoints. Admin routes are closed when unset.
    #[serde(default)]
    pub admin_api_key: Option<String>,
    #[serde(default = "default_request_body_limit_bytes")]
    pub request_body_limit_bytes: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub const DEFAULT_TUTOR_DOCUMENT_CHAR_LIMIT: usize = 8_000;

fn default_tutor_document_char_limit() -> usize {
    DEFAULT_TUTOR_DOCUMENT_CHAR_LIMIT
}

fn default_request_body_limit_bytes() -> usize {
    64 * 1024
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let config = Config::builder()
            .set_override("openai_api_key", "key")
            .and_then(|b| b.set_override("surrealdb_address", "mem://"))
            .and_then(|b| b.set_override("surrealdb_username", "root"))
            .and_then(|b| b.set_override("surrealdb_password", "root"))
            .and_then(|b| b.set_override("surrealdb_namespace", "ns"))
            .and_then(|b| b.set_override("surrealdb_database", "db"))
            .and_then(|b| b.set_override("http_port", 3000))
            .expect("overrides")
            .build()
            .expect("build config");

        let app_config: AppConfig = config.try_deserialize().expect("deserialize");

        assert_eq!(app_config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(
            app_config.tutor_document_char_limit,
            DEFAULT_TUTOR_DOCUMENT_CHAR_LIMIT
        );
        assert!(app_config.admin_api_key.is_none());
        assert_eq!(app_config.request_body_limit_bytes, 65_536);
    }
}
