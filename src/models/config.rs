use serde::Deserialize;

/// Settings loaded from `config/*.yaml` and `APP_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Cookie signing key material, at least 64 bytes.
    pub secret: String,
    pub templates_dir: String,
    /// Where signed-out users are sent.
    pub auth_service_url: String,
    /// Cookie domain.
    pub domain: String,
}
