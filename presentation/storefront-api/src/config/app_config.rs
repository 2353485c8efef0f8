use super::{
    backend_config::BackendConfig, cors_config, error::ConfigError, server_config::ServerConfig,
    storefront_config::StorefrontConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub backend: BackendConfig,
    pub storefront: StorefrontConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            backend: BackendConfig::from_env()?,
            storefront: StorefrontConfig::from_env(),
        })
    }
}
