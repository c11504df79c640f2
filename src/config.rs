use crate::catalog::CatalogConfig;

#[derive(Clone)]
pub struct Config {
    pub catalog: Option<CatalogConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            catalog: CatalogConfig::from_env(),
        }
    }
}
