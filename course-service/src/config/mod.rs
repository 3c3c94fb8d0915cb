use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
}

impl CourseConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(CourseConfig {
            common: core_config::Config::load()?,
        })
    }
}
