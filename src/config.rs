use crate::error::{Error, Result};
use crate::scoring::CategoryPolicy;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub category_policy: CategoryPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "hirelens.db".to_string());

        let category_policy = match env::var("CATEGORY_POLICY") {
            Ok(value) => match value.to_lowercase().as_str() {
                "last_write_wins" | "last" => CategoryPolicy::LastWriteWins,
                "average" => CategoryPolicy::Average,
                other => {
                    return Err(Error::Config(format!(
                        "CATEGORY_POLICY must be 'last_write_wins' or 'average', got '{}'",
                        other
                    )))
                }
            },
            Err(_) => CategoryPolicy::default(),
        };

        Ok(Self {
            database_path,
            category_policy,
        })
    }
}
