use figment::{
    Figment,
    providers::{self, Format, Serialized},
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub log_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_owned(),
            log_base: "logs".to_owned(),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    let env = std::env::var("ENV").unwrap_or_else(|_| "default".to_owned());
    // giving defaule path to root of binary
    let config_file_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| format!("./resolver/config/{}.yaml", env));
    // the config file only tunes diagnostics, so a missing file is fine
    Figment::from(Serialized::defaults(Config::default()))
        .merge(providers::Yaml::file(config_file_path))
        .extract()
        .unwrap()
});
