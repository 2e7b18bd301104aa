#[derive(Debug, serde::Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub input_path: String,
    pub output_path: String,
    pub max_shuffle_attempts: usize,
    pub lenient_headers: bool,
    pub logging_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: "parti.csv".into(),
            output_path: "secret_santas.csv".into(),
            max_shuffle_attempts: 100,
            lenient_headers: false,
            logging_config: "warn".into(),
        }
    }
}

pub(crate) fn read_config_file(path: &str) -> Result<Config, anyhow::Error> {
    let config = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str::<Config>(&config)?;
    Ok(config)
}

pub fn read_config() -> Config {
    let config_path = match std::env::var("SECRET_SANTA_CONFIG") {
        Ok(path) => path,
        Err(_) => return Config::default(),
    };

    match read_config_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up from the config
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}
