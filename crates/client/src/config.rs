use log::LevelFilter;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ROWS: u32 = 6;
pub const DEFAULT_COLS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid api url {value:?}: {source}")]
    ApiUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("api url {0:?} cannot take path segments")]
    ApiBase(String),
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base: Url,
    pub default_rows: u32,
    pub default_cols: u32,
    pub log_level: LevelFilter,
}

impl ClientConfig {
    /// Reads the overrides baked in at build time through `CONNECT_FOUR_API`
    /// and `CONNECT_FOUR_LOG`.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("CONNECT_FOUR_API"), option_env!("CONNECT_FOUR_LOG"))
    }

    pub fn from_values(api: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(api) = api.map(str::trim).filter(|api| !api.is_empty()) {
            config.api_base = parse_api_base(api)?;
        }
        if let Some(level) = log_level.map(str::trim).filter(|level| !level.is_empty()) {
            config.log_level = level
                .parse()
                .map_err(|_| ConfigError::LogLevel(level.to_owned()))?;
        }
        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            // Constant input; a failure here is a typo in `DEFAULT_API`.
            api_base: Url::parse(DEFAULT_API).expect("default api url"),
            default_rows: DEFAULT_ROWS,
            default_cols: DEFAULT_COLS,
            log_level: LevelFilter::Info,
        }
    }
}

fn parse_api_base(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::ApiUrl {
        value: value.to_owned(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::ApiBase(value.to_owned()));
    }
    Ok(url)
}
