use std::env;
use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3001;
// 24 小时
pub const DEFAULT_REMINDER_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub reminder_interval_secs: u64,
}

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            reminder_interval_secs: DEFAULT_REMINDER_INTERVAL_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    /// 从任意键值来源构建配置，未设置的键使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let read = |key: &'static str| match lookup(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        };

        let server_host = read("SERVER_HOST")?.unwrap_or_else(|| DEFAULT_SERVER_HOST.into());
        let server_port = match read("SERVER_PORT")? {
            Some(value) => parse_var("SERVER_PORT", value)?,
            None => DEFAULT_SERVER_PORT,
        };
        let reminder_interval_secs = match read("REMINDER_INTERVAL_SECS")? {
            Some(value) => parse_var("REMINDER_INTERVAL_SECS", value)?,
            None => DEFAULT_REMINDER_INTERVAL_SECS,
        };
        if reminder_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REMINDER_INTERVAL_SECS",
                value: "0".into(),
            });
        }

        Ok(Config {
            server_host,
            server_port,
            reminder_interval_secs,
        })
    }

    pub fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: &[(&'static str, &'static str)],
    ) -> impl Fn(&'static str) -> Result<String, env::VarError> {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        move |key| {
            vars.get(key)
                .map(|v| v.to_string())
                .ok_or(env::VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.reminder_interval(), Duration::from_secs(86_400));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("REMINDER_INTERVAL_SECS", " 60 "),
        ]))
        .unwrap();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.reminder_interval(), Duration::from_secs(60));
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = Config::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SERVER_PORT", .. }));

        let err = Config::from_lookup(lookup(&[("REMINDER_INTERVAL_SECS", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for REMINDER_INTERVAL_SECS: \"0\"");
    }

    #[test]
    fn reports_non_unicode_key() {
        let err = Config::from_lookup(|key| match key {
            "SERVER_HOST" => Err(env::VarError::NotUnicode("host".into())),
            _ => Err(env::VarError::NotPresent),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::NotUnicode("SERVER_HOST")));
        assert_eq!(err.to_string(), "SERVER_HOST is not valid unicode");
    }
}
