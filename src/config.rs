use core::fmt;

use strum::IntoEnumIterator;

use crate::constants::REDACTED;
use crate::key::ConfigKey;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // API key for the weather service
    pub weather_api_key: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_password: &'static str,

    // Transit service hostname, no scheme or path
    pub sl_host: &'static str,

    // Weather service hostname, no scheme or path
    pub weather_host: &'static str,
}

impl Config {
    /// Value for `key` in this configuration.
    pub const fn get(&self, key: ConfigKey) -> &'static str {
        match key {
            ConfigKey::WeatherApiKey => self.weather_api_key,
            ConfigKey::WifiSsid => self.wifi_ssid,
            ConfigKey::WifiPassword => self.wifi_password,
            ConfigKey::SlHost => self.sl_host,
            ConfigKey::WeatherHost => self.weather_host,
        }
    }

    /// Logs every value at info level, secrets redacted.
    pub fn log_summary(&self) {
        for key in ConfigKey::iter() {
            let value = self.get(key);
            if key.is_secret() {
                log::info!("{}: {:?}", key.name(), redact(value));
            } else {
                log::info!("{}: {:?}", key.name(), value);
            }
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("weather_api_key", &redact(self.weather_api_key))
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &redact(self.wifi_password))
            .field("sl_host", &self.sl_host)
            .field("weather_host", &self.weather_host)
            .finish()
    }
}

// Empty stays empty so an unfilled secret is still recognisable in logs
pub(crate) fn redact(value: &str) -> &str {
    if value.is_empty() {
        value
    } else {
        REDACTED
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
