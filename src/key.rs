use strum::EnumIter;

use crate::config::{SL_HOST, WEATHER_API_KEY, WEATHER_HOST, WIFI_PASSWORD, WIFI_SSID};
use crate::host::ServiceHost;

/// The fixed set of configuration names.
///
/// An unknown name cannot be expressed, so looking one up is a compile error
/// in the caller rather than a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ConfigKey {
    WeatherApiKey,
    WifiSsid,
    WifiPassword,
    SlHost,
    WeatherHost,
}

impl ConfigKey {
    /// Value baked in at build time, possibly empty.
    pub const fn value(self) -> &'static str {
        match self {
            Self::WeatherApiKey => WEATHER_API_KEY,
            Self::WifiSsid => WIFI_SSID,
            Self::WifiPassword => WIFI_PASSWORD,
            Self::SlHost => SL_HOST,
            Self::WeatherHost => WEATHER_HOST,
        }
    }

    /// Symbolic constant name, e.g. `WEATHER_API_KEY`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WeatherApiKey => "WEATHER_API_KEY",
            Self::WifiSsid => "WIFI_SSID",
            Self::WifiPassword => "WIFI_PASSWORD",
            Self::SlHost => "SL_HOST",
            Self::WeatherHost => "WEATHER_HOST",
        }
    }

    pub const fn is_secret(self) -> bool {
        matches!(self, Self::WeatherApiKey | Self::WifiPassword)
    }
}

impl From<ServiceHost> for ConfigKey {
    fn from(host: ServiceHost) -> Self {
        match host {
            ServiceHost::Sl => Self::SlHost,
            ServiceHost::Weather => Self::WeatherHost,
        }
    }
}
