#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod cstr;
pub mod host;
pub mod key;

pub use config::{
    Config, CONFIG, SL_HOST, WEATHER_API_KEY, WEATHER_HOST, WIFI_PASSWORD, WIFI_SSID,
};
pub use host::ServiceHost;
pub use key::ConfigKey;
