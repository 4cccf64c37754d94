use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use transit_weather_config::{config, constants, ConfigKey, ServiceHost, CONFIG};

mod first {
    pub use transit_weather_config::config::*;
}

mod second {
    pub use transit_weather_config::config::*;
}

#[test]
fn unmodified_build_yields_shipped_values() {
    assert_eq!(CONFIG.sl_host, "transport.integration.sl.se");
    assert_eq!(CONFIG.weather_host, "api.weatherapi.com");
    assert_eq!(CONFIG.weather_api_key, "");
    assert_eq!(CONFIG.wifi_ssid, "");
    assert_eq!(CONFIG.wifi_password, "");
}

#[test]
fn repeated_imports_refer_to_same_values() {
    assert_eq!(first::CONFIG, second::CONFIG);
    assert_eq!(first::SL_HOST, config::SL_HOST);
    assert_eq!(second::WEATHER_HOST, transit_weather_config::WEATHER_HOST);
}

#[test]
fn lookup_agrees_with_struct() {
    let by_key: Vec<_> = ConfigKey::iter().map(ConfigKey::value).collect();

    assert_eq!(
        by_key,
        [
            CONFIG.weather_api_key,
            CONFIG.wifi_ssid,
            CONFIG.wifi_password,
            CONFIG.sl_host,
            CONFIG.weather_host,
        ]
    );
}

#[test]
fn service_base_urls() {
    assert_eq!(
        ServiceHost::Sl.base_url("https").unwrap().as_str(),
        "https://transport.integration.sl.se"
    );
    assert_eq!(
        ServiceHost::Weather.base_url("https").unwrap().as_str(),
        "https://api.weatherapi.com"
    );
}

#[test]
fn log_summary_does_not_panic_without_logger() {
    CONFIG.log_summary();
}

#[test]
fn version_tracks_package() {
    assert_eq!(constants::VERSION, env!("CARGO_PKG_VERSION"));
}
