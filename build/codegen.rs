use serde::Deserialize;

pub const DEFAULT_SL_HOST: &str = "transport.integration.sl.se";
pub const DEFAULT_WEATHER_HOST: &str = "api.weatherapi.com";

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub weather: RawWeather,
    pub wifi: RawWifi,
    pub sl: RawSl,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawWeather {
    pub api_key: String,
    pub host: String,
}

impl Default for RawWeather {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            host: DEFAULT_WEATHER_HOST.into(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawWifi {
    pub ssid: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSl {
    pub host: String,
}

impl Default for RawSl {
    fn default() -> Self {
        Self {
            host: DEFAULT_SL_HOST.into(),
        }
    }
}

pub fn parse(toml_str: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Rust source for the generated `config.rs`.
pub fn render(raw: &RawConfig) -> String {
    // `{:?}` renders a lossless, escaped Rust string literal
    format!(
        r#"
        pub const WEATHER_API_KEY: &str = {key:?};
        pub const WIFI_SSID: &str = {ssid:?};
        pub const WIFI_PASSWORD: &str = {psk:?};
        pub const SL_HOST: &str = {sl:?};
        pub const WEATHER_HOST: &str = {wh:?};

        pub const CONFIG: Config = Config {{
            weather_api_key: WEATHER_API_KEY,
            wifi_ssid: WIFI_SSID,
            wifi_password: WIFI_PASSWORD,
            sl_host: SL_HOST,
            weather_host: WEATHER_HOST,
        }};
    "#,
        key = raw.weather.api_key,
        ssid = raw.wifi.ssid,
        psk = raw.wifi.password,
        sl = raw.sl.host,
        wh = raw.weather.host,
    )
}
