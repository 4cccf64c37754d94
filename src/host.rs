use core::fmt::Write;

use heapless::String;

use crate::config::{SL_HOST, WEATHER_HOST};
use crate::constants::URL_MAX_LEN;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UrlTooLong,
}

/// External HTTP(S) services the firmware talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceHost {
    Sl,
    Weather,
}

impl ServiceHost {
    pub const fn hostname(self) -> &'static str {
        match self {
            Self::Sl => SL_HOST,
            Self::Weather => WEATHER_HOST,
        }
    }

    /// Joins `scheme` and the bare hostname into `scheme://host`.
    ///
    /// The hostname is used as configured; path and query are left to the caller.
    pub fn base_url(self, scheme: &str) -> Result<String<URL_MAX_LEN>, Error> {
        join_url(scheme, self.hostname())
    }
}

fn join_url(scheme: &str, host: &str) -> Result<String<URL_MAX_LEN>, Error> {
    let mut url = String::new();
    write!(url, "{}://{}", scheme, host).map_err(|_| Error::UrlTooLong)?;
    Ok(url)
}
