use std::fmt;

use thiserror::Error;
use url::Url;

/// Environment variable consulted when `--api-base` is not given.
pub const API_BASE_ENV: &str = "CALCTERM_API_BASE";

const CALCULATE_PATH: &str = "calculate";

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error(
        "API base URL is not configured (pass --api-base, set CALCTERM_API_BASE, or set api.base_url in the config file)"
    )]
    Missing,

    #[error("Invalid API base URL {value:?}: {source}")]
    Malformed {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported scheme {scheme:?} in API base URL (expected http or https)")]
    UnsupportedScheme { scheme: String },
}

/// Where the base URL was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Flag,
    Env,
    File,
}

/// Validated backend location.
///
/// The base always ends with `/` so a path prefix such as `/api` survives
/// joining the `calculate` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: Url,
    calculate: Url,
}

impl ApiEndpoint {
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Missing);
        }

        let malformed = |source| EndpointError::Malformed {
            value: trimmed.to_string(),
            source,
        };

        let mut base = Url::parse(trimmed).map_err(malformed)?;
        match base.scheme() {
            "http" | "https" => {}
            other => {
                return Err(EndpointError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }

        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let calculate = base.join(CALCULATE_PATH).map_err(malformed)?;

        Ok(Self { base, calculate })
    }

    pub fn calculate_url(&self) -> &Url {
        &self.calculate
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str().trim_end_matches('/'))
    }
}

/// Pick the base URL from flag, environment, then config file, in that order.
/// Blank values count as unset.
pub fn resolve_endpoint(
    flag: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> Result<(ApiEndpoint, EndpointSource), EndpointError> {
    let candidates = [
        (flag, EndpointSource::Flag),
        (env, EndpointSource::Env),
        (file, EndpointSource::File),
    ];

    let (raw, source) = candidates
        .into_iter()
        .find_map(|(value, source)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| (v, source))
        })
        .ok_or(EndpointError::Missing)?;

    Ok((ApiEndpoint::parse(raw)?, source))
}

pub fn endpoint_from_env() -> Option<String> {
    std::env::var(API_BASE_ENV).ok()
}
