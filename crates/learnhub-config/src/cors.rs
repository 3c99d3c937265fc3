use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Origins allowed to call the API from a browser.
///
/// The CORS layer built from this runs with credentials enabled so the
/// session cookie crosses origins, which rules out a wildcard: every origin
/// has to be listed explicitly in `ALLOWED_ORIGINS` (comma separated).
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let origins =
            env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());
        Self::from_list(&origins)
    }

    /// Parses a comma-separated origin list. `*` is dropped, since browsers
    /// reject a wildcard origin on credentialed requests.
    pub fn from_list(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty() && *origin != "*")
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }
}
