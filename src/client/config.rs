use crate::client::constant::{DEFAULT_PER_PAGE, DEFAULT_SITE_NAME};

/// Build-time client settings.
///
/// A WebAssembly bundle has no process environment at runtime, so values are read
/// with `option_env!` when the client is compiled.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Origin of the panel API, empty for same-origin deployments.
    pub api_base: String,
    pub site_name: String,
    pub per_page: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PANEL_API_URL"),
            option_env!("PANEL_SITE_NAME"),
            option_env!("PANEL_PER_PAGE"),
        )
    }

    /// Blank or unparsable values keep their defaults.
    pub fn from_values(
        api_base: Option<&str>,
        site_name: Option<&str>,
        per_page: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: non_blank(api_base)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            site_name: non_blank(site_name)
                .map(str::to_string)
                .unwrap_or(defaults.site_name),
            per_page: non_blank(per_page)
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.per_page),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
