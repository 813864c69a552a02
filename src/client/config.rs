/// Base URL of the admin REST backend, baked in at build time.
///
/// Read once at startup: when set and non-empty the app talks to the real
/// backend, otherwise it falls back to the in-memory mock data source.
const API_BASE_URL: Option<&str> = option_env!("ADMIN_API_BASE_URL");

/// The configured backend base URL, if any.
pub fn api_base_url() -> Option<&'static str> {
    normalize(API_BASE_URL)
}

fn normalize(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::normalize;

    /// Tests that unset and blank values select the mock data source.
    #[test]
    fn blank_base_url_is_treated_as_unset() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   ")), None);
    }

    /// Tests that a configured URL is passed through trimmed.
    #[test]
    fn configured_base_url_is_trimmed() {
        assert_eq!(
            normalize(Some(" https://api.rently.example ")),
            Some("https://api.rently.example")
        );
    }
}
