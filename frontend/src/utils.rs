use chrono::{DateTime, Utc};
use gloo::utils::window;

/// Get the page origin (e.g., "http://localhost:8080" or "https://myapp.com")
pub fn get_base_url() -> String {
    let location = window().location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8080".to_string());

    format!("{}//{}", protocol, host)
}

/// Read one parameter from the current query string
pub fn query_param(name: &str) -> Option<String> {
    let search = window().location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Current wall-clock time from the browser
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}
