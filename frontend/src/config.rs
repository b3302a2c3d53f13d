use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let normalized = value.trim().trim_end_matches('/').to_string();
    API_BASE_URL.get_or_init(|| normalized).clone()
}

/// Joins a root-relative base onto the page origin; absolute bases pass through.
pub fn absolutize(base: &str, origin: &str) -> String {
    if base.starts_with("http://") || base.starts_with("https://") {
        return base.to_string();
    }
    let origin = origin.trim_end_matches('/');
    let path = base.trim_start_matches("./").trim_start_matches('/');
    if path.is_empty() {
        origin.to_string()
    } else {
        format!("{origin}/{path}")
    }
}

/// `data-api-base` holds a path segment such as `labour-api`.
pub fn base_from_data_attribute(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{absolutize, base_from_data_attribute, RuntimeConfig};

    fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub(super) fn from_env_global() -> Option<String> {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &"__LABOUR_DASHBOARD_ENV".into()).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        js_sys::Reflect::get(&env, &"API_BASE_URL".into())
            .ok()
            .and_then(|value| value.as_string())
            .filter(|value| !value.trim().is_empty())
    }

    pub(super) fn from_body_attribute() -> Option<String> {
        let body = web_sys::window()?.document()?.body()?;
        let value = body.get_attribute("data-api-base")?;
        let base = base_from_data_attribute(&value)?;
        Some(absolutize(&base, &origin()?))
    }

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let url = absolutize("./config.json", &origin()?);
        let resp = reqwest::get(url).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let cfg = resp.json::<RuntimeConfig>().await.ok()?;
        let base = cfg.api_base_url?;
        Some(RuntimeConfig {
            api_base_url: Some(absolutize(&base, &origin()?)),
        })
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(url) = browser::from_env_global() {
            return cache_base_url(&url);
        }
        if let Some(url) = browser::from_body_attribute() {
            return cache_base_url(&url);
        }
        if let Some(url) = browser::fetch_runtime_config()
            .await
            .and_then(|cfg| cfg.api_base_url)
        {
            return cache_base_url(&url);
        }
        log::info!("no runtime API base configured, using {DEFAULT_API_BASE_URL}");
    }

    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::debug!("API base resolved to {base}");
}
