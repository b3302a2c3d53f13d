pub mod api;
mod components;
pub mod config;
pub mod pages;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Starts the dashboard client: resolves the API base, mounts the summary
/// modal and binds it to the page's labour links.
pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }
        log::info!("starting labour dashboard frontend");

        leptos::spawn_local(async move {
            config::init().await;
            mount();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("labour-dashboard-frontend runs in the browser; build it for wasm32-unknown-unknown");
}

#[cfg(target_arch = "wasm32")]
fn mount() {
    use leptos::*;
    use pages::labour_summary::{bindings::bind_labour_links, LabourSummaryModal, LabourSummaryViewModel};

    let vm = LabourSummaryViewModel::new(api::ApiClient::new());
    mount_to_body(move || view! { <LabourSummaryModal vm=vm /> });
    if bind_labour_links(vm) == 0 {
        log::info!("no labour links found on this page");
    }
}
