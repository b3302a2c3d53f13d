use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, HtmlElement, MouseEvent};

use super::LabourSummaryViewModel;

pub const LABOUR_LINK_SELECTOR: &str = ".labour-link";

/// Opens the summary modal when a server-rendered `.labour-link` is clicked.
/// Returns the number of links bound.
pub fn bind_labour_links(vm: LabourSummaryViewModel) -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available, labour links left unbound");
        return 0;
    };
    let links = match document.query_selector_all(LABOUR_LINK_SELECTOR) {
        Ok(links) => links,
        Err(err) => {
            log::error!("failed to query labour links: {err:?}");
            return 0;
        }
    };

    let mut bound = 0;
    for index in 0..links.length() {
        let Some(link) = links
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let Some(labour_id) = link.dataset().get("labourId") else {
            log::warn!("labour link without data-labour-id skipped");
            continue;
        };

        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            vm.open(labour_id.clone());
        });
        let target: &Element = link.as_ref();
        if target
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            bound += 1;
        }
        // Listeners live as long as the page.
        on_click.forget();
    }
    log::debug!("bound {bound} labour links");
    bound
}
