use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::hook;
use yew::prelude::*;

const FOCUSABLE_QUERY: &str =
    "button:not([disabled]), [href], input:not([disabled]), textarea, select, [tabindex]:not([tabindex='-1'])";

fn active_element() -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.active_element())
}

/// Focus the `autofocus` control (or the first focusable one) on mount and
/// hand focus back to the opener on unmount.
#[hook]
pub fn use_popup_focus(container_ref: NodeRef) {
    use_effect_with(container_ref, move |container_ref| {
        let mut opener: Option<HtmlElement> = None;
        let target = if cfg!(target_arch = "wasm32") {
            opener = active_element().and_then(|e| e.dyn_into::<HtmlElement>().ok());
            container_ref.cast::<Element>().and_then(|el| {
                el.query_selector(".autofocus")
                    .ok()
                    .flatten()
                    .or_else(|| el.query_selector(FOCUSABLE_QUERY).ok().flatten())
                    .and_then(|n| n.dyn_into::<HtmlElement>().ok())
            })
        } else {
            None
        };

        if let Some(first) = target {
            let _ = first.focus();
        }
        move || {
            if let Some(el) = opener {
                let _ = el.focus();
            }
        }
    });
}

fn focusable(node: Option<web_sys::Node>) -> Option<HtmlElement> {
    node.and_then(|n| n.dyn_into::<HtmlElement>().ok())
}

/// Move focus to the other end of the popup when Tab would leave it.
///
/// Returns whether focus was moved.
fn wrap_focus(container: &Element, backwards: bool) -> bool {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return false;
    };
    let count = nodes.length();
    let (Some(first), Some(last)) = (
        focusable(nodes.get(0)),
        focusable(count.checked_sub(1).and_then(|i| nodes.get(i))),
    ) else {
        return false;
    };
    let Some(active) = active_element() else {
        return false;
    };
    let escaped = !container.contains(Some(&active));
    let edge: &Element = if backwards { first.as_ref() } else { last.as_ref() };
    let target = match (escaped, active == *edge, backwards) {
        (true, _, _) => &first,
        (false, true, true) => &last,
        (false, true, false) => &first,
        (false, false, _) => return false,
    };
    let _ = target.focus();
    true
}

/// Escape closes; Tab cycles within the popup.
pub fn keydown_handler(container_ref: NodeRef, on_close: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            return;
        }
        match e.key().as_str() {
            "Escape" => on_close.emit(()),
            "Tab" => {
                if let Some(container) = container_ref.cast::<Element>()
                    && wrap_focus(&container, e.shift_key())
                {
                    e.prevent_default();
                }
            }
            _ => {}
        }
    })
}
