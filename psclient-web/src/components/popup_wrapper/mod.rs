mod focus;

use focus::{keydown_handler, use_popup_focus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Accessible name of the dialog.
    pub label: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub width: Option<u32>,
    /// Semimodal popups dim everything behind them.
    #[prop_or_default]
    pub semimodal: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PopupWrapper)]
pub fn popup_wrapper(props: &Props) -> Html {
    let container_ref = use_node_ref();
    use_popup_focus(container_ref.clone());

    let on_keydown = keydown_handler(container_ref.clone(), props.on_close.clone());
    let style = props
        .width
        .map(|width| format!("max-width:{width}px"))
        .unwrap_or_default();
    let class = classes!("ps-popup", props.semimodal.then_some("ps-semimodal"));

    html! {
        <div class="ps-overlay" role="presentation">
            <div
                {class}
                {style}
                role="dialog"
                aria-modal="true"
                aria-label={props.label.clone()}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn wrapper_applies_width_and_mode() {
        let props = Props {
            label: AttrValue::from("Volume"),
            on_close: Callback::noop(),
            width: Some(280),
            semimodal: true,
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<PopupWrapper>::with_props(props).render());
        assert!(html.contains("max-width:280px"));
        assert!(html.contains("ps-semimodal"));
        assert!(html.contains(r#"aria-label="Volume""#));
    }
}
