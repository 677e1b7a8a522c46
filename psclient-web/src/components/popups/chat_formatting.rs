use super::PopupProps;
use psclient_core::prefs::FormattingToggle;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

fn toggle_label(toggle: FormattingToggle) -> Html {
    match toggle {
        FormattingToggle::Greentext => html! {
            <>{" Suppress "}<span class="greentext">{">greentext"}</span></>
        },
        FormattingToggle::Me => html! {
            <>{" Suppress "}<code>{"/me"}</code>{" "}<em>{"action formatting"}</em></>
        },
        FormattingToggle::Spoiler => html! {
            <>{" Auto-show spoilers: "}<span class="spoiler">{"these things"}</span></>
        },
        FormattingToggle::Links => html! { {" Make [[clickable links]] unclickable"} },
        FormattingToggle::Interstice => html! { {" Don't warn for untrusted links"} },
    }
}

#[function_component(ChatFormattingPopup)]
pub fn chat_formatting_popup(p: &PopupProps) -> Html {
    let formatting = p.ctx.prefs.chat_formatting;
    let toggles = FormattingToggle::ALL.into_iter().map(|toggle| {
        let onchange = {
            let ctx = p.ctx.clone();
            Callback::from(move |e: Event| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    let hide = input.checked();
                    ctx.update_prefs(|prefs| {
                        prefs.chat_formatting.set(toggle, hide);
                        None
                    });
                }
            })
        };
        html! {
            <p>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        name={toggle.input_name()}
                        checked={formatting.get(toggle)}
                        {onchange}
                    />
                    { toggle_label(toggle) }
                </label>
            </p>
        }
    });
    let done = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    html! {
        <div class="pad">
            <p>{"Usable formatting:"}</p>
            <p>{"**"}<strong>{"bold"}</strong>{"** ("}<kbd>{"Ctrl"}</kbd>{" + "}<kbd>{"B"}</kbd>{")"}</p>
            <p>{"__"}<em>{"italics"}</em>{"__ ("}<kbd>{"Ctrl"}</kbd>{" + "}<kbd>{"I"}</kbd>{")"}</p>
            <p>{"``"}<code>{"code formatting"}</code>{"`` ("}<kbd>{"Ctrl"}</kbd>{" + "}<kbd>{"`"}</kbd>{")"}</p>
            <p>{"~~"}<s>{"strikethrough"}</s>{"~~"}</p>
            <p>{"^^"}<sup>{"superscript"}</sup>{"^^"}</p>
            <p>{"\\\\"}<sub>{"subscript"}</sub>{"\\\\"}</p>
            { for toggles }
            <p><button class="button" onclick={done}>{"Done"}</button></p>
        </div>
    }
}
