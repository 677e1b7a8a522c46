use super::PopupProps;
use yew::prelude::*;

#[function_component(AlertPopup)]
pub fn alert_popup(p: &PopupProps) -> Html {
    let close = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };
    html! {
        <div class="pad">
            { p.args.message.as_ref().map(|message| html! {
                <p style="white-space:pre-wrap;word-wrap:break-word">{ message.clone() }</p>
            }) }
            <p class="buttonbar">
                <button class="button autofocus" name="closeRoom" style="min-width:50px" onclick={close}>
                    <strong>{ p.args.ok_label().to_string() }</strong>
                </button>
            </p>
        </div>
    }
}
