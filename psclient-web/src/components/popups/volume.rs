use super::PopupProps;
use psclient_core::prefs::VolumeChannel;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[function_component(VolumePopup)]
pub fn volume_popup(p: &PopupProps) -> Html {
    let prefs = &p.ctx.prefs;

    let sliders = VolumeChannel::ALL.into_iter().map(|channel| {
        let on_input = {
            let ctx = p.ctx.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                    && let Ok(volume) = input.value().parse::<u8>()
                {
                    ctx.update_prefs(|prefs| {
                        prefs.set_volume(channel, volume);
                        None
                    });
                }
            })
        };
        html! {
            <p class="volume">
                <label class="optlabel">
                    { format!("{}: ", channel.label()) }
                    <span class="value">{ prefs.volume_label(channel) }</span>
                </label>
                if prefs.mute {
                    <em>{"(muted)"}</em>
                } else {
                    <input
                        type="range"
                        min="0"
                        max="100"
                        step="1"
                        name={channel.input_name()}
                        value={prefs.volume(channel).to_string()}
                        oninput={on_input}
                    />
                }
            </p>
        }
    });

    let on_mute = {
        let ctx = p.ctx.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mute = input.checked();
                ctx.update_prefs(|prefs| {
                    prefs.mute = mute;
                    None
                });
            }
        })
    };

    html! {
        <div class="pad">
            <h3>{"Volume"}</h3>
            { for sliders }
            <p>
                <label class="checkbox">
                    <input type="checkbox" name="mute" checked={prefs.mute} onchange={on_mute} />{" Mute all"}
                </label>
            </p>
        </div>
    }
}
