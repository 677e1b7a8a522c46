use super::PopupProps;
use crate::context::ClientEvent;
use psclient_core::popup::avatars::{choose_avatar, selectable_avatars, sprite_offset};
use yew::prelude::*;

#[function_component(AvatarsPopup)]
pub fn avatars_popup(p: &PopupProps) -> Html {
    let current = p.ctx.session.avatar.parse::<u32>().ok();
    let close = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    let options = selectable_avatars().map(|n| {
        let onclick = {
            let ctx = p.ctx.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let (avatar, command) = choose_avatar(n, ctx.dex.as_ref());
                ctx.send(&command);
                let mut session = (*ctx.session).clone();
                session.avatar = avatar;
                ctx.emit(ClientEvent::SessionChanged(session));
                ctx.close();
            })
        };
        html! {
            <button
                key={n.to_string()}
                value={n.to_string()}
                style={format!("background-position: {}", sprite_offset(n))}
                class={classes!("option", "pixelated", (current == Some(n)).then_some("cur"))}
                title={format!("/avatar {n}")}
                {onclick}
            />
        }
    });

    html! {
        <div class="pad">
            <label class="optlabel">
                <strong>{"Choose an avatar or "}</strong>
                <button class="button" onclick={close.clone()}>{" Cancel"}</button>
            </label>
            <div class="avatarlist">{ for options }</div>
            <div style="clear:left"></div>
            <p><button class="button" onclick={close}>{"Cancel"}</button></p>
        </div>
    }
}
