use super::PopupProps;
use crate::context::ClientEvent;
use yew::prelude::*;

#[function_component(LeaveRoomPopup)]
pub fn leave_room_popup(p: &PopupProps) -> Html {
    let on_leave = {
        let ctx = p.ctx.clone();
        let room = p.args.parent_room.clone();
        Callback::from(move |_: MouseEvent| {
            ctx.close();
            if let Some(room) = &room {
                ctx.emit(ClientEvent::LeaveRoom(room.clone()));
            }
        })
    };
    let cancel = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    html! {
        <div class="pad">
            <p>{"Are you sure you want to exit this room?"}</p>
            <p class="buttonbar">
                <button class="button autofocus" onclick={on_leave}><strong>{"Close Room"}</strong></button>{" "}
                <button class="button" onclick={cancel}><strong>{"Cancel"}</strong></button>
            </p>
        </div>
    }
}
