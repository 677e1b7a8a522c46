use super::PopupProps;
use crate::context::ClientEvent;
use crate::dom::{input_checked, input_value};
use psclient_core::PopupArgs;
use psclient_core::popup::battle::{FORFEIT_COMMAND, can_replace_player, replace_player_commands};
use yew::prelude::*;

#[function_component(ForfeitPopup)]
pub fn forfeit_popup(p: &PopupProps) -> Html {
    let close_after = use_node_ref();
    let room = p.args.parent_room.clone().unwrap_or_default();
    let battle = p.ctx.rooms.get(&room).and_then(|room| room.battle_info());

    let on_forfeit = {
        let ctx = p.ctx.clone();
        let room = room.clone();
        let close_after = close_after.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ctx.send_in(Some(&room), FORFEIT_COMMAND);
            if input_checked(&close_after) {
                ctx.emit(ClientEvent::LeaveRoom(room.clone()));
            }
            ctx.close();
        })
    };
    let on_replace = {
        let ctx = p.ctx.clone();
        let args = PopupArgs::from_room(&room);
        Callback::from(move |_: MouseEvent| ctx.open("replaceplayer", args.clone()))
    };
    let cancel = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    html! {
        <div class="pad">
            <form>
                <p>{"Forfeiting makes you lose the battle. Are you sure?"}</p>
                <p>
                    <label class="checkbox">
                        <input type="checkbox" name="closeroom" checked=true ref={close_after} />
                        {" Close after forfeiting"}
                    </label>
                </p>
                <p>
                    <button class="button" onclick={on_forfeit}><strong>{"Forfeit"}</strong></button>{" "}
                    if battle.is_some_and(can_replace_player) {
                        <button type="button" class="button" value={room} onclick={on_replace}>{"Replace player"}</button>{" "}
                    }
                    <button type="button" name="close" class="button" onclick={cancel}>{"Cancel"}</button>
                </p>
            </form>
        </div>
    }
}

#[function_component(ReplacePlayerPopup)]
pub fn replace_player_popup(p: &PopupProps) -> Html {
    let name_ref = use_node_ref();

    let onsubmit = {
        let ctx = p.ctx.clone();
        let name_ref = name_ref.clone();
        let room = p.args.parent_room.clone().unwrap_or_default();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(battle) = ctx.rooms.get(&room).and_then(|room| room.battle_info()) else {
                log::warn!("replace player: {room:?} is not an open battle");
                ctx.close();
                return;
            };
            match replace_player_commands(&input_value(&name_ref), battle, &ctx.session) {
                Ok(commands) => {
                    for command in &commands {
                        ctx.send_in(Some(&room), command);
                    }
                    ctx.close();
                }
                Err(err) => ctx.emit(ClientEvent::RoomLog {
                    room: room.clone(),
                    line: err.log_line(),
                }),
            }
        })
    };
    let cancel = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    html! {
        <div class="pad">
            <form {onsubmit}>
                <p>{"Replacement player's name:"}</p>
                <p><input name="newplayer" class="textbox autofocus" ref={name_ref} /></p>
                <p>
                    <button type="submit" class="button"><strong>{"Replace"}</strong></button>{" "}
                    <button type="button" class="button" onclick={cancel}>{"Cancel"}</button>
                </p>
            </form>
        </div>
    }
}
