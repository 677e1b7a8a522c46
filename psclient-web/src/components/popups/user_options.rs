use crate::context::ClientContext;
use crate::dom::input_value;
use psclient_core::PopupArgs;
use psclient_core::popup::moderation::{
    ModerationState, Permissions, friend_command, ignore_command, report_route,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub ctx: ClientContext,
    pub user: String,
    /// Chat room the moderation commands target.
    pub room: String,
}

#[function_component(UserOptionsPopup)]
pub fn user_options_popup(p: &Props) -> Html {
    let state = use_state(ModerationState::default);
    let request_sent = use_state(|| false);
    let mute_reason = use_node_ref();
    let ban_reason = use_node_ref();

    let permissions = Permissions::in_room(&p.ctx.rooms, &p.room, &p.ctx.session.userid);
    let room_title = p
        .ctx
        .rooms
        .chat(&p.room)
        .map(|room| room.title.clone())
        .unwrap_or_default();

    let send = {
        let ctx = p.ctx.clone();
        let room = p.room.clone();
        move |command: String| {
            ctx.send_to_chat(&room, &command);
        }
    };
    let transition = |change: fn(ModerationState) -> ModerationState| {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set(change((*state).clone()));
        })
    };

    let on_ignore = {
        let ctx = p.ctx.clone();
        let send = send.clone();
        let user = p.user.clone();
        Callback::from(move |_: MouseEvent| {
            send(ignore_command(&user));
            ctx.close();
        })
    };
    let on_report = {
        let ctx = p.ctx.clone();
        let route = report_route(&p.user);
        Callback::from(move |_: MouseEvent| ctx.open(&route, PopupArgs::default()))
    };
    let on_friend = {
        let send = send.clone();
        let user = p.user.clone();
        let request_sent = request_sent.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            send(friend_command(&user));
            request_sent.set(true);
        })
    };
    let submit_mute = |long: bool| {
        let state = state.clone();
        let reason = mute_reason.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set((*state).clone().submit_mute(&input_value(&reason), long));
        })
    };
    let submit_ban = |long: bool| {
        let state = state.clone();
        let reason = ban_reason.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set((*state).clone().submit_ban(&input_value(&reason), long));
        })
    };
    let on_confirm = {
        let ctx = p.ctx.clone();
        let state = state.clone();
        let user = p.user.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(pending) = state.pending() {
                send(pending.command(&user));
                ctx.close();
            }
        })
    };

    let confirm = state.pending().map(|pending| {
        html! {
            <p>
                <small>{ pending.confirm_text(&p.user, &room_title) }</small>
                <p class="buttonbar">
                    <button class="button" onclick={on_confirm}>
                        <i class="fa fa-confirm"></i>{" Confirm"}
                    </button>{" "}
                    <button class="button" onclick={transition(ModerationState::cancel)}>{"Cancel"}</button>
                </p>
            </p>
        }
    });

    let mute_control = state.shows_mute_control(permissions).then(|| {
        if *state == ModerationState::ShowingMuteInput {
            html! {
                <div>
                    <label class="label">
                        {"Reason: "}
                        <input name="mutereason" class="textbox autofocus" placeholder="Mute reason (optional)" ref={mute_reason.clone()} />
                    </label>{" "}<br />
                    <button class="button" value="7min" onclick={submit_mute(false)}>{"For 7 Mins"}</button>{" "}
                    <button class="button" value="1hr" onclick={submit_mute(true)}>{"For 1 Hour"}</button>{" "}
                    <button class="button" onclick={transition(ModerationState::cancel)}>{" Cancel"}</button>
                </div>
            }
        } else {
            html! {
                <button class="button" onclick={transition(ModerationState::show_mute)}>
                    <i class="fa fa-hourglass-half"></i>{" Mute"}
                </button>
            }
        }
    });
    let ban_control = state.shows_ban_control(permissions).then(|| {
        if *state == ModerationState::ShowingBanInput {
            html! {
                <div>
                    <label class="label">
                        {"Reason: "}
                        <input name="banreason" class="textbox autofocus" placeholder="Ban reason (optional)" ref={ban_reason.clone()} />
                    </label><br />
                    <button class="button" value="2d" onclick={submit_ban(false)}>{"For 2 Days"}</button>{" "}
                    <button class="button" value="1wk" onclick={submit_ban(true)}>{"For 1 Week"}</button>{" "}
                    <button class="button" onclick={transition(ModerationState::cancel)}>{"Cancel"}</button>
                </div>
            }
        } else {
            html! {
                <button class="button" onclick={transition(ModerationState::show_ban)}>
                    <i class="fa fa-gavel"></i>{" Ban"}
                </button>
            }
        }
    });

    html! {
        <div class="pad">
            <p><button class="button" onclick={on_ignore}>{"Ignore"}</button></p>
            <p><button class="button" onclick={on_report}>{"Report"}</button></p>
            <p>
                if *request_sent {
                    <button class="button disabled">{"Sent request"}</button>
                } else {
                    <button class="button" onclick={on_friend}>{"Add friend"}</button>
                }
            </p>
            if permissions.any() {
                <hr />
            }
            { confirm }
            <p class="buttonbar">{ mute_control }{" "}{ ban_control }</p>
        </div>
    }
}
