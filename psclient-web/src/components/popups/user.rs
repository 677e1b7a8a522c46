use crate::context::ClientContext;
use crate::dom::input_value;
use psclient_core::PopupArgs;
use psclient_core::popup::user::{
    GroupLabel, ProfileButtons, ProfileContext, RoomLink, RoomsView, UserProfile, UserTarget,
    build_profile,
};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMode {
    Full,
    /// Profile only; no rooms or buttons.
    ViewOnly,
    /// Starts with a username lookup form.
    Lookup,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub ctx: ClientContext,
    #[prop_or_default]
    pub args: PopupArgs,
    pub name: String,
    pub mode: UserMode,
}

fn group_html(label: &GroupLabel, class: &'static str) -> Html {
    let name = if label.punishment {
        html! { <span style="color:#777777">{ label.name.clone() }</span> }
    } else {
        html! { { label.name.clone() } }
    };
    html! { <div class={classes!("usergroup", class)}>{ name }</div> }
}

fn room_links(heading: &'static str, links: &[RoomLink]) -> Html {
    if links.is_empty() {
        return Html::default();
    }
    let items = links.iter().enumerate().map(|(i, link)| {
        let class = classes!("ilink", link.yours.then_some("yours"));
        html! {
            <>
                { (i > 0).then(|| html! { {", "} }) }
                <a href={format!("/{}", link.room_id)} {class} title={link.title.clone()}>
                    { link.rank.map(|rank| html! {
                        <small style="color: #888; font-size: 100%">{ rank.to_string() }</small>
                    }) }
                    { link.label.clone() }
                </a>
            </>
        }
    });
    html! { <><br /><em>{ heading }</em>{" "}{ for items }</> }
}

fn rooms_html(rooms: &RoomsView) -> Html {
    match rooms {
        RoomsView::Lists(lists) => html! {
            <small class="rooms">
                { room_links("Battles:", &lists.battles) }
                { room_links("Chatrooms:", &lists.chatrooms) }
                { room_links("Private rooms:", &lists.private) }
            </small>
        },
        RoomsView::Offline => html! { <strong class="offline">{"OFFLINE"}</strong> },
    }
}

fn button_bar(
    buttons: ProfileButtons,
    profile: &UserProfile,
    ctx: &ClientContext,
    parent_room: Option<&str>,
) -> Html {
    let open = |route: String, args: PopupArgs| {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.open(&route, args.clone()))
    };
    match buttons {
        ProfileButtons::OwnProfile => {
            let logout = {
                let ctx = ctx.clone();
                Callback::from(move |_: MouseEvent| ctx.send("/logout"))
            };
            html! {
                <>
                    <p class="buttonbar">
                        <button class="button" disabled=true>{"Challenge"}</button>{" "}
                        <button class="button" onclick={open("dm-".to_string(), PopupArgs::default())}>{"Chat Self"}</button>
                    </p>
                    <hr />
                    <p class="buttonbar" style="text-align: right">
                        <button class="button" onclick={open("login".to_string(), PopupArgs::default())}>
                            <i class="fa fa-pencil"></i>{" Change name"}
                        </button>{" "}
                        <button class="button" onclick={logout}>
                            <i class="fa fa-power-off"></i>{" Log out"}
                        </button>
                    </p>
                </>
            }
        }
        ProfileButtons::Disabled => html! {
            <p class="buttonbar">
                <button class="button" disabled=true>{"Challenge"}</button>{" "}
                <button class="button" disabled=true>{"Chat"}</button>{" "}
                <button class="button" disabled=true>{"\u{2026}"}</button>
            </p>
        },
        ProfileButtons::Other => {
            let options_args = parent_room.map(PopupArgs::from_room).unwrap_or_default();
            html! {
                <p class="buttonbar">
                    <button class="button" onclick={open(profile.challenge_route.clone(), PopupArgs::default())}>{"Challenge"}</button>{" "}
                    <button class="button" onclick={open(profile.dm_route.clone(), PopupArgs::default())}>{"Chat"}</button>{" "}
                    <button class="button" onclick={open(profile.options_route.clone(), options_args)}>{"\u{2026}"}</button>
                </p>
            }
        }
    }
}

fn profile_html(profile: &UserProfile, ctx: &ClientContext, parent_room: Option<&str>) -> Html {
    let avatar = profile.avatar.as_ref().map(|src| {
        if profile.avatar_editable {
            let ctx = ctx.clone();
            let onclick =
                Callback::from(move |_: MouseEvent| ctx.open("avatars", PopupArgs::default()));
            html! { <img src={src.clone()} class="trainersprite yours" {onclick} /> }
        } else {
            html! { <img src={src.clone()} class="trainersprite" /> }
        }
    });
    let name_style = profile.away.then_some("color: #888888");
    html! {
        <>
            <div class="userdetails">
                { avatar }
                <strong>
                    <a href={profile.profile_url.clone()} target="_blank" style={name_style}>
                        { profile.name.clone() }
                    </a>
                </strong>
                <br />
                { profile.status.as_ref().map(|status| html! { <div class="userstatus">{ status.clone() }</div> }) }
                { profile.room_group.as_ref().map(|label| group_html(label, "roomgroup")) }
                { profile.global_group.as_ref().map(|label| group_html(label, "globalgroup")) }
                { profile.custom_group.as_ref().map(|group| html! {
                    <div class="usergroup globalgroup">{ group.clone() }</div>
                }) }
                { profile.rooms.as_ref().map(rooms_html) }
            </div>
            { profile.buttons.map(|buttons| button_bar(buttons, profile, ctx, parent_room)) }
        </>
    }
}

#[function_component(UserPopup)]
pub fn user_popup(p: &Props) -> Html {
    let target = {
        let initial = p.args.username.clone().unwrap_or_else(|| p.name.clone());
        use_state(move || UserTarget::new(&initial))
    };
    let lookup_ref = use_node_ref();

    {
        let ctx = p.ctx.clone();
        use_effect_with((*target).clone(), move |target: &UserTarget| {
            if let Some(command) = target.details_command() {
                ctx.send(&command);
            }
        });
    }

    let lookup = (p.mode == UserMode::Lookup).then(|| {
        let onsubmit = {
            let target = target.clone();
            let lookup_ref = lookup_ref.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                target.set(UserTarget::new(&input_value(&lookup_ref)));
            })
        };
        let oninput = {
            let target = target.clone();
            let lookup_ref = lookup_ref.clone();
            Callback::from(move |_: InputEvent| {
                if !target.matches_input(&input_value(&lookup_ref)) {
                    target.set(UserTarget::new(""));
                }
            })
        };
        let close = {
            let ctx = p.ctx.clone();
            Callback::from(move |_: MouseEvent| ctx.close())
        };
        html! {
            <form {onsubmit} style="min-width: 278px">
                <label class="label">
                    {"Username: "}
                    <input type="search" name="username" class="textbox autofocus" ref={lookup_ref} {oninput} />
                </label>
                if target.userid.is_empty() {
                    <p class="buttonbar">
                        <button type="submit" class="button"><strong>{"Look up"}</strong></button>{" "}
                        <button type="button" name="closeRoom" class="button" onclick={close}>{"Close"}</button>
                    </p>
                } else {
                    <hr />
                }
            </form>
        }
    });

    let cx = ProfileContext {
        session: &p.ctx.session,
        groups: &p.ctx.groups,
        rooms: &p.ctx.rooms,
        dex: p.ctx.dex.as_ref(),
        config: &p.ctx.config,
    };
    let parent_room = p.args.parent_room.as_deref();
    let profile = build_profile(
        &target,
        p.ctx.details(&target.userid),
        p.mode != UserMode::ViewOnly,
        parent_room,
        &cx,
    );

    html! {
        <div class="pad">
            { lookup }
            { profile.map(|profile| profile_html(&profile, &p.ctx, parent_room)) }
        </div>
    }
}
