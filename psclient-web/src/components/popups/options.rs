use super::PopupProps;
use crate::context::ClientContext;
use crate::dom::input_value;
use psclient_core::PopupArgs;
use psclient_core::popup::avatars::resolve_avatar;
use psclient_core::popup::options::{AccountButton, StatusEditor, account_button};
use psclient_core::prefs::{
    LANGUAGES, Layout, OptionToggle, Preferences, Theme, TimestampMode, TournamentNotifications,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

fn open_button(ctx: &ClientContext, route: &'static str) -> Callback<MouseEvent> {
    let ctx = ctx.clone();
    Callback::from(move |_: MouseEvent| ctx.open(route, PopupArgs::default()))
}

/// A `<select>` whose change applies `apply` to the preferences.
fn select_change(
    ctx: &ClientContext,
    apply: impl Fn(&mut Preferences, &str) -> Option<String> + 'static,
) -> Callback<Event> {
    let ctx = ctx.clone();
    Callback::from(move |e: Event| {
        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
            let value = select.value();
            ctx.update_prefs(|prefs| apply(prefs, &value));
        }
    })
}

fn select_options<T: PartialEq + Copy>(
    choices: &[(T, &'static str)],
    value_of: fn(T) -> &'static str,
    current: T,
) -> Html {
    choices
        .iter()
        .map(|&(choice, label)| {
            html! { <option value={value_of(choice)} selected={choice == current}>{ label }</option> }
        })
        .collect()
}

fn checkbox(ctx: &ClientContext, toggle: OptionToggle) -> Html {
    let onchange = {
        let ctx = ctx.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.checked();
                ctx.update_prefs(|prefs| prefs.set_toggle(toggle, value));
            }
        })
    };
    html! {
        <p>
            <label class="checkbox">
                <input
                    type="checkbox"
                    name={toggle.input_name()}
                    checked={ctx.prefs.toggle(toggle)}
                    {onchange}
                />
                { format!(" {}", toggle.label()) }
            </label>
        </p>
    }
}

#[function_component(OptionsPopup)]
pub fn options_popup(p: &PopupProps) -> Html {
    let ctx = &p.ctx;
    let prefs = &ctx.prefs;
    let session = &ctx.session;
    let status = use_state(StatusEditor::default);
    let status_ref = use_node_ref();

    let status_editor = match *status {
        StatusEditor::Editing => {
            let onclick = {
                let ctx = ctx.clone();
                let status = status.clone();
                let status_ref = status_ref.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    let (next, command) = status.submit(&input_value(&status_ref));
                    ctx.send(&command);
                    status.set(next);
                })
            };
            html! {
                <p>
                    <input name="statustext" ref={status_ref} />
                    <button class="button" {onclick}><i class="fa fa-pencil"></i></button>
                </p>
            }
        }
        editor => {
            let onclick = {
                let status = status.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    status.set(status.toggle());
                })
            };
            let updated = editor == StatusEditor::Updated;
            html! {
                <p>
                    <button class="button" {onclick} disabled={updated}>
                        { if updated { "Status Updated" } else { "Status..." } }
                    </button>
                </p>
            }
        }
    };

    let account = account_button(session).map(|button| match button {
        AccountButton::ChangePassword => html! {
            <button class="button" onclick={open_button(ctx, "changepassword")}>{"Password..."}</button>
        },
        AccountButton::Register => html! {
            <button class="button" onclick={open_button(ctx, "register")}>{"Register"}</button>
        },
    });

    let on_theme = select_change(ctx, |prefs, value| {
        if let Some(theme) = Theme::parse(value) {
            prefs.theme = theme;
        }
        None
    });
    let on_layout = select_change(ctx, |prefs, value| {
        if let Some(layout) = Layout::parse(value) {
            prefs.layout = layout;
        }
        None
    });
    let on_language = select_change(ctx, |prefs, value| Some(prefs.set_language(value)));
    let on_tournaments = select_change(ctx, |prefs, value| {
        prefs.tournaments = TournamentNotifications::parse(value);
        None
    });
    let on_chat_timestamps = select_change(ctx, |prefs, value| {
        prefs.timestamps.chatrooms = TimestampMode::parse(value).unwrap_or_default();
        None
    });
    let on_pm_timestamps = select_change(ctx, |prefs, value| {
        prefs.timestamps.pms = TimestampMode::parse(value).unwrap_or_default();
        None
    });
    let languages: Html = LANGUAGES
        .iter()
        .map(|&(id, native)| {
            html! { <option value={id} selected={prefs.language == id}>{ native }</option> }
        })
        .collect();

    let logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.send("/logout"))
    };

    html! {
        <div class="pad">
            <p>
                <img
                    class="trainersprite yours"
                    width="40"
                    height="40"
                    style="vertical-align: middle"
                    src={resolve_avatar(&session.avatar, ctx.dex.as_ref(), &ctx.config)}
                    onclick={open_button(ctx, "avatars")}
                />{" "}
                <strong>{ session.name.clone() }</strong>
            </p>
            <p><button class="button" onclick={open_button(ctx, "avatars")}>{" Avatar..."}</button></p>
            { status_editor }
            { account }
            <hr />
            <h3>{"Graphics"}</h3>
            <p>
                <label class="optlabel">{"Theme: "}
                    <select name="theme" class="button" onchange={on_theme}>
                        { select_options(&Theme::ALL, Theme::as_str, prefs.theme) }
                    </select>
                </label>
            </p>
            <p>
                <label class="optlabel">{"Layout: "}
                    <select name="layout" class="button" onchange={on_layout}>
                        { select_options(&Layout::ALL, Layout::as_str, prefs.layout) }
                    </select>
                </label>
            </p>
            <p>
                <label class="optlabel">{"Background: "}
                    <button class="button" onclick={open_button(ctx, "changebackground")}>{"Change Background"}</button>
                </label>
            </p>
            { for OptionToggle::GRAPHICS.into_iter().map(|toggle| checkbox(ctx, toggle)) }
            <hr />
            <h3>{"Chat"}</h3>
            { for OptionToggle::CHAT.into_iter().map(|toggle| checkbox(ctx, toggle)) }
            <p>
                <label class="optlabel">{"Language: "}
                    <select name="language" class="button" onchange={on_language}>{ languages }</select>
                </label>
            </p>
            <p>
                <label class="optlabel">{"Tournaments: "}
                    <select name="tournaments" class="button" onchange={on_tournaments}>
                        { select_options(&TournamentNotifications::ALL, TournamentNotifications::as_str, prefs.tournaments) }
                    </select>
                </label>
            </p>
            <p>
                <label class="optlabel">{"Timestamps: "}
                    <select name="chatroomtimestamps" class="button" onchange={on_chat_timestamps}>
                        { select_options(&TimestampMode::ALL, TimestampMode::as_str, prefs.timestamps.chatrooms) }
                    </select>
                </label>
            </p>
            <p>
                <label class="optlabel">{"Timestamps in DMs: "}
                    <select name="pmtimestamps" class="button" onchange={on_pm_timestamps}>
                        { select_options(&TimestampMode::ALL, TimestampMode::as_str, prefs.timestamps.pms) }
                    </select>
                </label>
            </p>
            <p>
                <label class="optlabel">{"Chat preferences: "}
                    <button class="button" onclick={open_button(ctx, "chatformatting")}>{"Text formatting..."}</button>
                </label>
            </p>
            <hr />
            <p class="buttonbar" style="text-align: right">
                if session.named {
                    <button class="button" onclick={open_button(ctx, "login")}>
                        <i class="fa fa-pencil"></i>{" Change name"}
                    </button>{" "}
                    <button class="button" onclick={logout}>
                        <i class="fa fa-power-off"></i>{" Log out"}
                    </button>
                } else {
                    <button class="button" onclick={open_button(ctx, "login")}>
                        <i class="fa fa-pencil"></i>{" Choose name"}
                    </button>
                }
            </p>
        </div>
    }
}
