//! Popup panels and the host that routes a routing string to one of them.

mod alert;
mod avatars;
mod backgrounds;
mod battle;
mod chat_formatting;
mod leave_room;
mod login;
mod options;
mod password;
mod user;
mod user_options;
mod volume;

#[cfg(test)]
mod tests;

pub use alert::AlertPopup;
pub use avatars::AvatarsPopup;
pub use backgrounds::BackgroundsPopup;
pub use battle::{ForfeitPopup, ReplacePlayerPopup};
pub use chat_formatting::ChatFormattingPopup;
pub use leave_room::LeaveRoomPopup;
pub use login::LoginPopup;
pub use options::OptionsPopup;
pub use password::{ChangePasswordPopup, RegisterPopup};
pub use user::{UserMode, UserPopup};
pub use user_options::UserOptionsPopup;
pub use volume::VolumePopup;

use crate::components::popup_wrapper::PopupWrapper;
use crate::context::ClientContext;
use psclient_core::{PopupArgs, PopupRoute};
use yew::prelude::*;

/// Props shared by popups that only need the client and their arguments.
#[derive(Properties, PartialEq, Clone)]
pub struct PopupProps {
    pub ctx: ClientContext,
    #[prop_or_default]
    pub args: PopupArgs,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub route: AttrValue,
    #[prop_or_default]
    pub args: PopupArgs,
    pub ctx: ClientContext,
}

const fn dialog_label(route: &PopupRoute) -> &'static str {
    match route {
        PopupRoute::User(_) | PopupRoute::ViewUser(_) => "User",
        PopupRoute::Users => "Find a user",
        PopupRoute::UserOptions { .. } => "User options",
        PopupRoute::Volume => "Volume",
        PopupRoute::Options => "Options",
        PopupRoute::Login => "Log in",
        PopupRoute::Avatars => "Avatars",
        PopupRoute::ChangePassword => "Change password",
        PopupRoute::Register => "Register",
        PopupRoute::ForfeitBattle => "Forfeit",
        PopupRoute::ReplacePlayer => "Replace player",
        PopupRoute::ChangeBackground => "Background",
        PopupRoute::ChatFormatting => "Text formatting",
        PopupRoute::ConfirmLeaveRoom => "Leave room",
        PopupRoute::Alert(_) => "Message",
    }
}

fn popup_body(route: &PopupRoute, ctx: &ClientContext, args: &PopupArgs) -> Html {
    let ctx = ctx.clone();
    let args = args.clone();
    match route {
        PopupRoute::User(name) => {
            html! { <UserPopup {ctx} {args} name={name.clone()} mode={UserMode::Full} /> }
        }
        PopupRoute::ViewUser(name) => {
            html! { <UserPopup {ctx} {args} name={name.clone()} mode={UserMode::ViewOnly} /> }
        }
        PopupRoute::Users => {
            html! { <UserPopup {ctx} {args} name={String::new()} mode={UserMode::Lookup} /> }
        }
        PopupRoute::UserOptions { user, room } => {
            html! { <UserOptionsPopup {ctx} user={user.clone()} room={room.clone()} /> }
        }
        PopupRoute::Volume => html! { <VolumePopup {ctx} {args} /> },
        PopupRoute::Options => html! { <OptionsPopup {ctx} {args} /> },
        PopupRoute::Login => html! { <LoginPopup {ctx} {args} /> },
        PopupRoute::Avatars => html! { <AvatarsPopup {ctx} {args} /> },
        PopupRoute::ChangePassword => html! { <ChangePasswordPopup {ctx} {args} /> },
        PopupRoute::Register => html! { <RegisterPopup {ctx} {args} /> },
        PopupRoute::ForfeitBattle => html! { <ForfeitPopup {ctx} {args} /> },
        PopupRoute::ReplacePlayer => html! { <ReplacePlayerPopup {ctx} {args} /> },
        PopupRoute::ChangeBackground => html! { <BackgroundsPopup {ctx} {args} /> },
        PopupRoute::ChatFormatting => html! { <ChatFormattingPopup {ctx} {args} /> },
        PopupRoute::ConfirmLeaveRoom => html! { <LeaveRoomPopup {ctx} {args} /> },
        PopupRoute::Alert(_) => html! { <AlertPopup {ctx} {args} /> },
    }
}

/// Renders the popup registered for `route` inside a [`PopupWrapper`].
///
/// Unknown routes render nothing.
#[function_component(PopupHost)]
pub fn popup_host(p: &Props) -> Html {
    let route = match p.route.parse::<PopupRoute>() {
        Ok(route) => route,
        Err(err) => {
            log::warn!("{err}");
            return Html::default();
        }
    };
    log::debug!("opening popup {route}");
    let on_close = {
        let ctx = p.ctx.clone();
        Callback::from(move |()| ctx.close())
    };
    html! {
        <PopupWrapper
            label={dialog_label(&route)}
            {on_close}
            width={route.width()}
            semimodal={route.is_semimodal()}
        >
            { popup_body(&route, &p.ctx, &p.args) }
        </PopupWrapper>
    }
}
