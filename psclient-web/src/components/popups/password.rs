//! Change-password and register forms.

use super::PopupProps;
use crate::context::{ClientContext, ClientEvent};
use crate::dom::input_value;
use psclient_core::popup::forms::{
    ChangePasswordForm, FormOutcome, PASSWORD_CHANGED, REGISTERED, RegisterForm,
    change_password_outcome, register_outcome,
};
use psclient_core::{ClientError, LoginRequest, LoginResponse};
use yew::prelude::*;

/// Query the login server and hand the result to `finish`.
fn submit(
    ctx: &ClientContext,
    request: LoginRequest,
    finish: impl FnOnce(Result<LoginResponse, ClientError>) + 'static,
) {
    let server = ctx.login_server.clone();
    wasm_bindgen_futures::spawn_local(async move {
        finish(server.query(request).await);
    });
}

fn error_slot(error: &UseStateHandle<Option<String>>) -> Html {
    (**error)
        .as_ref()
        .filter(|message| !message.is_empty())
        .map(|message| html! { <p><b class="message-error">{ format!(" {message}") }</b></p> })
        .unwrap_or_default()
}

fn password_field(
    label: &'static str,
    name: &'static str,
    autocomplete: &'static str,
    autofocus: bool,
    node: &NodeRef,
) -> Html {
    html! {
        <p>
            <label class="label">
                { format!("{label}: ") }
                <input
                    {name}
                    type="password"
                    {autocomplete}
                    class={classes!("textbox", autofocus.then_some("autofocus"))}
                    ref={node.clone()}
                />
            </label>
        </p>
    }
}

#[function_component(ChangePasswordPopup)]
pub fn change_password_popup(p: &PopupProps) -> Html {
    let error = use_state(|| None::<String>);
    let old_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let onsubmit = {
        let ctx = p.ctx.clone();
        let error = error.clone();
        let (old_ref, password_ref, confirm_ref) =
            (old_ref.clone(), password_ref.clone(), confirm_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ChangePasswordForm {
                old_password: input_value(&old_ref),
                password: input_value(&password_ref),
                confirm: input_value(&confirm_ref),
            };
            let request = match form.request() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            let ctx_done = ctx.clone();
            let error = error.clone();
            submit(&ctx, request, move |result| match change_password_outcome(result) {
                FormOutcome::Error(message) => error.set(Some(message)),
                FormOutcome::PasswordChanged => {
                    ctx_done.close();
                    ctx_done.emit(ClientEvent::Alert(PASSWORD_CHANGED.to_string()));
                }
                FormOutcome::Registered { .. } | FormOutcome::Silent => {}
            });
        })
    };
    let cancel = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    html! {
        <div class="pad">
            <form {onsubmit}>
                { error_slot(&error) }
                <p>{"Change your password:"}</p>
                <p>
                    <label class="label">
                        {"Username: "}
                        <input name="username" value={p.ctx.session.name.clone()} readonly=true autocomplete="username" class="textbox disabled" />
                    </label>
                </p>
                { password_field("Old password", "oldpassword", "current-password", true, &old_ref) }
                { password_field("New password", "password", "new-password", false, &password_ref) }
                { password_field("New password (confirm)", "cpassword", "new-password", false, &confirm_ref) }
                <p class="buttonbar">
                    <button type="submit" class="button"><strong>{"Change password"}</strong></button>{" "}
                    <button type="button" class="button" onclick={cancel}>{"Cancel"}</button>
                </p>
            </form>
        </div>
    }
}

#[function_component(RegisterPopup)]
pub fn register_popup(p: &PopupProps) -> Html {
    let error = use_state(|| None::<String>);
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let captcha_ref = use_node_ref();

    let onsubmit = {
        let ctx = p.ctx.clone();
        let error = error.clone();
        let (password_ref, confirm_ref, captcha_ref) =
            (password_ref.clone(), confirm_ref.clone(), captcha_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = RegisterForm {
                captcha: input_value(&captcha_ref),
                password: input_value(&password_ref),
                confirm: input_value(&confirm_ref),
            };
            let request = match form.request(&ctx.session) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            let ctx_done = ctx.clone();
            let error = error.clone();
            submit(&ctx, request, move |result| match register_outcome(result) {
                FormOutcome::Registered { name, assertion } => {
                    let mut session = (*ctx_done.session).clone();
                    if let Some(command) = session.register(&name, assertion.as_deref()) {
                        ctx_done.send(&command);
                    }
                    ctx_done.emit(ClientEvent::SessionChanged(session));
                    ctx_done.close();
                    ctx_done.emit(ClientEvent::Alert(REGISTERED.to_string()));
                }
                FormOutcome::Error(message) => error.set(Some(message)),
                FormOutcome::PasswordChanged | FormOutcome::Silent => {}
            });
        })
    };
    let cancel = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    html! {
        <div class="pad">
            <form {onsubmit}>
                { error_slot(&error) }
                <p>{"Register your account:"}</p>
                <p>
                    <label class="label">
                        {"Username: "}
                        <input name="name" value={p.ctx.session.name.clone()} readonly=true autocomplete="username" class="textbox disabled" />
                    </label>
                </p>
                { password_field("Password", "password", "new-password", true, &password_ref) }
                { password_field("Password (confirm)", "cpassword", "new-password", false, &confirm_ref) }
                <p>
                    <label class="label">
                        <img
                            src={format!("{}sprites/gen5ani/pikachu.gif", p.ctx.config.resource_prefix)}
                            alt="An Electric-type mouse that is the mascot of the Pokémon franchise."
                        />
                    </label>
                </p>
                <p>
                    <label class="label">
                        {"What is this pokemon?"}
                        <input name="captcha" class="textbox" ref={captcha_ref} />
                    </label>
                </p>
                <p class="buttonbar">
                    <button type="submit" class="button"><strong>{"Register"}</strong></button>{" "}
                    <button type="button" class="button" onclick={cancel}>{"Cancel"}</button>
                </p>
            </form>
        </div>
    }
}
