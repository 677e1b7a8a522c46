use super::PopupProps;
use crate::context::ClientEvent;
use crate::dom::input_value;
use psclient_core::popup::login::{LoginStep, login_view};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[function_component(LoginPopup)]
pub fn login_popup(p: &PopupProps) -> Html {
    let login_state = {
        let initial = p.args.login_state.clone();
        use_state(move || initial)
    };
    let typed = use_state(|| None::<String>);
    let password_shown = use_state(|| false);
    let password_ref = use_node_ref();

    let view = login_view(&p.ctx.session, (*login_state).as_ref(), (*typed).as_deref());

    let on_username = {
        let typed = typed.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                typed.set(Some(input.value()));
            }
        })
    };
    let onsubmit = {
        let ctx = p.ctx.clone();
        let view = view.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let password =
                (view.step == LoginStep::Password).then(|| input_value(&password_ref));
            ctx.emit(ClientEvent::Login(view.submit(password)));
        })
    };
    let reset = {
        let login_state = login_state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            login_state.set(None);
        })
    };
    let toggle_password = {
        let password_shown = password_shown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            password_shown.set(!*password_shown);
        })
    };
    let cancel = {
        let ctx = p.ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.close())
    };

    let registered_hint = html! {
        <><i class="fa fa-level-up fa-rotate-90"></i>{" "}<strong>{"if you registered this name:"}</strong></>
    };
    let step_fields = match view.step {
        LoginStep::Password => html! {
            <p>
                { registered_hint }
                <label class="label">
                    {"Password: "}
                    <input
                        class="textbox"
                        type={if *password_shown { "text" } else { "password" }}
                        name="password"
                        autocomplete="current-password"
                        style="width:173px"
                        ref={password_ref}
                    />
                    <button
                        type="button"
                        class="button"
                        aria-label="Show password"
                        style="float:right;margin:-21px 0 10px;padding: 2px 6px"
                        onclick={toggle_password}
                    ><i class="fa fa-eye"></i></button>
                </label>
            </p>
        },
        LoginStep::External => html! {
            <>
                <p>{ registered_hint }</p>
                <p><div class="google-password-box">{"[loading Google log-in button]"}</div></p>
            </>
        },
        LoginStep::LoggingIn | LoginStep::ChooseName => Html::default(),
    };
    let buttons = match view.step {
        LoginStep::LoggingIn => html! { <button disabled=true class="cur">{"Logging in..."}</button> },
        LoginStep::Password => html! {
            <>
                <button type="submit" class="button"><strong>{"Log in"}</strong></button>{" "}
                <button type="button" class="button" onclick={reset.clone()}>{"Cancel"}</button>
            </>
        },
        LoginStep::External => html! {
            <button type="button" class="button" onclick={reset.clone()}>{"Cancel"}</button>
        },
        LoginStep::ChooseName => html! {
            <>
                <button type="submit" class="button"><strong>{"Choose name"}</strong></button>{" "}
                <button type="button" name="closeRoom" class="button" onclick={cancel}>{"Cancel"}</button>
            </>
        },
    };

    html! {
        <div class="pad">
            <h3>{"Log in"}</h3>
            <form {onsubmit}>
                { view.error.as_ref().map(|error| html! { <p class="error">{ error.clone() }</p> }) }
                <p>
                    <label class="label">
                        {"Username: "}<small class="preview">{"(color)"}</small>
                        <input
                            class="textbox"
                            type="text"
                            name="username"
                            autocomplete="username"
                            value={view.username.clone()}
                            disabled={view.username_locked}
                            oninput={on_username}
                        />
                    </label>
                </p>
                if view.show_rename_notice {
                    <p><small>{"(Others will be able to see your name change. To change name privately, use \"Log out\")"}</small></p>
                }
                { step_fields }
                <p class="buttonbar">{ buttons }</p>
                if view.offer_other_name {
                    <div>
                        <p><i class="fa fa-level-up fa-rotate-90"></i>{" "}<strong>{"if not:"}</strong></p>
                        <p style="max-width: 210px; margin: 0 auto">{"This is someone else's account. Sorry."}</p>
                        <p class="buttonbar">
                            <button class="button" onclick={reset}>{"Try another name"}</button>
                        </p>
                    </div>
                }
            </form>
        </div>
    }
}
