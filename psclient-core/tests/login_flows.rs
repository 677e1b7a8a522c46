use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use futures::executor::block_on;
use psclient_core::popup::forms::{
    ChangePasswordForm, FormError, FormOutcome, RegisterForm, change_password_outcome,
    register_outcome,
};
use psclient_core::{ClientError, LoginRequest, LoginResponse, LoginServer, Session};

/// Answers each action with a canned body and remembers what was asked.
#[derive(Default)]
struct ScriptedLoginServer {
    bodies: HashMap<&'static str, &'static str>,
    seen: RefCell<Vec<LoginRequest>>,
}

impl ScriptedLoginServer {
    fn answering(action: &'static str, body: &'static str) -> Self {
        let mut server = Self::default();
        server.bodies.insert(action, body);
        server
    }
}

#[async_trait(?Send)]
impl LoginServer for ScriptedLoginServer {
    async fn query(&self, request: LoginRequest) -> Result<LoginResponse, ClientError> {
        let body = self.bodies.get(request.action.as_str()).copied();
        self.seen.borrow_mut().push(request);
        match body {
            Some(body) => LoginResponse::parse(body),
            None => Err(ClientError::Transport("Connection refused".into())),
        }
    }
}

#[test]
fn registering_renames_with_the_returned_assertion() {
    let server = ScriptedLoginServer::answering(
        "register",
        r#"]{"curuser":{"loggedin":true,"username":"Misty"},"assertion":"abc123"}"#,
    );
    let mut session = Session::named("Misty");
    session.challstr = "4|deadbeef".into();

    let form = RegisterForm {
        captcha: "pikachu".into(),
        password: "starmie".into(),
        confirm: "starmie".into(),
    };
    let request = form.request(&session).unwrap();
    let outcome = register_outcome(block_on(server.query(request)));

    let FormOutcome::Registered { name, assertion } = outcome else {
        panic!("expected a registration, got {outcome:?}");
    };
    let command = session.register(&name, assertion.as_deref());
    assert_eq!(command.as_deref(), Some("/trn Misty,0,abc123"));
    assert!(session.is_registered());

    let seen = server.seen.borrow();
    assert_eq!(seen[0].params["username"], "Misty");
    assert_eq!(seen[0].params["challstr"], "4|deadbeef");
}

#[test]
fn login_server_errors_surface_inline() {
    let server = ScriptedLoginServer::answering(
        "changepassword",
        r#"]{"actionerror":"Your old password was incorrect."}"#,
    );
    let form = ChangePasswordForm {
        old_password: "hunter1".into(),
        password: "hunter2".into(),
        confirm: "hunter2".into(),
    };
    let outcome = change_password_outcome(block_on(server.query(form.request().unwrap())));
    assert_eq!(
        outcome,
        FormOutcome::Error("Your old password was incorrect.".into())
    );
}

#[test]
fn transport_failures_use_the_same_slot() {
    let server = ScriptedLoginServer::default();
    let form = ChangePasswordForm {
        old_password: "a".into(),
        password: "b".into(),
        confirm: "b".into(),
    };
    let outcome = change_password_outcome(block_on(server.query(form.request().unwrap())));
    assert_eq!(outcome, FormOutcome::Error("Connection refused".into()));
}

#[test]
fn invalid_forms_never_reach_the_server() {
    let mismatched = ChangePasswordForm {
        old_password: "a".into(),
        password: "b".into(),
        confirm: "c".into(),
    };
    assert_eq!(mismatched.request(), Err(FormError::PasswordMismatch));

    let blank = RegisterForm::default();
    assert_eq!(
        blank.request(&Session::named("Brock")),
        Err(FormError::MissingFields)
    );
}
