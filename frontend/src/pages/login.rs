use gloo_storage::{LocalStorage, Storage};
use shared::validate;
use shared::{AuthResponse, LoginRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const TOKEN_KEY: &str = "auth_token";

pub enum Msg {
    UpdateEmail(String),
    UpdatePassword(String),
    Submit,
    Submitted(Result<AuthResponse, String>),
}

#[derive(Default)]
struct FieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

pub struct Login {
    form: LoginRequest,
    errors: FieldErrors,
    submitting: bool,
    server_error: Option<String>,
}

fn validate_form(form: &LoginRequest) -> (FieldErrors, bool) {
    let mut errors = FieldErrors::default();
    let mut valid = true;

    if !validate::required(&form.email) {
        errors.email = Some("Email is required");
        valid = false;
    } else if !validate::valid_email(&form.email) {
        errors.email = Some("Email is invalid");
        valid = false;
    }
    if !validate::required(&form.password) {
        errors.password = Some("Password is required");
        valid = false;
    }

    (errors, valid)
}

impl Component for Login {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LoginRequest {
                email: String::new(),
                password: String::new(),
            },
            errors: FieldErrors::default(),
            submitting: false,
            server_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateEmail(value) => {
                self.form.email = value;
                true
            }
            Msg::UpdatePassword(value) => {
                self.form.password = value;
                true
            }
            Msg::Submit => {
                let (errors, valid) = validate_form(&self.form);
                self.errors = errors;
                if !valid {
                    return true;
                }

                self.submitting = true;
                self.server_error = None;
                let form = self.form.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(crate::api::login(&form).await));
                });
                true
            }
            Msg::Submitted(Ok(response)) => {
                self.submitting = false;
                if let Err(e) = LocalStorage::set(TOKEN_KEY, &response.token) {
                    log::warn!("Failed to store demo token: {:?}", e);
                }
                log::info!("Demo login as {}", response.user.email);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Dashboard);
                }
                true
            }
            Msg::Submitted(Err(error)) => {
                self.submitting = false;
                self.server_error = Some(error);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateEmail(input.value())
        });
        let oninput_password = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdatePassword(input.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="page auth-page">
                <form class="card form-card" {onsubmit}>
                    <h1>{"Welcome Back"}</h1>
                    <p class="muted">{"Log in to track waste operations and view your dashboard."}</p>

                    <div class="form-field">
                        <label for="login-email">{"Email"}</label>
                        <input
                            id="login-email"
                            type="email"
                            value={self.form.email.clone()}
                            oninput={oninput_email}
                        />
                        { render_field_error(self.errors.email) }
                    </div>

                    <div class="form-field">
                        <label for="login-password">{"Password"}</label>
                        <input
                            id="login-password"
                            type="password"
                            value={self.form.password.clone()}
                            oninput={oninput_password}
                        />
                        { render_field_error(self.errors.password) }
                    </div>

                    if let Some(error) = &self.server_error {
                        <div class="error-message">
                            <i class="fa-solid fa-circle-exclamation"></i>
                            <p>{ error.clone() }</p>
                        </div>
                    }

                    <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Logging in..." } else { "Login" } }
                    </button>

                    <p class="muted form-footer">
                        {"New to the platform? "}
                        <Link<Route> to={Route::Signup}>{"Sign Up"}</Link<Route>>
                    </p>
                </form>
            </div>
        }
    }
}

fn render_field_error(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_are_required() {
        let form = LoginRequest {
            email: String::new(),
            password: String::new(),
        };
        let (errors, valid) = validate_form(&form);
        assert!(!valid);
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn valid_credentials_pass() {
        let form = LoginRequest {
            email: "a@a.com".into(),
            password: "hunter22".into(),
        };
        let (_, valid) = validate_form(&form);
        assert!(valid);
    }
}
