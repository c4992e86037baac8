use gloo_storage::{LocalStorage, Storage};
use shared::validate;
use shared::{AuthResponse, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const TOKEN_KEY: &str = "auth_token";

pub enum Msg {
    UpdateName(String),
    UpdateEmail(String),
    UpdatePhone(String),
    UpdatePassword(String),
    TogglePasswordVisibility,
    Submit,
    Submitted(Result<AuthResponse, String>),
}

#[derive(Default)]
struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    phone: Option<&'static str>,
    password: Option<&'static str>,
}

pub struct Signup {
    form: RegisterRequest,
    errors: FieldErrors,
    show_password: bool,
    submitting: bool,
    server_error: Option<String>,
}

fn validate_form(form: &RegisterRequest) -> (FieldErrors, bool) {
    let mut errors = FieldErrors::default();
    let mut valid = true;

    if !validate::required(&form.name) {
        errors.name = Some("Name is required");
        valid = false;
    }
    if !validate::required(&form.email) {
        errors.email = Some("Email is required");
        valid = false;
    } else if !validate::valid_email(&form.email) {
        errors.email = Some("Email is invalid");
        valid = false;
    }
    if !validate::required(&form.phone) {
        errors.phone = Some("Phone number is required");
        valid = false;
    } else if !validate::valid_phone(&form.phone) {
        errors.phone = Some("Phone number must be 10 digits");
        valid = false;
    }
    if !validate::required(&form.password) {
        errors.password = Some("Password is required");
        valid = false;
    } else if !validate::valid_password(&form.password) {
        errors.password = Some("Password must be at least 8 characters");
        valid = false;
    }

    (errors, valid)
}

impl Component for Signup {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: RegisterRequest {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                password: String::new(),
            },
            errors: FieldErrors::default(),
            show_password: false,
            submitting: false,
            server_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(value) => {
                self.form.name = value;
                true
            }
            Msg::UpdateEmail(value) => {
                self.form.email = value;
                true
            }
            Msg::UpdatePhone(value) => {
                self.form.phone = value;
                true
            }
            Msg::UpdatePassword(value) => {
                self.form.password = value;
                true
            }
            Msg::TogglePasswordVisibility => {
                self.show_password = !self.show_password;
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
                    link.send_message(Msg::Submitted(crate::api::register(&form).await));
                });
                true
            }
            Msg::Submitted(Ok(response)) => {
                self.submitting = false;
                if let Err(e) = LocalStorage::set(TOKEN_KEY, &response.token) {
                    log::warn!("Failed to store demo token: {:?}", e);
                }
                log::info!("Registered demo account for {}", response.user.email);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
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
        let oninput_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateName(input.value())
        });
        let oninput_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateEmail(input.value())
        });
        let oninput_phone = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdatePhone(input.value())
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
                    <h1>{"Create an Account"}</h1>
                    <p class="muted">{"Join the platform and start managing disaster waste smarter."}</p>

                    <div class="form-field">
                        <label for="signup-name">{"Full Name"}</label>
                        <input
                            id="signup-name"
                            type="text"
                            value={self.form.name.clone()}
                            oninput={oninput_name}
                        />
                        { render_field_error(self.errors.name) }
                    </div>

                    <div class="form-field">
                        <label for="signup-email">{"Email"}</label>
                        <input
                            id="signup-email"
                            type="email"
                            value={self.form.email.clone()}
                            oninput={oninput_email}
                        />
                        { render_field_error(self.errors.email) }
                    </div>

                    <div class="form-field">
                        <label for="signup-phone">{"Phone Number"}</label>
                        <input
                            id="signup-phone"
                            type="tel"
                            value={self.form.phone.clone()}
                            oninput={oninput_phone}
                        />
                        { render_field_error(self.errors.phone) }
                    </div>

                    <div class="form-field">
                        <label for="signup-password">{"Password"}</label>
                        <div class="password-row">
                            <input
                                id="signup-password"
                                type={if self.show_password { "text" } else { "password" }}
                                value={self.form.password.clone()}
                                oninput={oninput_password}
                            />
                            <button
                                type="button"
                                class="toggle-visibility"
                                title={if self.show_password { "Hide password" } else { "Show password" }}
                                onclick={link.callback(|_| Msg::TogglePasswordVisibility)}
                            >
                                <i class={if self.show_password { "fa-solid fa-eye-slash" } else { "fa-solid fa-eye" }}></i>
                            </button>
                        </div>
                        { render_field_error(self.errors.password) }
                    </div>

                    if let Some(error) = &self.server_error {
                        <div class="error-message">
                            <i class="fa-solid fa-circle-exclamation"></i>
                            <p>{ error.clone() }</p>
                        </div>
                    }

                    <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Creating account..." } else { "Sign Up" } }
                    </button>

                    <p class="muted form-footer">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
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

    fn form(name: &str, email: &str, phone: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }

    #[test]
    fn short_password_and_bad_phone_are_flagged() {
        let (errors, valid) = validate_form(&form("A", "a@a.com", "12345", "short"));
        assert!(!valid);
        assert_eq!(errors.phone, Some("Phone number must be 10 digits"));
        assert_eq!(errors.password, Some("Password must be at least 8 characters"));
    }

    #[test]
    fn formatted_phone_number_is_accepted() {
        let (_, valid) = validate_form(&form("A", "a@a.com", "(555) 123-4567", "longenough"));
        assert!(valid);
    }
}
