use shared::validate;
use shared::{ContactRequest, ContactResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub enum Msg {
    UpdateName(String),
    UpdateEmail(String),
    UpdateSubject(String),
    UpdateMessage(String),
    Submit,
    Submitted(Result<ContactResponse, String>),
}

#[derive(Default)]
struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    subject: Option<&'static str>,
    message: Option<&'static str>,
}

pub struct Contact {
    form: ContactRequest,
    errors: FieldErrors,
    submitting: bool,
    acknowledgement: Option<String>,
    server_error: Option<String>,
}

fn validate_form(form: &ContactRequest) -> (FieldErrors, bool) {
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
    if !validate::required(&form.subject) {
        errors.subject = Some("Subject is required");
        valid = false;
    }
    if !validate::required(&form.message) {
        errors.message = Some("Message is required");
        valid = false;
    }

    (errors, valid)
}

impl Component for Contact {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactRequest {
                name: String::new(),
                email: String::new(),
                subject: String::new(),
                message: String::new(),
            },
            errors: FieldErrors::default(),
            submitting: false,
            acknowledgement: None,
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
            Msg::UpdateSubject(value) => {
                self.form.subject = value;
                true
            }
            Msg::UpdateMessage(value) => {
                self.form.message = value;
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
                    link.send_message(Msg::Submitted(crate::api::send_contact(&form).await));
                });
                true
            }
            Msg::Submitted(Ok(response)) => {
                self.submitting = false;
                self.acknowledgement = Some(response.message);
                self.form = ContactRequest {
                    name: String::new(),
                    email: String::new(),
                    subject: String::new(),
                    message: String::new(),
                };
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
        html! {
            <div class="page contact-page">
                <header class="page-header">
                    <h1>{"Contact Us"}</h1>
                    <p class="muted">
                        {"Have questions or feedback? We'd love to hear from you. \
                          Get in touch with our team."}
                    </p>
                </header>

                <div class="two-column">
                    { self.render_form(ctx) }
                    { render_faq() }
                </div>
            </div>
        }
    }
}

impl Contact {
    fn render_form(&self, ctx: &Context<Self>) -> Html {
        if let Some(message) = &self.acknowledgement {
            return html! {
                <div class="card form-card">
                    <div class="form-success">
                        <i class="fa-solid fa-circle-check"></i>
                        <h2>{"Message Sent"}</h2>
                        <p>{ message.clone() }</p>
                    </div>
                </div>
            };
        }

        let link = ctx.link();
        let oninput_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateName(input.value())
        });
        let oninput_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateEmail(input.value())
        });
        let oninput_subject = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateSubject(input.value())
        });
        let oninput_message = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateMessage(input.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="card form-card" {onsubmit}>
                <h2>{"Send Us a Message"}</h2>

                <div class="form-field">
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        value={self.form.name.clone()}
                        oninput={oninput_name}
                    />
                    { render_field_error(self.errors.name) }
                </div>

                <div class="form-field">
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        value={self.form.email.clone()}
                        oninput={oninput_email}
                    />
                    { render_field_error(self.errors.email) }
                </div>

                <div class="form-field">
                    <label for="contact-subject">{"Subject"}</label>
                    <input
                        id="contact-subject"
                        type="text"
                        value={self.form.subject.clone()}
                        oninput={oninput_subject}
                    />
                    { render_field_error(self.errors.subject) }
                </div>

                <div class="form-field">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        value={self.form.message.clone()}
                        oninput={oninput_message}
                    />
                    { render_field_error(self.errors.message) }
                </div>

                if let Some(error) = &self.server_error {
                    <div class="error-message">
                        <i class="fa-solid fa-circle-exclamation"></i>
                        <p>{ error.clone() }</p>
                    </div>
                }

                <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                    { if self.submitting { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        }
    }
}

fn render_field_error(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

fn render_faq() -> Html {
    let faqs = [
        (
            "How does the waste tracking system work?",
            "IoT-enabled collection vehicles report their position and fill level, \
             which the dashboard visualizes in real time.",
        ),
        (
            "What types of waste can the AI system classify?",
            "The classifier recognizes common disaster debris categories such as \
             construction materials, organics, and hazardous waste.",
        ),
        (
            "Can the platform be used during active disaster response?",
            "Yes. The system is designed to help response teams prioritize \
             clearance routes and disposal capacity as events unfold.",
        ),
    ];

    html! {
        <div class="card faq-card">
            <h2>{"Frequently Asked Questions"}</h2>
            { for faqs.iter().map(|(question, answer)| html! {
                <details class="faq-item" key={*question}>
                    <summary>{ *question }</summary>
                    <p class="muted">{ *answer }</p>
                </details>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn empty_form_flags_every_field() {
        let (errors, valid) = validate_form(&form("", "", "", ""));
        assert!(!valid);
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn bad_email_is_flagged_specifically() {
        let (errors, valid) = validate_form(&form("A", "not-an-email", "S", "M"));
        assert!(!valid);
        assert_eq!(errors.email, Some("Email is invalid"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn complete_form_passes() {
        let (_, valid) = validate_form(&form("A", "a@a.com", "S", "M"));
        assert!(valid);
    }
}
