use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::hooks::use_visibility;
use crate::animation::visibility::VisibilityOptions;
use crate::components::parallax::ParallaxLayer;
use crate::components::reveal::{Entrance, Reveal};
use crate::i18n::catalog::Translator;
use crate::i18n::provider::use_translation;

const PAGE: f64 = 5.0;

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3008.4056168749555!2d28.976063715405994!3d41.00824397929847!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x14cab9be92011c27%3A0x236e6383c4d0a37e!2sLevent%2C%20Istanbul%2C%20Turkey!5e0!3m2!1sen!2str!4v1625000000000!5m2!1sen!2str";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.key())]
    Required(Field),
    #[error("email address has no @")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }

    fn message(&self, tr: &Translator) -> String {
        match self {
            FieldError::Required(_) => tr.t("form.required"),
            FieldError::InvalidEmail => tr.t("form.invalid_email"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Every field is required and the email needs an `@`.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors: Vec<FieldError> = Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .map(FieldError::Required)
            .collect();
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push(FieldError::InvalidEmail);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
struct Hours {
    days: String,
    time: String,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let tr = use_translation("contact");
    let section = use_node_ref();
    let visible = use_visibility(section.clone(), VisibilityOptions::section());

    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let sent = use_state(|| false);

    let on_input = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.iter().any(|e| e.field() == field) {
                errors.set(errors.iter().filter(|e| e.field() != field).cloned().collect());
            }
            sent.set(false);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    let dump = serde_json::to_string(&*form).unwrap_or_default();
                    gloo_console::log!("Form submitted:", dump);
                    info!("Contact form accepted");
                    form.set(ContactForm::default());
                    errors.set(Vec::new());
                    sent.set(true);
                }
                Err(found) => {
                    info!("Contact form rejected: {} problem(s)", found.len());
                    errors.set(found);
                    sent.set(false);
                }
            }
        })
    };

    let error_for = |field: Field| -> Html {
        match errors.iter().find(|e| e.field() == field) {
            Some(error) => html! { <p class="field-error">{ error.message(&tr) }</p> },
            None => html! {},
        }
    };

    let text_input = |field: Field, kind: &'static str| -> Html {
        let oninput = {
            let emit = on_input(field);
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                emit.emit(input.value());
            })
        };
        let key = field.key();
        html! {
            <div class="field">
                <label for={key}>{ tr.t(&format!("form.{}_label", key)) }{ " *" }</label>
                <input
                    type={kind}
                    id={key}
                    name={key}
                    value={form.get(field).to_string()}
                    placeholder={tr.t(&format!("form.{}_placeholder", key))}
                    {oninput}
                />
                { error_for(field) }
            </div>
        }
    };

    let message_input = {
        let emit = on_input(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            emit.emit(input.value());
        })
    };

    let address_lines: Vec<String> = tr.list("info.address_lines");
    let hours: Vec<Hours> = tr.list("hours.rows");

    html! {
        <>
            <ParallaxLayer offset={PAGE} speed={0.1} decorative={true}>
                <div class="contact-backdrop"></div>
            </ParallaxLayer>

            <ParallaxLayer offset={PAGE} speed={0.5} class="section">
                <section id="contact" ref={section} class="section-inner">
                    <Reveal {visible} entrance={Entrance::Rise(50)} class="section-header">
                        <h2 class="section-title">
                            { tr.t("title") }{" "}
                            <span class="highlight">{ tr.t("title_highlight") }</span>
                        </h2>
                        <p class="section-subtitle">{ tr.t("subtitle") }</p>
                    </Reveal>

                    <div class="contact-columns">
                        <Reveal {visible} entrance={Entrance::Slide(-50)} delay_ms={200} class="card">
                            <h3 class="subheading">{ tr.t("form.title") }</h3>
                            <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                                <div class="field-row">
                                    { text_input(Field::Name, "text") }
                                    { text_input(Field::Email, "email") }
                                </div>
                                { text_input(Field::Subject, "text") }
                                <div class="field">
                                    <label for="message">{ tr.t("form.message_label") }{ " *" }</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="6"
                                        value={form.message.clone()}
                                        placeholder={tr.t("form.message_placeholder")}
                                        oninput={message_input}
                                    />
                                    { error_for(Field::Message) }
                                </div>
                                <button type="submit" class="submit">{ tr.t("form.submit") }</button>
                                if *sent {
                                    <p class="form-thanks" role="status">{ tr.t("form.thanks") }</p>
                                }
                            </form>
                        </Reveal>

                        <Reveal {visible} entrance={Entrance::Slide(50)} delay_ms={400} class="contact-side">
                            <div class="card">
                                <h3 class="subheading">{ tr.t("info.title") }</h3>
                                <div class="info-row">
                                    <span class="info-icon">{ "📍" }</span>
                                    <div>
                                        <div class="info-label">{ tr.t("info.address_label") }</div>
                                        { for address_lines.iter().map(|line| html! { <div class="info-value">{ line }</div> }) }
                                    </div>
                                </div>
                                <div class="info-row">
                                    <span class="info-icon">{ "📞" }</span>
                                    <div>
                                        <div class="info-label">{ tr.t("info.phone_label") }</div>
                                        <div class="info-value">{ tr.t("info.phone") }</div>
                                    </div>
                                </div>
                                <div class="info-row">
                                    <span class="info-icon">{ "✉️" }</span>
                                    <div>
                                        <div class="info-label">{ tr.t("info.email_label") }</div>
                                        <a class="info-value" href={format!("mailto:{}", tr.t("info.email"))}>{ tr.t("info.email") }</a>
                                    </div>
                                </div>
                            </div>

                            <div class="card">
                                <h4 class="card-title">{ tr.t("hours.title") }</h4>
                                { for hours.iter().map(|row| html! {
                                    <div class="hours-row">
                                        <span>{ &row.days }</span>
                                        <span>{ &row.time }</span>
                                    </div>
                                })}
                            </div>

                            <div class="card map-card">
                                <h4 class="card-title">{ tr.t("map.title") }</h4>
                                <div class="map-frame">
                                    <iframe
                                        src={MAP_EMBED}
                                        title={tr.t("map.iframe_title")}
                                        loading="lazy"
                                        referrerpolicy="no-referrer-when-downgrade"
                                    />
                                </div>
                                <div class="map-caption">
                                    <strong>{ tr.t("map.city") }</strong>
                                    <span>{ tr.t("map.district") }</span>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </section>
            </ParallaxLayer>

            <style>
                {r#"
                    .contact-backdrop {
                        position: absolute;
                        inset: 0;
                        height: 100vh;
                        background: linear-gradient(135deg, rgba(0, 0, 0, 0.04), transparent 50%);
                        pointer-events: none;
                    }
                    .contact-columns {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: start;
                    }
                    .contact-side { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                    .field-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.25rem; }
                    .field label { display: block; font-size: 0.9rem; font-weight: 500; margin-bottom: 0.5rem; }
                    .field input, .field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border: 2px solid rgba(0, 0, 0, 0.1);
                        border-radius: 6px;
                        font: inherit;
                        background: #fff;
                        transition: border-color 0.3s ease;
                    }
                    .field input:focus, .field textarea:focus { outline: none; border-color: rgba(0, 0, 0, 0.4); }
                    .field textarea { resize: none; }
                    .field-error { color: #b91c1c; font-size: 0.8rem; margin-top: 0.35rem; }
                    .submit {
                        background: var(--black);
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 1rem 2rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .submit:hover { background: var(--grey); }
                    .form-thanks {
                        padding: 0.75rem 1rem;
                        border-radius: 6px;
                        background: #ecfdf5;
                        color: #065f46;
                    }
                    .info-row { display: flex; gap: 1rem; margin-bottom: 1.25rem; }
                    .info-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        background: var(--black);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .info-label { font-weight: 500; margin-bottom: 0.25rem; }
                    .info-value { color: var(--grey); display: block; }
                    .card-title { font-weight: 600; margin-bottom: 1rem; }
                    .hours-row { display: flex; justify-content: space-between; color: var(--grey); margin-bottom: 0.5rem; }
                    .map-card { padding: 0; overflow: hidden; }
                    .map-card .card-title { padding: 1rem 1rem 0; }
                    .map-frame { height: 16rem; }
                    .map-frame iframe { width: 100%; height: 100%; border: 0; }
                    .map-caption { display: flex; justify-content: space-between; padding: 0.75rem 1rem; font-size: 0.85rem; color: var(--grey); }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(FieldError::field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert!(!errors.contains(&FieldError::InvalidEmail));
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let mut form = filled();
        form.subject = "   ".to_string();
        assert_eq!(form.validate(), Err(vec![FieldError::Required(Field::Subject)]));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled();
        form.email = "ada.example.com".to_string();
        assert_eq!(form.validate(), Err(vec![FieldError::InvalidEmail]));
    }

    #[test]
    fn errors_read_as_sentences() {
        assert_eq!(FieldError::Required(Field::Email).to_string(), "email is required");
        assert_eq!(FieldError::InvalidEmail.field(), Field::Email);
    }

    #[test]
    fn fields_are_set_by_name() {
        let mut form = ContactForm::default();
        form.set(Field::Message, "hi".to_string());
        assert_eq!(form.get(Field::Message), "hi");
        assert_eq!(form.get(Field::Name), "");
    }
}
