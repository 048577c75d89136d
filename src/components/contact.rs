//! Contact section: the form, its submission flow, and the status banner.

use gloo_console::{error, log};
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::state::contact::{ContactAction, ContactFields, ContactForm, Field, SubmitOutcome, SubmitStatus};

#[derive(Deserialize)]
struct ContactResponse {
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Posts the form to the intake endpoint and folds the reply into an outcome.
/// Never errors out of the submission flow; every failure becomes state.
async fn submit_contact(fields: &ContactFields) -> SubmitOutcome {
    match Request::post(&format!("{}/api/contact", config::api_base_url()))
        .json(fields)
        .unwrap()
        .send()
        .await
    {
        Ok(response) => {
            if response.ok() {
                match response.json::<ContactResponse>().await {
                    Ok(body) => SubmitOutcome::Accepted { message: body.message },
                    Err(err) => {
                        error!("Unreadable contact response:", err.to_string());
                        SubmitOutcome::Failed
                    }
                }
            } else {
                log!("Contact submission rejected with status:", response.status());
                match response.json::<ErrorResponse>().await {
                    Ok(body) => SubmitOutcome::Rejected { error: body.error },
                    Err(_) => SubmitOutcome::Failed,
                }
            }
        }
        Err(err) => {
            error!("Contact request failed:", err.to_string());
            SubmitOutcome::Failed
        }
    }
}

fn status_class(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "idle",
        SubmitStatus::Submitting => "submitting",
        SubmitStatus::Success => "success",
        SubmitStatus::Error => "error",
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The browser's required-field validation runs before this fires;
            // the gate also keeps a second submit inert while one is in flight.
            if !form.can_submit() {
                return;
            }
            let payload = form.fields.clone();
            form.dispatch(ContactAction::SubmitStarted);
            let form = form.clone();
            spawn_local(async move {
                let outcome = submit_contact(&payload).await;
                form.dispatch(ContactAction::Resolved(outcome));
            });
        })
    };

    let edit = {
        let form = form.clone();
        move |field: Field| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch(ContactAction::Edit(field, input.value()));
            })
        }
    };

    let edit_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    html! {
        <section id="contact" class="card-section contact-section">
            <h2>{"Contact us"}</h2>
            <div class="contact-wrapper">
                <form class="contact-form" onsubmit={onsubmit}>
                    <label>
                        <span>{"Name"}</span>
                        <input
                            type="text"
                            value={form.fields.name.clone()}
                            oninput={edit(Field::Name)}
                            placeholder="Your name"
                            required=true
                        />
                    </label>
                    <label>
                        <span>{"Institution Name"}</span>
                        <input
                            type="text"
                            value={form.fields.institution.clone()}
                            oninput={edit(Field::Institution)}
                            placeholder="School or institution"
                            required=true
                        />
                    </label>
                    <label>
                        <span>{"Email"}</span>
                        <input
                            type="email"
                            value={form.fields.email.clone()}
                            oninput={edit(Field::Email)}
                            placeholder="you@example.com"
                            required=true
                        />
                    </label>
                    <label>
                        <span>{"Address"}</span>
                        <input
                            type="text"
                            value={form.fields.address.clone()}
                            oninput={edit(Field::Address)}
                            placeholder="City, State"
                        />
                    </label>
                    <label>
                        <span>{"Message"}</span>
                        <textarea
                            rows="4"
                            value={form.fields.message.clone()}
                            oninput={edit_message}
                            placeholder="What do you need help with?"
                            required=true
                        />
                    </label>
                    <button type="submit" disabled={form.is_submitting()}>
                        { if form.is_submitting() { "Sending…" } else { "Send message" } }
                    </button>
                    {
                        if !form.feedback.is_empty() {
                            html! {
                                <div class={classes!("feedback", status_class(form.status))}>
                                    { form.feedback.clone() }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </form>
                <div class="contact-note">
                    <div class="note-card">
                        <div class="note-title">{"Why contact?"}</div>
                        <p>{"We onboard schools gradually. Reach out to see the live product or to join the early cohort."}</p>
                        <p class="note-meta">{"Responses within one business day."}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
