//! Contact form state machine.

use std::rc::Rc;

use serde::Serialize;
use yew::Reducible;

pub const DEFAULT_SUCCESS_FEEDBACK: &str = "Message sent. We will reach out.";
pub const DEFAULT_REJECTED_FEEDBACK: &str = "Unable to submit";
pub const DEFAULT_FAILURE_FEEDBACK: &str = "Something went wrong.";

/// Body of `POST /api/contact`, serialized with these exact keys.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub institution: String,
    pub address: String,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Institution,
    Address,
    Message,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// How a submission attempt resolved.
///
/// `Rejected` is a parsed non-2xx reply; `Failed` covers transport errors and
/// bodies that are not valid JSON, whatever the status code.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    Accepted { message: Option<String> },
    Rejected { error: Option<String> },
    Failed,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ContactAction {
    Edit(Field, String),
    SubmitStarted,
    Resolved(SubmitOutcome),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmitStatus,
    pub feedback: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmitStatus::Idle,
            feedback: String::new(),
        }
    }
}

impl ContactForm {
    /// True when a new submission may start: nothing in flight and every
    /// required field (all but `address`) is filled in.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting && !self.missing_required()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    fn missing_required(&self) -> bool {
        self.fields.name.is_empty()
            || self.fields.email.is_empty()
            || self.fields.institution.is_empty()
            || self.fields.message.is_empty()
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => {
                let slot = match field {
                    Field::Name => &mut self.fields.name,
                    Field::Email => &mut self.fields.email,
                    Field::Institution => &mut self.fields.institution,
                    Field::Address => &mut self.fields.address,
                    Field::Message => &mut self.fields.message,
                };
                *slot = value;
            }
            ContactAction::SubmitStarted => {
                if self.can_submit() {
                    self.status = SubmitStatus::Submitting;
                    self.feedback.clear();
                }
            }
            ContactAction::Resolved(outcome) => {
                // A resolution only makes sense for the request we started.
                if self.status != SubmitStatus::Submitting {
                    return;
                }
                match outcome {
                    SubmitOutcome::Accepted { message } => {
                        self.status = SubmitStatus::Success;
                        self.feedback = non_empty(message)
                            .unwrap_or_else(|| DEFAULT_SUCCESS_FEEDBACK.to_string());
                        self.fields = ContactFields::default();
                    }
                    SubmitOutcome::Rejected { error } => {
                        self.status = SubmitStatus::Error;
                        self.feedback = non_empty(error)
                            .unwrap_or_else(|| DEFAULT_REJECTED_FEEDBACK.to_string());
                    }
                    SubmitOutcome::Failed => {
                        self.status = SubmitStatus::Error;
                        self.feedback = DEFAULT_FAILURE_FEEDBACK.to_string();
                    }
                }
            }
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Edit(Field::Name, "Asha".into()));
        form.apply(ContactAction::Edit(Field::Email, "asha@school.test".into()));
        form.apply(ContactAction::Edit(Field::Institution, "Sunrise Public School".into()));
        form.apply(ContactAction::Edit(Field::Message, "Please show us a demo.".into()));
        form
    }

    #[test]
    fn edits_keep_last_value_and_leave_status_alone() {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Edit(Field::Name, "A".into()));
        form.apply(ContactAction::Edit(Field::Name, "Ab".into()));
        form.apply(ContactAction::Edit(Field::Address, "Pune".into()));
        form.apply(ContactAction::Edit(Field::Name, "Abc".into()));

        assert_eq!(form.fields.name, "Abc");
        assert_eq!(form.fields.address, "Pune");
        assert_eq!(form.fields.email, "");
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn submit_is_gated_on_required_fields() {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Edit(Field::Name, "Asha".into()));
        form.apply(ContactAction::Edit(Field::Email, "asha@school.test".into()));
        // institution and message still empty
        assert!(!form.can_submit());

        form.apply(ContactAction::SubmitStarted);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn address_is_optional() {
        let form = filled_form();
        assert!(form.fields.address.is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn at_most_one_submission_in_flight() {
        let mut form = filled_form();
        form.apply(ContactAction::SubmitStarted);
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert!(!form.can_submit());

        let snapshot = form.clone();
        form.apply(ContactAction::SubmitStarted);
        assert_eq!(form, snapshot);
    }

    #[test]
    fn edits_are_allowed_while_submitting() {
        let mut form = filled_form();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Edit(Field::Address, "Mumbai".into()));
        assert_eq!(form.fields.address, "Mumbai");
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn accepted_resets_fields_and_uses_server_message() {
        let mut form = filled_form();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Resolved(SubmitOutcome::Accepted {
            message: Some("Thanks! Talk soon.".into()),
        }));

        assert_eq!(form.status, SubmitStatus::Success);
        assert_eq!(form.feedback, "Thanks! Talk soon.");
        assert_eq!(form.fields, ContactFields::default());
    }

    #[test]
    fn accepted_without_message_falls_back_to_default() {
        let mut form = filled_form();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Resolved(SubmitOutcome::Accepted { message: None }));
        assert_eq!(form.feedback, DEFAULT_SUCCESS_FEEDBACK);

        // An empty string from the server counts as absent.
        let mut form = filled_form();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Resolved(SubmitOutcome::Accepted {
            message: Some(String::new()),
        }));
        assert_eq!(form.feedback, DEFAULT_SUCCESS_FEEDBACK);
    }

    #[test]
    fn rejected_preserves_fields_and_surfaces_server_error() {
        let mut form = filled_form();
        let typed = form.fields.clone();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Resolved(SubmitOutcome::Rejected {
            error: Some("Institution already registered".into()),
        }));

        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.feedback, "Institution already registered");
        assert_eq!(form.fields, typed);
    }

    #[test]
    fn rejected_without_error_uses_generic_message() {
        let mut form = filled_form();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Resolved(SubmitOutcome::Rejected { error: None }));
        assert_eq!(form.feedback, DEFAULT_REJECTED_FEEDBACK);
    }

    #[test]
    fn transport_failure_uses_generic_message_and_keeps_fields() {
        let mut form = filled_form();
        let typed = form.fields.clone();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Resolved(SubmitOutcome::Failed));

        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.feedback, DEFAULT_FAILURE_FEEDBACK);
        assert_eq!(form.fields, typed);
    }

    #[test]
    fn retry_after_error_clears_old_feedback() {
        let mut form = filled_form();
        form.apply(ContactAction::SubmitStarted);
        form.apply(ContactAction::Resolved(SubmitOutcome::Failed));
        assert!(!form.feedback.is_empty());

        form.apply(ContactAction::SubmitStarted);
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert!(form.feedback.is_empty());
    }

    #[test]
    fn stray_resolution_outside_submitting_is_ignored() {
        let mut form = filled_form();
        let snapshot = form.clone();
        form.apply(ContactAction::Resolved(SubmitOutcome::Failed));
        assert_eq!(form, snapshot);
    }

    #[test]
    fn request_body_carries_exactly_the_wire_keys() {
        let body = serde_json::to_value(&filled_form().fields).unwrap();
        let object = body.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["address", "email", "institution", "message", "name"]);
    }
}
