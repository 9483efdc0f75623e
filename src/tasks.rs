//! State for the three request flows: inspiration, chat and the contact form.
//!
//! Every transition here is synchronous. Whatever has to go over the network is
//! returned to the caller, which turns it into an effect; the completion comes
//! back later as an `Outcome`.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{ChatMessage, ContactSubmission, Inspiration};
use crate::network::NetworkError;
use crate::prompts::{CHAT_ERROR_REPLY, CHAT_GREETING, fallback_inspiration};
use crate::utils::is_valid_email;

pub const FORM_STATUS_NOTICE: &str = "Oops! There was a problem submitting your form. Please try again.";
pub const FORM_NETWORK_NOTICE: &str = "Oops! There was a network error. Please try again later.";

/// Completion of an async flow.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    /// The call failed and a fixed substitute stands in for the result.
    Recovered(T),
    Failed(NetworkError),
}

impl<T> Outcome<T> {
    pub fn from_result(result: Result<T, NetworkError>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Failed(err),
        }
    }

    /// Substitutes `fallback()` for any failure.
    pub fn recover_with(result: Result<T, NetworkError>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => {
                warn!(error = %err, "request failed, using fallback");
                Outcome::Recovered(fallback())
            }
        }
    }
}

/// Single in-flight request flag for one flow.
#[derive(Debug, Default)]
pub struct InFlight(bool);

impl InFlight {
    pub fn try_acquire(&mut self) -> bool {
        if self.0 {
            return false;
        }
        self.0 = true;
        true
    }

    pub fn release(&mut self) {
        self.0 = false;
    }

    pub fn is_busy(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct InspirationState {
    current: Option<Inspiration>,
    loading: bool,
    issued: u64,
}

impl InspirationState {
    pub fn current(&self) -> Option<&Inspiration> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a fetch and returns its request number. Nothing is de-duplicated.
    pub fn request(&mut self) -> u64 {
        self.loading = true;
        self.issued += 1;
        debug!(request = self.issued, "inspiration requested");
        self.issued
    }

    /// Applies a completion. Whichever finishes last is what stays on screen.
    pub fn complete(&mut self, request: u64, outcome: Outcome<Inspiration>) {
        let inspiration = match outcome {
            Outcome::Ok(value) | Outcome::Recovered(value) => value,
            Outcome::Failed(err) => {
                warn!(request, error = %err, "inspiration failed");
                fallback_inspiration()
            }
        };
        debug!(request, topic = %inspiration.topic, "inspiration ready");
        self.current = Some(inspiration);
        self.loading = false;
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

pub struct ChatState {
    transcript: Vec<ChatMessage>,
    typing: InFlight,
    pub draft: String,
    pub open: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(CHAT_GREETING)],
            typing: InFlight::default(),
            draft: String::new(),
            open: false,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_busy()
    }

    /// Appends the user turn and returns the text to send, or `None` when nothing should go out.
    pub fn send(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || !self.typing.try_acquire() {
            return None;
        }
        self.transcript.push(ChatMessage::user(text));
        Some(text.to_string())
    }

    /// Sends the draft, clearing it only when the message actually went out.
    pub fn send_draft(&mut self) -> Option<String> {
        let draft = std::mem::take(&mut self.draft);
        match self.send(&draft) {
            Some(message) => Some(message),
            None => {
                self.draft = draft;
                None
            }
        }
    }

    pub fn receive(&mut self, outcome: Outcome<String>) {
        if !self.typing.is_busy() {
            warn!("chat reply arrived with no message pending");
            return;
        }
        let reply = match outcome {
            Outcome::Ok(text) | Outcome::Recovered(text) => text,
            Outcome::Failed(err) => {
                warn!(error = %err, "chat request failed");
                CHAT_ERROR_REPLY.to_string()
            }
        };
        self.transcript.push(ChatMessage::assistant(reply));
        self.typing.release();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please tell me your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
}

pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    if submission.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if submission.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if submission.message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct ContactFormState {
    fields: ContactSubmission,
    active_field: FormField,
    submitting: InFlight,
    submitted: bool,
    ticket: u64,
    validation: Option<ValidationError>,
    notice: Option<&'static str>,
}

impl ContactFormState {
    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Message => &self.fields.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Message => &mut self.fields.message,
        }
    }

    pub fn active_field(&self) -> FormField {
        self.active_field
    }

    pub fn focus_next(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn focus_previous(&mut self) {
        self.active_field = self.active_field.previous();
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.active_field;
        self.field_mut(field).push(c);
        self.validation = None;
    }

    pub fn pop_char(&mut self) {
        let field = self.active_field;
        self.field_mut(field).pop();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn validation(&self) -> Option<ValidationError> {
        self.validation
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Validates and marks the form as submitting. Returns the payload to post.
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting.is_busy() {
            debug!("submit ignored, request in flight");
            return None;
        }
        if let Err(err) = validate(&self.fields) {
            debug!(error = %err, "contact form rejected");
            self.validation = Some(err);
            return None;
        }
        self.validation = None;
        self.submitting.try_acquire();
        Some(ContactSubmission {
            name: self.fields.name.trim().to_string(),
            email: self.fields.email.trim().to_string(),
            message: self.fields.message.clone(),
        })
    }

    /// Applies the endpoint's answer. On success returns the ticket for the reset timer.
    pub fn complete(&mut self, outcome: Outcome<()>) -> Option<u64> {
        self.submitting.release();
        match outcome {
            Outcome::Ok(()) | Outcome::Recovered(()) => {
                self.fields = ContactSubmission::default();
                self.active_field = FormField::Name;
                self.submitted = true;
                self.ticket += 1;
                Some(self.ticket)
            }
            Outcome::Failed(err) => {
                warn!(error = %err, "contact form submission failed");
                self.notice = Some(match err {
                    NetworkError::Status { .. } => FORM_STATUS_NOTICE,
                    _ => FORM_NETWORK_NOTICE,
                });
                None
            }
        }
    }

    /// Ends the success window, unless a newer submission owns it.
    pub fn window_elapsed(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.submitted = false;
        } else {
            debug!(ticket, current = self.ticket, "stale success reset ignored");
        }
    }

    pub fn dismiss_submitted(&mut self) {
        self.submitted = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::FALLBACK_TOPIC;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn fill(form: &mut ContactFormState, name: &str, email: &str, message: &str) {
        for (field, text) in FormField::ALL.into_iter().zip([name, email, message]) {
            form.active_field = field;
            text.chars().for_each(|c| form.push_char(c));
        }
        form.active_field = FormField::Name;
    }

    fn filled_form(name: &str, email: &str, message: &str) -> ContactFormState {
        let mut form = ContactFormState::default();
        fill(&mut form, name, email, message);
        form
    }

    #[test]
    fn submitted_payload_has_trimmed_name_and_email() {
        let mut form = filled_form(" Ada ", "  ada@example.com ", "Hi there");
        let payload = form.submit().unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.message, "Hi there");
        // The form keeps what was typed until the endpoint answers.
        assert_eq!(form.field(FormField::Email), "  ada@example.com ");
    }

    fn sample(topic: &str) -> Inspiration {
        Inspiration {
            topic: topic.into(),
            challenge: "Do something bold.".into(),
        }
    }

    #[test]
    fn inspiration_loading_clears_on_every_completion() {
        let mut state = InspirationState::default();
        let first = state.request();
        assert!(state.is_loading());
        state.complete(first, Outcome::Recovered(fallback_inspiration()));
        assert!(!state.is_loading());
        assert_eq!(state.current().map(|i| i.topic.as_str()), Some(FALLBACK_TOPIC));
    }

    #[test]
    fn inspiration_last_completion_wins() {
        let mut state = InspirationState::default();
        let a = state.request();
        let b = state.request();
        assert_ne!(a, b);
        state.complete(b, Outcome::Ok(sample("second")));
        state.complete(a, Outcome::Ok(sample("first")));
        assert_eq!(state.current().unwrap().topic, "first");
    }

    #[test]
    fn inspiration_failure_shows_fallback() {
        let mut state = InspirationState::default();
        let id = state.request();
        state.complete(id, Outcome::Failed(NetworkError::MissingApiKey));
        assert_eq!(state.current(), Some(&fallback_inspiration()));
        state.dismiss();
        assert_eq!(state.current(), None);
    }

    #[test]
    fn recover_with_substitutes_on_error() {
        let outcome = Outcome::recover_with(Err(NetworkError::Transport("down".into())), || 7);
        assert_eq!(outcome, Outcome::Recovered(7));
        assert_eq!(
            Outcome::<()>::from_result(Err(NetworkError::MissingApiKey)),
            Outcome::Failed(NetworkError::MissingApiKey)
        );
    }

    #[test]
    fn chat_starts_with_greeting() {
        let chat = ChatState::new();
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript()[0].text, CHAT_GREETING);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_chat_input_is_ignored(#[case] text: &str) {
        let mut chat = ChatState::new();
        assert_eq!(chat.send(text), None);
        assert_eq!(chat.transcript().len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn chat_send_is_blocked_while_typing() {
        let mut chat = ChatState::new();
        assert_eq!(chat.send(" hello "), Some("hello".to_string()));
        assert!(chat.is_typing());
        assert_eq!(chat.send("again"), None);
        assert_eq!(chat.transcript().len(), 2);
    }

    #[test]
    fn chat_failure_appends_error_reply() {
        let mut chat = ChatState::new();
        chat.send("hello");
        chat.receive(Outcome::Failed(NetworkError::Status {
            status: 500,
            body: String::new(),
        }));
        let last = chat.transcript().last().unwrap();
        assert_eq!(last.text, CHAT_ERROR_REPLY);
        assert!(!chat.is_typing());
    }

    #[test]
    fn unexpected_chat_reply_is_dropped() {
        let mut chat = ChatState::new();
        chat.receive(Outcome::Ok("out of nowhere".into()));
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn draft_is_kept_when_send_is_refused() {
        let mut chat = ChatState::new();
        chat.draft = "first".into();
        assert!(chat.send_draft().is_some());
        assert!(chat.draft.is_empty());
        chat.draft = "second".into();
        assert_eq!(chat.send_draft(), None);
        assert_eq!(chat.draft, "second");
    }

    #[rstest]
    #[case("", "a@b.co", "hi", ValidationError::MissingName)]
    #[case("  ", "a@b.co", "hi", ValidationError::MissingName)]
    #[case("Ada", "", "hi", ValidationError::MissingEmail)]
    #[case("Ada", "not-an-email", "hi", ValidationError::InvalidEmail)]
    #[case("Ada", "a@b.co", "   ", ValidationError::MissingMessage)]
    fn invalid_forms_never_submit(
        #[case] name: &str,
        #[case] email: &str,
        #[case] message: &str,
        #[case] expected: ValidationError,
    ) {
        let mut form = filled_form(name, email, message);
        assert_eq!(form.submit(), None);
        assert_eq!(form.validation(), Some(expected));
        assert!(!form.is_submitting());
    }

    #[test]
    fn valid_form_submits_once() {
        let mut form = filled_form("Ada", "ada@example.com", "Hello there");
        let payload = form.submit().unwrap();
        assert_eq!(payload.email, "ada@example.com");
        assert!(form.is_submitting());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn success_clears_fields_and_returns_ticket() {
        let mut form = filled_form("Ada", "ada@example.com", "Hello there");
        form.submit();
        let ticket = form.complete(Outcome::Ok(())).unwrap();
        assert!(form.is_submitted());
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &ContactSubmission::default());

        form.window_elapsed(ticket);
        assert!(!form.is_submitted());
    }

    #[test]
    fn stale_reset_does_not_clear_newer_submission() {
        let mut form = filled_form("Ada", "ada@example.com", "first");
        form.submit();
        let first = form.complete(Outcome::Ok(())).unwrap();
        form.dismiss_submitted();

        fill(&mut form, "Ada", "ada@example.com", "second");
        form.submit();
        let second = form.complete(Outcome::Ok(())).unwrap();
        assert_ne!(first, second);

        form.window_elapsed(first);
        assert!(form.is_submitted());
        form.window_elapsed(second);
        assert!(!form.is_submitted());
    }

    #[rstest]
    #[case(NetworkError::Status { status: 422, body: "{}".into() }, FORM_STATUS_NOTICE)]
    #[case(NetworkError::Transport("connection refused".into()), FORM_NETWORK_NOTICE)]
    fn failure_keeps_fields_and_raises_notice(#[case] err: NetworkError, #[case] notice: &str) {
        let mut form = filled_form("Ada", "ada@example.com", "Hello there");
        form.submit();
        assert_eq!(form.complete(Outcome::Failed(err)), None);
        assert_eq!(form.notice(), Some(notice));
        assert!(!form.is_submitted());
        assert!(!form.is_submitting());
        assert_eq!(form.fields().name, "Ada");

        form.dismiss_notice();
        assert_eq!(form.notice(), None);
    }
}
