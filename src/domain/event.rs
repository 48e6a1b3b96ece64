//! Caller-supplied registration events
//!
//! A [`RegistrationEvent`] is what a registration or cancellation handler
//! hands to the audit logger after its primary action succeeds. It carries
//! plaintext identities; the logger encrypts them before anything is stored.

use serde::Deserialize;
use std::fmt;

use super::action::ActionKind;

/// Plaintext identity of a portal user
///
/// `Debug` output is redacted so identities never reach diagnostic logs by
/// accident.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Identity {
    /// Portal user id
    pub user_id: String,
    /// Brazilian taxpayer number (CPF)
    pub cpf: String,
    /// Display name
    pub name: String,
}

impl Identity {
    /// Creates a new identity
    pub fn new(
        user_id: impl Into<String>,
        cpf: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            cpf: cpf.into(),
            name: name.into(),
        }
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("user_id", &"[REDACTED]")
            .field("cpf", &"[REDACTED]")
            .field("name", &"[REDACTED]")
            .finish()
    }
}

/// A registration-affecting action to be audited
///
/// `action` is kept as the raw value received from the handler; the logger
/// validates it against [`ActionKind`] before doing any work. The timestamp
/// is not part of the event: the logger assigns it.
///
/// Deserializes from the portal's flat camelCase payload:
///
/// ```
/// use edital_audit::domain::RegistrationEvent;
///
/// let event: RegistrationEvent = serde_json::from_str(r#"{
///     "subjectUserId": "user123",
///     "subjectCpf": "12345678901",
///     "subjectName": "João Silva",
///     "actorUserId": "user123",
///     "actorCpf": "12345678901",
///     "actorName": "João Silva",
///     "action": "REGISTRATION",
///     "callTitle": "Edital Teste"
/// }"#).unwrap();
///
/// assert_eq!(event.call_title.as_deref(), Some("Edital Teste"));
/// assert!(event.call_code.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "EventPayload")]
pub struct RegistrationEvent {
    /// The registrant the action is about
    pub subject: Identity,
    /// The user who performed the action
    pub actor: Identity,
    /// Raw action value as supplied by the caller
    pub action: String,
    /// Edital title at the time of the action
    pub call_title: Option<String>,
    /// Stable edital code at the time of the action
    pub call_code: Option<String>,
}

impl RegistrationEvent {
    /// Creates an event with no call context
    pub fn new(action: ActionKind, subject: Identity, actor: Identity) -> Self {
        Self {
            subject,
            actor,
            action: action.as_str().to_string(),
            call_title: None,
            call_code: None,
        }
    }

    /// Creates an event where the registrant performed the action themselves
    pub fn self_service(action: ActionKind, subject: Identity) -> Self {
        let actor = subject.clone();
        Self::new(action, subject, actor)
    }

    /// Starts a builder for an event
    pub fn builder(action: impl Into<String>) -> RegistrationEventBuilder {
        RegistrationEventBuilder::new(action)
    }

    /// Sets the edital title
    pub fn with_call_title(mut self, title: impl Into<String>) -> Self {
        self.call_title = Some(title.into());
        self
    }

    /// Sets the edital code
    pub fn with_call_code(mut self, code: impl Into<String>) -> Self {
        self.call_code = Some(code.into());
        self
    }
}

/// Builder for [`RegistrationEvent`]
///
/// When no actor is given the subject is recorded as the actor.
#[derive(Debug, Default)]
pub struct RegistrationEventBuilder {
    action: String,
    subject: Identity,
    actor: Option<Identity>,
    call_title: Option<String>,
    call_code: Option<String>,
}

impl RegistrationEventBuilder {
    /// Creates a new builder for the given raw action value
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    /// Sets the registrant
    pub fn subject(mut self, subject: Identity) -> Self {
        self.subject = subject;
        self
    }

    /// Sets the user performing the action
    pub fn actor(mut self, actor: Identity) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Sets the edital title
    pub fn call_title(mut self, title: impl Into<String>) -> Self {
        self.call_title = Some(title.into());
        self
    }

    /// Sets the edital code
    pub fn call_code(mut self, code: impl Into<String>) -> Self {
        self.call_code = Some(code.into());
        self
    }

    /// Builds the event
    pub fn build(self) -> RegistrationEvent {
        let actor = self.actor.unwrap_or_else(|| self.subject.clone());
        RegistrationEvent {
            subject: self.subject,
            actor,
            action: self.action,
            call_title: self.call_title,
            call_code: self.call_code,
        }
    }
}

/// Flat wire shape sent by the portal handlers
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventPayload {
    #[serde(default)]
    subject_user_id: String,
    #[serde(default)]
    subject_cpf: String,
    #[serde(default)]
    subject_name: String,
    #[serde(default)]
    actor_user_id: String,
    #[serde(default)]
    actor_cpf: String,
    #[serde(default)]
    actor_name: String,
    action: String,
    #[serde(default)]
    call_title: Option<String>,
    #[serde(default)]
    call_code: Option<String>,
}

impl From<EventPayload> for RegistrationEvent {
    fn from(p: EventPayload) -> Self {
        Self {
            subject: Identity::new(p.subject_user_id, p.subject_cpf, p.subject_name),
            actor: Identity::new(p.actor_user_id, p.actor_cpf, p.actor_name),
            action: p.action,
            call_title: p.call_title,
            call_code: p.call_code,
        }
    }
}
