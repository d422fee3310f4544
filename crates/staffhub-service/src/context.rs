//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use staffhub_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the API layer after the bearer token has been resolved and
/// passed into service methods so every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The acting user as loaded at resolution time.
    pub actor: User,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context for `actor`.
    pub fn new(actor: User) -> Self {
        Self {
            actor,
            request_time: Utc::now(),
        }
    }

    /// The acting user's ID.
    pub fn user_id(&self) -> Uuid {
        self.actor.user_id
    }

    /// Returns whether the acting user holds the superuser role.
    pub fn is_superuser(&self) -> bool {
        self.actor.is_superuser()
    }
}
