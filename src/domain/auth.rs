use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, UserSubject};

/// Identity of the signed-in user as issued by the auth service.
///
/// Handlers receive it as an extractor and pass it explicitly to services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable user identifier; vendor profiles are keyed by it.
    pub sub: String,
    pub email: String,
    pub name: String,
}

impl AuthenticatedUser {
    /// Validated subject used to look up the user's vendor profile.
    pub fn subject(&self) -> Result<UserSubject, TypeConstraintError> {
        UserSubject::new(self.sub.as_str())
    }
}
