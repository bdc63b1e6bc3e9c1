// ABOUTME: Signed-in user identity used to partition saved recipes
// ABOUTME: Carries the id, email, display name, and optional backend access token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The person a store operation is performed for
///
/// The local store partitions by `email`, the remote store by `id`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user id (the email for local-only users)
    pub id: String,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Bearer token for row-level security on the hosted backend
    #[serde(skip)]
    pub access_token: Option<String>,
}

impl User {
    /// A local-only user, identified by email
    pub fn local(name: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: email.clone(),
            email,
            name: name.into(),
            access_token: None,
        }
    }

    /// A user known to the hosted backend
    pub fn remote(id: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: id.into(),
            name: display_name_from_email(&email),
            email,
            access_token: None,
        }
    }

    /// Attach the backend access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// Email prefix before `@`, used when no name was given
#[must_use]
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
