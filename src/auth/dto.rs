use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::validation::{is_valid_email, ValidationErrors, Validator};

/// Request body for user registration. Fields are optional so validation can
/// report every missing one instead of failing at deserialization.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

/// Validated registration data, ready to persist.
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<NewUser, ValidationErrors> {
        let mut v = Validator::new();

        if let Some(email) = v.require("email", &self.email, "Email is required") {
            if !is_valid_email(email) {
                v.fail("email", "Please enter a valid email address");
            }
        }
        if let Some(password) = v.require("password", &self.password, "Password is required") {
            if password.len() < 5 {
                v.fail("password", "Password must be at least 5 characters long");
            }
        }
        v.require("fullName", &self.full_name, "Full name is required");
        v.require("phone", &self.phone, "Phone is required");

        v.finish()?;
        Ok(NewUser {
            email: self.email.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            full_name: self.full_name.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
        })
    }
}

/// Request body for login. Missing fields fall through to the generic
/// invalid-credentials answer rather than a field error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response for register and login.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub user: PublicUser,
}

/// Response for token refresh; the new refresh token travels in the cookie.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
