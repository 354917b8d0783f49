// ABOUTME: Wire types for the LinkedIn OAuth and profile endpoints
// ABOUTME: Token response, member id projection, and the member contact handles listing

use linkedpush_users::ContactHandle;
use serde::Deserialize;

use crate::error::{AuthError, AuthResult};

/// OAuth token response from LinkedIn
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>, // Seconds
}

/// `GET /v2/me?projection=(id)`
#[derive(Debug, Deserialize)]
pub struct MemberIdResponse {
    pub id: String,
}

/// `GET /v2/clientAwareMemberHandles`
#[derive(Debug, Deserialize)]
pub struct MemberHandlesResponse {
    #[serde(default)]
    pub elements: Vec<MemberHandle>,
}

#[derive(Debug, Deserialize)]
pub struct MemberHandle {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(rename = "handle~", default)]
    pub details: Option<HandleDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleDetails {
    pub email_address: Option<String>,
    pub phone_number: Option<PhoneNumber>,
}

#[derive(Debug, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
}

impl MemberHandlesResponse {
    /// The primary handle, or the first one when none is flagged primary
    pub fn primary_contact(self) -> AuthResult<ContactHandle> {
        let mut elements = self.elements;
        let index = elements.iter().position(|e| e.primary).unwrap_or(0);
        if elements.is_empty() {
            return Err(AuthError::MissingContactHandle);
        }
        elements.swap_remove(index).into_contact()
    }
}

impl MemberHandle {
    pub fn into_contact(self) -> AuthResult<ContactHandle> {
        let details = self.details.unwrap_or_default();
        match self.kind.as_str() {
            "EMAIL" => details
                .email_address
                .map(ContactHandle::Email)
                .ok_or(AuthError::MissingContactHandle),
            "PHONE" => details
                .phone_number
                .map(|p| ContactHandle::Phone(p.number))
                .ok_or(AuthError::MissingContactHandle),
            other => Err(AuthError::UnsupportedContactType(other.to_string())),
        }
    }
}
