use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;

/// Signs an HS256 bearer token accepted by the API auth layer.
pub fn issue_token(secret: &str, subject: &str, role: Option<&str>, ttl_secs: usize) -> Result<String> {
    let exp = crate::utils::time::now().timestamp().max(0) as usize + ttl_secs;
    let claims = Claims {
        sub: subject.to_string(),
        exp,
        role: role.map(str::to_string),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}
