//! Service-account authentication, delegated to [yup-oauth2].
//!
//! [`ServiceAccountTokenSource`] owns a yup-oauth2 service-account authenticator for one scope.
//! Signing, token exchange, caching and refresh happen inside the authenticator.
//!
//! [yup-oauth2]: https://docs.rs/yup-oauth2

use bridge_core::AuthError;
use tracing::{debug, info};
use yup_oauth2::authenticator::DefaultAuthenticator;
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};

/// OAuth scope for acting as a Chat app.
pub const CHAT_BOT_SCOPE: &str = "https://www.googleapis.com/auth/chat.bot";

const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// Parses raw service-account key JSON.
pub fn parse_service_account_key(bytes: &[u8]) -> Result<ServiceAccountKey, AuthError> {
    let key = yup_oauth2::parse_service_account_key(bytes)
        .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
    if let Some(ref t) = key.key_type {
        if t != SERVICE_ACCOUNT_TYPE {
            return Err(AuthError::InvalidCredentials(format!(
                "expected type \"{}\", got \"{}\"",
                SERVICE_ACCOUNT_TYPE, t
            )));
        }
    }
    if key.client_email.trim().is_empty() {
        return Err(AuthError::InvalidCredentials("client_email is empty".to_string()));
    }
    Ok(key)
}

fn map_token_error(err: yup_oauth2::Error) -> AuthError {
    match err {
        yup_oauth2::Error::AuthError(e) => AuthError::TokenRejected(e.to_string()),
        other => AuthError::TokenRequest(other.to_string()),
    }
}

/// Access tokens for one service account and scope.
#[derive(Clone)]
pub struct ServiceAccountTokenSource {
    authenticator: DefaultAuthenticator,
    scope: String,
    client_email: String,
}

impl ServiceAccountTokenSource {
    /// Builds the authenticator. Fails with [`AuthError::InvalidKey`] if the private key is not
    /// usable for signing.
    pub async fn new(key: ServiceAccountKey, scope: impl Into<String>) -> Result<Self, AuthError> {
        let client_email = key.client_email.clone();
        let authenticator = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        Ok(Self {
            authenticator,
            scope: scope.into(),
            client_email,
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Returns a valid access token. The authenticator reuses its cached token until it is close
    /// to expiry.
    pub async fn token(&self) -> Result<String, AuthError> {
        debug!(client_email = %self.client_email, scope = %self.scope, "Requesting access token");
        let token = self
            .authenticator
            .token(&[self.scope.as_str()])
            .await
            .map_err(map_token_error)?;
        let value = token
            .token()
            .ok_or_else(|| AuthError::TokenRequest("token response has no access token".to_string()))?;
        info!(
            client_email = %self.client_email,
            expires_at = ?token.expiration_time(),
            "Access token obtained"
        );
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY_PEM: &str = include_str!("../tests/fixtures/test_service_account_key.pem");

    fn key_json(private_key: &str, token_uri: &str) -> Vec<u8> {
        serde_json::json!({
            "type": "service_account",
            "project_id": "demo",
            "private_key_id": "kid-1",
            "private_key": private_key,
            "client_email": "bridge@demo.iam.gserviceaccount.com",
            "token_uri": token_uri
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_parse_service_account_key() {
        let key = parse_service_account_key(&key_json(TEST_KEY_PEM, "https://t.example/token")).unwrap();
        assert_eq!(key.client_email, "bridge@demo.iam.gserviceaccount.com");
        assert_eq!(key.private_key_id.as_deref(), Some("kid-1"));
        assert_eq!(key.token_uri, "https://t.example/token");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            parse_service_account_key(b""),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            parse_service_account_key(br#"{"client_email": "x"}"#),
            Err(AuthError::InvalidCredentials(_))
        ));
        let wrong_type = serde_json::json!({
            "type": "authorized_user",
            "private_key": "k",
            "client_email": "x@y",
            "token_uri": "https://t.example/token"
        })
        .to_string();
        assert!(matches!(
            parse_service_account_key(wrong_type.as_bytes()),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[tokio::test]
    async fn test_new_rejects_non_pem_key() {
        let key = parse_service_account_key(&key_json("not a key", "https://t.example/token")).unwrap();
        let result = ServiceAccountTokenSource::new(key, CHAT_BOT_SCOPE).await;
        assert!(matches!(result, Err(AuthError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_new_accepts_rsa_key() {
        let key = parse_service_account_key(&key_json(TEST_KEY_PEM, "https://t.example/token")).unwrap();
        let source = ServiceAccountTokenSource::new(key, CHAT_BOT_SCOPE).await.unwrap();
        assert_eq!(source.client_email(), "bridge@demo.iam.gserviceaccount.com");
    }
}
