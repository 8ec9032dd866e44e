use validator::Validate;

use crate::error::{ClientError, Result};
use crate::http::ApiClient;
use crate::models::LoginRequest;

impl ApiClient {
    /// Exchange credentials for a bearer token and store it in the session.
    ///
    /// Nothing is stored when the backend rejects the credentials or answers
    /// without a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let token = self.post_text("/auth/login", &request).await?;
        if token.is_empty() {
            return Err(ClientError::UnexpectedResponse(
                "login succeeded but no token was returned".to_string(),
            ));
        }

        self.session().set_token(&token)?;
        tracing::debug!("Session token stored");
        Ok(token)
    }

    /// Drop the stored session token. Purely local; the backend keeps no
    /// server-side session to invalidate.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()?;
        Ok(())
    }
}
