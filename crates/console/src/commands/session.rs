use anyhow::{Context, bail};
use client::{ApiClient, Session};

/// Gate for every protected command: without a stored token the command is
/// turned away towards `login`. The token is not validated here; a stale one
/// is caught by the first rejected call.
pub fn ensure_authenticated(session: &Session) -> anyhow::Result<()> {
    if !session.is_authenticated() {
        bail!("no active session; run `sumo-admin login` first");
    }
    Ok(())
}

pub async fn login(api: &ApiClient, email: &str, password: &str) -> anyhow::Result<()> {
    if api.session().is_authenticated() {
        bail!("a session is already active; run `sumo-admin logout` to switch accounts");
    }

    api.login(email, password).await.context("login failed")?;
    tracing::info!("Signed in as {}", email);
    Ok(())
}

pub fn logout(api: &ApiClient) -> anyhow::Result<()> {
    api.logout().context("could not clear the session")?;
    tracing::info!("Session cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn guard_turns_away_unauthenticated_commands() {
        let session = Session::in_memory();
        assert!(ensure_authenticated(&session).is_err());

        session.set_token("abc123").unwrap();
        assert!(ensure_authenticated(&session).is_ok());
    }

    #[tokio::test]
    async fn login_is_refused_while_a_session_is_active() {
        let session = Session::in_memory();
        session.set_token("abc123").unwrap();
        // The guard fires before any request is built, so the URL is never
        // dialed.
        let api = ApiClient::new("http://127.0.0.1:9", Arc::new(session));

        let err = login(&api, "a@x.com", "secret").await.unwrap_err();
        assert!(err.to_string().contains("already active"));
    }

    #[test]
    fn logout_clears_the_session() {
        let session = Arc::new(Session::in_memory());
        session.set_token("abc123").unwrap();
        let api = ApiClient::new("http://127.0.0.1:9", session.clone());

        logout(&api).unwrap();
        assert!(!session.is_authenticated());
    }
}
