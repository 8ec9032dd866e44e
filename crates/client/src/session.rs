use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

/// Holds the bearer token for the current operator session.
///
/// The token lives in an in-memory slot and, when a token file is configured,
/// on disk, so it survives between invocations of the console. All reads and
/// writes go through this type; nothing else touches the stored credential.
pub struct Session {
    token: RwLock<Option<String>>,
    token_file: Option<PathBuf>,
}

impl Session {
    /// A session that is never persisted. Used for the public views and tests.
    pub fn in_memory() -> Self {
        Self {
            token: RwLock::new(None),
            token_file: None,
        }
    }

    /// A session backed by a token file, loading any previously stored token.
    pub fn with_file(path: PathBuf) -> Self {
        let token = std::fs::read_to_string(&path)
            .ok()
            .map(|contents| contents.trim().to_string())
            .filter(|token| !token.is_empty());

        if token.is_some() {
            tracing::debug!("Loaded session token from {}", path.display());
        }

        Self {
            token: RwLock::new(token),
            token_file: Some(path),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    pub fn set_token(&self, token: &str) -> io::Result<()> {
        *self.token.write().unwrap() = Some(token.to_string());

        if let Some(path) = &self.token_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, token)?;
            tracing::debug!("Stored session token at {}", path.display());
        }

        Ok(())
    }

    pub fn clear(&self) -> io::Result<()> {
        *self.token.write().unwrap() = None;

        if let Some(path) = &self.token_file {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_file() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("session-test-{}-{}.token", std::process::id(), n))
    }

    #[test]
    fn set_token_writes_memory_and_file() {
        let path = temp_file();
        let session = Session::with_file(path.clone());
        assert!(!session.is_authenticated());

        session.set_token("abc123").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc123");

        session.clear().unwrap();
        assert!(session.token().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn with_file_loads_existing_token() {
        let path = temp_file();
        std::fs::write(&path, "stored\n").unwrap();

        let session = Session::with_file(path.clone());
        assert_eq!(session.token().as_deref(), Some("stored"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn clear_without_file_is_ok() {
        let session = Session::with_file(temp_file());
        session.clear().unwrap();

        let session = Session::in_memory();
        session.set_token("tok").unwrap();
        session.clear().unwrap();
        assert!(session.token().is_none());
    }
}
