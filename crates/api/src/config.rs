use crate::auth::jwt::JwtConfig;

/// Default request body limit: the media host's 10 MiB per-image limit
/// times a handful of images per gallery upload.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seconds to wait for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Largest accepted request body in bytes.
    pub max_upload_bytes: usize,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Account created at startup when the users table is empty.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Credentials for the first dashboard account.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `30`                       |
    /// | `MAX_UPLOAD_BYTES`         | `67108864`                 |
    /// | `BOOTSTRAP_ADMIN_USERNAME` | unset (no bootstrap)       |
    /// | `BOOTSTRAP_ADMIN_PASSWORD` | unset (no bootstrap)       |
    /// | `BOOTSTRAP_ADMIN_EMAIL`    | empty                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let bootstrap_admin = bootstrap_admin(
            std::env::var("BOOTSTRAP_ADMIN_USERNAME").ok(),
            std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
            std::env::var("BOOTSTRAP_ADMIN_EMAIL").ok(),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            max_upload_bytes,
            jwt: JwtConfig::from_env(),
            bootstrap_admin,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Both a username and a password are needed; either one alone is ignored.
fn bootstrap_admin(
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
) -> Option<BootstrapAdmin> {
    let username = username.filter(|u| !u.trim().is_empty())?;
    let password = password.filter(|p| !p.is_empty())?;
    Some(BootstrapAdmin {
        username: username.trim().to_string(),
        password,
        email: email.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" https://goldleafscapes.com , ,http://localhost:5173"),
            vec!["https://goldleafscapes.com", "http://localhost:5173"]
        );
    }

    #[test]
    fn bootstrap_needs_username_and_password() {
        assert!(bootstrap_admin(Some("admin".into()), None, None).is_none());
        assert!(bootstrap_admin(None, Some("secret".into()), None).is_none());
        assert!(bootstrap_admin(Some("  ".into()), Some("secret".into()), None).is_none());

        let admin = bootstrap_admin(Some(" admin ".into()), Some("secret".into()), None)
            .expect("both values set");
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.email, "");
    }

    #[test]
    fn bootstrap_debug_hides_password() {
        let admin = BootstrapAdmin {
            username: "admin".into(),
            password: "hunter2hunter2".into(),
            email: String::new(),
        };
        assert!(!format!("{admin:?}").contains("hunter2"));
    }
}
