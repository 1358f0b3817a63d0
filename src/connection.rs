use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const SCHEME: &str = "mongodb+srv";
pub const HOST: &str = "a03-movies.sok38.mongodb.net";
pub const APP_NAME: &str = "A03-Movies";
pub const DATABASE_NAME: &str = "A03-Movies";
pub const COLLECTION_NAME: &str = "fullmovies";

/// User identifier and secret as typed at the prompts. Both may be empty.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    user_id: String,
    secret: String,
}

impl Credentials {
    /// Surrounding whitespace is trimmed; nothing else is validated.
    pub fn new(user_id: &str, secret: &str) -> Self {
        Self { user_id: user_id.trim().to_string(), secret: secret.trim().to_string() }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Connection string for the fixed cluster. Values are interpolated as typed.
    /// It embeds the secret, so it is wiped on drop like the credentials.
    #[must_use]
    pub fn connection_string(&self) -> Zeroizing<String> {
        Zeroizing::new(format_target(&self.user_id, &self.secret))
    }

    /// Same target with the secret masked, for log lines.
    #[must_use]
    pub fn redacted_connection_string(&self) -> String {
        format_target(&self.user_id, "***REDACTED***")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("secret", &"***REDACTED***")
            .finish()
    }
}

fn format_target(user_id: &str, secret: &str) -> String {
    format!("{SCHEME}://{user_id}:{secret}@{HOST}/?retryWrites=true&w=majority&appName={APP_NAME}")
}
