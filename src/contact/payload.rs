use crate::foundation::error::{FolioError, FolioResult};

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactFields {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactFields {
    /// Check that every field is filled in and the email looks like an address.
    pub fn validate(&self) -> FolioResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FolioError::validation(format!("{field} is required")));
            }
        }
        let Some((local, domain)) = self.email.trim().split_once('@') else {
            return Err(FolioError::validation("email must contain '@'"));
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(FolioError::validation(format!(
                "email '{}' is not an address",
                self.email
            )));
        }
        Ok(())
    }
}

/// JSON body posted to the form relay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactPayload {
    /// Relay account key.
    pub access_key: String,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Display name on the delivered email; always the sender name.
    pub from_name: String,
}

impl ContactPayload {
    /// Build the relay body for `fields`.
    pub fn new(access_key: impl Into<String>, fields: &ContactFields) -> Self {
        Self {
            access_key: access_key.into(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
            from_name: fields.name.clone(),
        }
    }
}

/// Relay reply. Anything other than `success: true` is a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RelayResponse {
    /// Whether the relay accepted the message.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/contact/payload.rs"]
mod tests;
