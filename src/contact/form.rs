use crate::{
    contact::{
        payload::{ContactFields, ContactPayload, RelayResponse},
        relay::ContactRelay,
    },
    foundation::error::{FolioError, FolioResult},
};

/// Seconds the success notice stays up.
pub const SUCCESS_NOTICE_SECS: f64 = 5.0;

/// Shown to the visitor whenever a submission fails.
pub const FAILURE_NOTICE: &str =
    "Failed to send message. Please try again or contact me directly via email.";

/// Which input a keystroke targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
    /// Subject line.
    Subject,
    /// Message body.
    Message,
}

/// Submission state of the contact form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    /// Accepting input.
    Editing,
    /// A submission is in flight; inputs are locked.
    Submitting,
    /// Delivered; the success notice clears after `remaining_secs`.
    Submitted {
        /// Time left on the notice.
        remaining_secs: f64,
    },
    /// Delivery failed; the visitor can dismiss the error and retry.
    Failed {
        /// Relay or transport detail.
        detail: String,
    },
}

/// Contact form with a single in-flight submission at a time.
#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    access_key: String,
}

impl ContactForm {
    /// Empty form that will submit with `access_key`.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Editing,
            access_key: access_key.into(),
        }
    }

    /// Current inputs.
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Current status.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// `false` only while a submission is in flight.
    pub fn is_editable(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    /// Replace one input. Ignored while submitting.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Subject => &mut self.fields.subject,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.into();
        true
    }

    /// Validate inputs and lock the form. Returns the payload to send.
    pub fn begin_submit(&mut self) -> FolioResult<ContactPayload> {
        if self.status == FormStatus::Submitting {
            return Err(FolioError::validation("a submission is already in flight"));
        }
        if self.access_key.trim().is_empty() {
            return Err(FolioError::validation("relay access key is not configured"));
        }
        self.fields.validate()?;
        self.status = FormStatus::Submitting;
        Ok(ContactPayload::new(self.access_key.clone(), &self.fields))
    }

    /// Record the relay outcome of the in-flight submission.
    ///
    /// Success clears the inputs and shows the notice; anything else keeps the inputs so the
    /// visitor can retry.
    pub fn finish_submit(&mut self, outcome: FolioResult<RelayResponse>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match outcome {
            Ok(RelayResponse { success: true, .. }) => {
                self.fields = ContactFields::default();
                self.status = FormStatus::Submitted {
                    remaining_secs: SUCCESS_NOTICE_SECS,
                };
                tracing::info!("contact message delivered");
            }
            Ok(RelayResponse { message, .. }) => {
                let detail = message.unwrap_or_else(|| "Form submission failed".to_owned());
                tracing::warn!(%detail, "relay rejected contact message");
                self.status = FormStatus::Failed { detail };
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                self.status = FormStatus::Failed {
                    detail: e.to_string(),
                };
            }
        }
    }

    /// Validate, send through `relay`, and record the outcome.
    pub fn submit(&mut self, relay: &impl ContactRelay) -> FolioResult<&FormStatus> {
        let payload = self.begin_submit()?;
        let outcome = relay.submit(&payload);
        self.finish_submit(outcome);
        Ok(&self.status)
    }

    /// Close the failure message.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, FormStatus::Failed { .. }) {
            self.status = FormStatus::Editing;
        }
    }

    /// Visitor-facing notice for the current status, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Submitted { .. } => Some("Message sent! I'll get back to you soon."),
            FormStatus::Failed { .. } => Some(FAILURE_NOTICE),
            FormStatus::Editing | FormStatus::Submitting => None,
        }
    }

    /// Count down the success notice.
    pub fn tick(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        if let FormStatus::Submitted { remaining_secs } = &mut self.status {
            *remaining_secs -= dt;
            if *remaining_secs <= 0.0 {
                self.status = FormStatus::Editing;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;
