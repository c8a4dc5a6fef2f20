use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsPayload {
    to: RawPhoneNumber,
    from: SenderId,
    message: MessageText,
}

impl SmsPayload {
    pub fn new(to: RawPhoneNumber, from: SenderId, message: MessageText) -> Self {
        Self { to, from, message }
    }

    /// Build a payload from untyped parts.
    ///
    /// Fails with [`ValidationError::EmptyPayload`] when every part is blank, and with
    /// [`ValidationError::Missing`] naming the first blank part otherwise.
    pub fn from_parts(
        to: impl Into<String>,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (to, from, message) = (to.into(), from.into(), message.into());
        if [&to, &from, &message].iter().all(|it| it.trim().is_empty()) {
            return Err(ValidationError::EmptyPayload);
        }
        Ok(Self {
            to: RawPhoneNumber::new(to)?,
            from: SenderId::new(from)?,
            message: MessageText::new(message)?,
        })
    }

    pub fn recipient(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}
