use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum EmailError {
    #[error("Missing email sender name.")]
    MissingEmailSenderName,
    #[error("Missing email sender address.")]
    MissingEmailSenderAddress,
    #[error("Missing SMTP login.")]
    MissingSmtpLogin,
    #[error("Missing SMTP password.")]
    MissingSmtpPassword,
    #[error("Can't connect to SMTP server.")]
    CantConnectToSmtpServer,
    #[error("Can't send message.")]
    CantSendMessage,
    #[error("At least one member is expected.")]
    NoRecipient,
    #[error("No more than {0} emails can be sent at once.")]
    TooManyRecipients(usize),
}

impl EmailError {
    /// Errors caused by the request rather than by the server.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, EmailError::NoRecipient | EmailError::TooManyRecipients(_))
    }
}
