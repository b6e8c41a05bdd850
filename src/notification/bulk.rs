use crate::notification::error::EmailError;
use crate::notification::error::EmailError::{NoRecipient, TooManyRecipients};
use crate::notification::service::{EmailRequest, EmailService};
use crate::tools::env_args::retrieve_parsed_arg_value;
use derive_getters::Getters;
use dto::email::EmailSendingResult;
use log::{debug, warn};
use rocket::tokio::time::sleep;
use std::time::Duration;

pub const MAX_RECIPIENTS: usize = 100;
const EMAIL_DELAY_ARG: &str = "--email-delay-ms";
const DEFAULT_EMAIL_DELAY_MS: u64 = 1000;

/// Pacing of bulk sendings, so that the SMTP server doesn't throttle the app.
#[derive(Debug, Getters, Clone, Copy)]
pub struct BulkEmailConfig {
    delay: Duration,
}

impl BulkEmailConfig {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_args() -> Self {
        Self::new(Duration::from_millis(retrieve_parsed_arg_value(
            EMAIL_DELAY_ARG,
            DEFAULT_EMAIL_DELAY_MS,
        )))
    }
}

/// One email of a bulk sending, or the reason why it can't be sent.
#[derive(Debug)]
pub struct PreparedEmail {
    member_id: i32,
    email: Option<String>,
    request: Result<EmailRequest, String>,
}

impl PreparedEmail {
    pub fn ready(member_id: i32, email: String, request: EmailRequest) -> Self {
        Self {
            member_id,
            email: Some(email),
            request: Ok(request),
        }
    }

    pub fn unavailable(member_id: i32, email: Option<String>, reason: String) -> Self {
        Self {
            member_id,
            email,
            request: Err(reason),
        }
    }
}

/// Reject empty or oversized sendings, and drop repeated members while keeping their first position.
pub fn check_recipients(member_ids: &[i32]) -> Result<Vec<i32>, EmailError> {
    if member_ids.is_empty() {
        return Err(NoRecipient);
    }
    if member_ids.len() > MAX_RECIPIENTS {
        return Err(TooManyRecipients(MAX_RECIPIENTS));
    }

    let mut unique_ids = Vec::with_capacity(member_ids.len());
    for member_id in member_ids {
        if !unique_ids.contains(member_id) {
            unique_ids.push(*member_id);
        }
    }
    Ok(unique_ids)
}

/// Send the emails one after the other, waiting for the configured delay between two sends.
/// A failure is recorded and doesn't stop the sending.
pub async fn send_all(
    service: &dyn EmailService,
    emails: Vec<PreparedEmail>,
    config: &BulkEmailConfig,
) -> Vec<EmailSendingResult> {
    let mut results = Vec::with_capacity(emails.len());
    let mut first_send = true;
    for PreparedEmail {
        member_id,
        email,
        request,
    } in emails
    {
        let request = match request {
            Ok(request) => request,
            Err(reason) => {
                debug!("Email skipped [member_id: {member_id}, reason: {reason}]");
                results.push(EmailSendingResult::failed(member_id, email, reason));
                continue;
            }
        };

        if !first_send {
            sleep(*config.delay()).await;
        }
        first_send = false;

        let result = match service.send_simple_email(request).await {
            Ok(()) => EmailSendingResult::sent_to(member_id, email.unwrap_or_default()),
            Err(error) => {
                warn!("Email not sent [member_id: {member_id}, error: {error}]");
                EmailSendingResult::failed(member_id, email, error.to_string())
            }
        };
        results.push(result);
    }

    results
}

#[cfg(test)]
mod tests {
    mod check_recipients {
        use crate::notification::bulk::{MAX_RECIPIENTS, check_recipients};
        use crate::notification::error::EmailError::{NoRecipient, TooManyRecipients};

        #[test]
        fn success() {
            assert_eq!(Ok(vec![3, 1, 2]), check_recipients(&[3, 1, 3, 2, 1]));
        }

        #[test]
        fn accept_exactly_max_recipients() {
            let member_ids: Vec<i32> = (1..=MAX_RECIPIENTS as i32).collect();
            assert_eq!(Ok(member_ids.clone()), check_recipients(&member_ids));
        }

        #[test]
        fn fail_when_empty() {
            assert_eq!(Err(NoRecipient), check_recipients(&[]));
        }

        #[test]
        fn fail_when_too_many() {
            let member_ids: Vec<i32> = (0..=MAX_RECIPIENTS as i32).collect();
            assert_eq!(
                Err(TooManyRecipients(MAX_RECIPIENTS)),
                check_recipients(&member_ids)
            );
        }
    }

    mod send_all {
        use crate::notification::bulk::{BulkEmailConfig, PreparedEmail, send_all};
        use crate::notification::service::EmailRequest;
        use crate::notification::service::tests::RecordingEmailService;
        use dto::email::EmailSendingResult;
        use std::time::{Duration, Instant};

        fn prepared(member_id: i32, email: &str) -> PreparedEmail {
            let request = EmailRequest::new(
                vec![email.to_owned()],
                "Subject".to_owned(),
                "Body".to_owned(),
                None,
            );
            PreparedEmail::ready(member_id, email.to_owned(), request)
        }

        #[async_test]
        async fn keep_going_after_failure() {
            let service = RecordingEmailService::failing_for(vec!["b@email.com".to_owned()]);
            let emails = vec![
                prepared(1, "a@email.com"),
                prepared(2, "b@email.com"),
                PreparedEmail::unavailable(3, None, "No cotisation".to_owned()),
                prepared(4, "d@email.com"),
            ];

            let results =
                send_all(&service, emails, &BulkEmailConfig::new(Duration::ZERO)).await;

            assert_eq!(
                vec![
                    EmailSendingResult::sent_to(1, "a@email.com".to_owned()),
                    EmailSendingResult::failed(
                        2,
                        Some("b@email.com".to_owned()),
                        "Can't send message.".to_owned()
                    ),
                    EmailSendingResult::failed(3, None, "No cotisation".to_owned()),
                    EmailSendingResult::sent_to(4, "d@email.com".to_owned()),
                ],
                results
            );
            assert_eq!(2, service.sent.lock().unwrap().len());
        }

        #[async_test]
        async fn wait_between_sends() {
            let service = RecordingEmailService::default();
            let emails = vec![
                prepared(1, "a@email.com"),
                prepared(2, "b@email.com"),
                prepared(3, "c@email.com"),
            ];
            let delay = Duration::from_millis(30);

            let start = Instant::now();
            send_all(&service, emails, &BulkEmailConfig::new(delay)).await;

            assert!(start.elapsed() >= delay * 2);
            assert_eq!(3, service.sent.lock().unwrap().len());
        }
    }
}
