use crate::notification::service::EmailRequest;
use crate::templates::{SITUATION_EMAIL_HTML, SITUATION_EMAIL_TEXT};
use dto::cotisation::Situation;
use tera::{Context, Tera};

/// Build the email telling a member where they stand with their cotisation.
pub fn build_situation_email(
    tera: &Tera,
    club_name: &str,
    situation: &Situation,
) -> tera::Result<EmailRequest> {
    let mut context = Context::new();
    context.insert("first_name", situation.member().first_name());
    context.insert("club", club_name);
    context.insert("mandat", situation.mandat().label());
    context.insert("amount_cents", situation.amount_cents());
    context.insert("paid_cents", situation.paid_cents());
    context.insert("remaining_cents", situation.remaining_cents());
    context.insert("paiements", situation.paiements());

    let html_body = tera.render(SITUATION_EMAIL_HTML, &context)?;
    let text_body = tera.render(SITUATION_EMAIL_TEXT, &context)?;
    let subject = format!(
        "Cotisation {} - {}",
        situation.mandat().label(),
        club_name
    );

    Ok(EmailRequest::new(
        vec![situation.member().email().clone()],
        subject,
        text_body,
        Some(html_body),
    ))
}
