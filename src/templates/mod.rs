use tera::Tera;

mod filters;

pub const SITUATION_EMAIL_HTML: &str = "situation-email.html";
pub const SITUATION_EMAIL_TEXT: &str = "situation-email.txt";
pub const COMPTE_RENDU: &str = "compte-rendu.html";

/// Build the renderer holding every document and email template of the app.
/// Templates are compiled into the binary.
pub fn renderer() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            SITUATION_EMAIL_HTML,
            include_str!("../../templates/situation-email.html.tera"),
        ),
        (
            SITUATION_EMAIL_TEXT,
            include_str!("../../templates/situation-email.txt.tera"),
        ),
        (
            COMPTE_RENDU,
            include_str!("../../templates/compte-rendu.html.tera"),
        ),
    ])?;
    tera.register_filter("amount", filters::amount);
    tera.register_filter("french_date", filters::french_date);
    tera.register_filter("french_date_time", filters::french_date_time);

    Ok(tera)
}
