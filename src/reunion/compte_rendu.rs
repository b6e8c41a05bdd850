use crate::templates::COMPTE_RENDU;
use dto::reunion::{Presence, PresenceStatus, ReunionDetails};
use tera::{Context, Tera};

fn with_status(presences: &[Presence], status: PresenceStatus) -> Vec<&Presence> {
    presences
        .iter()
        .filter(|presence| *presence.status() == status)
        .collect()
}

/// Render the minutes of a meeting as an HTML document.
pub fn render_compte_rendu(tera: &Tera, club_name: &str, details: &ReunionDetails) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("club", club_name);
    context.insert("reunion", details.reunion());
    context.insert("presents", &with_status(details.presences(), PresenceStatus::Present));
    context.insert("excused", &with_status(details.presences(), PresenceStatus::Excused));
    context.insert("absents", &with_status(details.presences(), PresenceStatus::Absent));
    context.insert("invites", details.invites());
    context.insert("ordres_du_jour", details.ordres_du_jour());

    tera.render(COMPTE_RENDU, &context)
}

#[cfg(test)]
mod tests {
    use crate::reunion::compte_rendu::render_compte_rendu;
    use crate::templates::renderer;
    use chrono::NaiveDate;
    use dto::reunion::{InviteReunion, OrdreDuJour, Presence, PresenceStatus, Reunion, ReunionDetails};

    fn details(compte_rendu: Option<&str>) -> ReunionDetails {
        let reunion = Reunion::new(
            1,
            1,
            None,
            "Assemblée générale".to_owned(),
            NaiveDate::from_ymd_opt(2025, 10, 2).unwrap().and_hms_opt(19, 30, 0).unwrap(),
            Some("Salle des fêtes".to_owned()),
            "Ordinaire".to_owned(),
            compte_rendu.map(str::to_owned),
        );
        ReunionDetails::new(
            reunion,
            vec![OrdreDuJour::new(1, 1, 1, "Bilan moral".to_owned(), Some("Adopté".to_owned()))],
            vec![
                Presence::new(2, "Jon".to_owned(), "Doe".to_owned(), PresenceStatus::Present),
                Presence::new(3, "Jonette".to_owned(), "Snow".to_owned(), PresenceStatus::Present),
                Presence::new(4, "Jean".to_owned(), "Valjean".to_owned(), PresenceStatus::Excused),
            ],
            vec![InviteReunion::new(1, 1, "Le maire".to_owned(), None, Some("Mairie".to_owned()))],
        )
    }

    #[test]
    fn should_render_compte_rendu() {
        let tera = renderer().unwrap();
        let html = render_compte_rendu(&tera, "Rotary", &details(Some("Séance levée à 22h."))).unwrap();

        assert!(html.contains("<h1>Rotary</h1>"));
        assert!(html.contains("Ordinaire, le 02/10/2025 à 19h30 à Salle des fêtes"));
        assert!(html.contains("Présents : Jon Doe, Jonette Snow"));
        assert!(html.contains("Excusés : Jean Valjean"));
        assert!(!html.contains("Absents :"));
        assert!(html.contains("Le maire (Mairie)"));
        assert!(html.contains("<strong>Bilan moral</strong>"));
        assert!(html.contains("Séance levée à 22h."));
    }

    #[test]
    fn should_skip_missing_notes() {
        let tera = renderer().unwrap();
        let html = render_compte_rendu(&tera, "Rotary", &details(None)).unwrap();

        assert!(!html.contains("<h3>Notes</h3>"));
    }
}
