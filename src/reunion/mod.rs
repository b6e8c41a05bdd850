use crate::database::dao;
use crate::database::model::reunion::ListePresence;
use crate::database::model::user::User;
use crate::error::{ApplicationError, Result};
use diesel::SqliteConnection;
use dto::reunion::{NewReunion, Presence, PresenceUpdate, ReunionDetails};

pub mod compte_rendu;

/// Check a new meeting before creating it: a title and, when given, a mandat of the same club.
pub fn check_new_reunion(connection: &mut SqliteConnection, club_id: i32, new_reunion: &NewReunion) -> Result<()> {
    check_title(new_reunion.title())?;
    if let Some(mandat_id) = new_reunion.mandat_id() {
        dao::mandat::get_mandat(connection, club_id, *mandat_id)?;
    }
    if new_reunion
        .ordres_du_jour()
        .iter()
        .any(|item| item.subject().trim().is_empty())
    {
        return Err(ApplicationError::bad_request("Every agenda item needs a subject."));
    }
    if new_reunion
        .invites()
        .iter()
        .any(|invite| invite.name().trim().is_empty())
    {
        return Err(ApplicationError::bad_request("Every invitee needs a name."));
    }
    Ok(())
}

pub fn check_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ApplicationError::bad_request("The title is required."));
    }
    Ok(())
}

/// Only members of the club can appear in the attendance list.
pub fn check_presences(updates: &[PresenceUpdate], club_member_ids: &[i32]) -> Result<()> {
    match updates
        .iter()
        .find(|update| !club_member_ids.contains(update.member_id()))
    {
        Some(update) => Err(ApplicationError::bad_request(format!(
            "User {} isn't a member of the club.",
            update.member_id()
        ))),
        None => Ok(()),
    }
}

pub(crate) fn build_presences(presences: Vec<(ListePresence, User)>) -> Result<Vec<Presence>> {
    presences
        .into_iter()
        .map(|(presence, user)| -> Result<Presence> {
            Ok(Presence::new(
                *presence.member_id(),
                user.first_name().clone(),
                user.last_name().clone(),
                presence.parsed_status()?,
            ))
        })
        .collect()
}

/// Gather the meeting with its agenda, attendance and invitees.
pub fn get_details(connection: &mut SqliteConnection, club_id: i32, reunion_id: i32) -> Result<ReunionDetails> {
    let reunion = dao::reunion::get_reunion(connection, club_id, reunion_id)?;
    let ordres_du_jour = dao::reunion::get_ordres_du_jour(connection, reunion_id)?
        .into_iter()
        .map(Into::into)
        .collect();
    let presences = build_presences(dao::reunion::get_presences(connection, reunion_id)?)?;
    let invites = dao::reunion::get_invites(connection, reunion_id)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(ReunionDetails::new(
        reunion.try_into()?,
        ordres_du_jour,
        presences,
        invites,
    ))
}

#[cfg(test)]
mod tests {
    mod check_presences {
        use crate::reunion::check_presences;
        use dto::reunion::{PresenceStatus, PresenceUpdate};

        #[test]
        fn success() {
            let updates = vec![
                PresenceUpdate::new(1, PresenceStatus::Present),
                PresenceUpdate::new(2, PresenceStatus::Excused),
            ];
            assert!(check_presences(&updates, &[1, 2, 3]).is_ok());
        }

        #[test]
        fn fail_for_stranger() {
            let updates = vec![PresenceUpdate::new(4, PresenceStatus::Absent)];
            assert!(check_presences(&updates, &[1, 2, 3]).is_err());
        }
    }

    mod check_new_reunion {
        use crate::database::fixtures::{create_club_with_admin, insert_mandat, insert_user};
        use crate::database::{connect, with_temp_database};
        use crate::error::ApplicationError;
        use crate::reunion::check_new_reunion;
        use chrono::NaiveDate;
        use dto::reunion::{NewOrdreDuJour, NewReunion};

        fn new_reunion(title: &str, mandat_id: Option<i32>, subjects: Vec<&str>) -> NewReunion {
            NewReunion::new(
                title.to_owned(),
                NaiveDate::from_ymd_opt(2025, 10, 2).unwrap().and_hms_opt(19, 30, 0).unwrap(),
                None,
                None,
                mandat_id,
                subjects
                    .into_iter()
                    .map(|subject| NewOrdreDuJour::new(subject.to_owned(), None))
                    .collect(),
                vec![],
            )
        }

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let mandat = insert_mandat(&mut connection, *club.id(), "2025-2026", true);

                let reunion = new_reunion("AG", Some(*mandat.id()), vec!["Bilan"]);
                assert!(check_new_reunion(&mut connection, *club.id(), &reunion).is_ok());
            })
        }

        #[test]
        fn fail_without_title() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let reunion = new_reunion(" ", None, vec![]);
                assert!(matches!(
                    check_new_reunion(&mut connection, 1, &reunion),
                    Err(ApplicationError::BadRequest(_))
                ));
            })
        }

        #[test]
        fn fail_with_empty_agenda_item() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let reunion = new_reunion("AG", None, vec!["Bilan", ""]);
                assert!(check_new_reunion(&mut connection, 1, &reunion).is_err());
            })
        }

        #[test]
        fn fail_with_mandat_of_other_club() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let other = create_club_with_admin(&mut connection, "Other", *admin.id());
                let mandat = insert_mandat(&mut connection, *other.id(), "2025-2026", true);

                let reunion = new_reunion("AG", Some(*mandat.id()), vec![]);
                assert!(matches!(
                    check_new_reunion(&mut connection, *club.id(), &reunion),
                    Err(ApplicationError::Database(_))
                ));
            })
        }
    }

    mod get_details {
        use crate::database::dao;
        use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
        use crate::database::{connect, with_temp_database};
        use crate::reunion::get_details;
        use chrono::NaiveDate;
        use dto::club::Role;
        use dto::reunion::{NewInviteReunion, NewOrdreDuJour, NewReunion, PresenceStatus, PresenceUpdate};

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);
                let new_reunion = NewReunion::new(
                    "AG".to_owned(),
                    NaiveDate::from_ymd_opt(2025, 10, 2).unwrap().and_hms_opt(19, 30, 0).unwrap(),
                    Some("Salle des fêtes".to_owned()),
                    None,
                    None,
                    vec![
                        NewOrdreDuJour::new("Bilan".to_owned(), None),
                        NewOrdreDuJour::new("Gala".to_owned(), Some("Date à fixer".to_owned())),
                    ],
                    vec![NewInviteReunion::new("Le maire".to_owned(), None, Some("Mairie".to_owned()))],
                );
                let reunion = dao::reunion::create_reunion(&mut connection, *club.id(), &new_reunion).unwrap();
                dao::reunion::save_presences(
                    &mut connection,
                    *reunion.id(),
                    &[PresenceUpdate::new(*member.id(), PresenceStatus::Excused)],
                )
                .unwrap();

                let details = get_details(&mut connection, *club.id(), *reunion.id()).unwrap();

                assert_eq!("Ordinaire", details.reunion().kind());
                assert_eq!(2, details.ordres_du_jour().len());
                assert_eq!(&2, details.ordres_du_jour()[1].position());
                assert_eq!(1, details.presences().len());
                assert_eq!(&PresenceStatus::Excused, details.presences()[0].status());
                assert_eq!("Le maire", details.invites()[0].name());
            })
        }
    }
}
