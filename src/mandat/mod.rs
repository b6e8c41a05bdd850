use crate::database::dao;
use crate::database::model::mandat::Mandat;
use crate::database::model::parse_date;
use crate::error::{ApplicationError, Result};
use crate::tools::check_max_amount;
use diesel::{Connection, SqliteConnection};
use dto::mandat::{NewMandat, TransitionReport, TransitionRequest};
use log::{debug, warn};

pub fn check_mandat(new_mandat: &NewMandat) -> Result<()> {
    if new_mandat.label().trim().is_empty() {
        return Err(ApplicationError::bad_request("The label is required."));
    }
    if new_mandat.start_date() >= new_mandat.end_date() {
        return Err(ApplicationError::bad_request(
            "The start date must be before the end date.",
        ));
    }
    if new_mandat
        .default_cotisation_cents()
        .is_some_and(|amount| amount <= 0)
    {
        return Err(ApplicationError::bad_request(
            "The default cotisation must be positive.",
        ));
    }
    if let Some(amount) = *new_mandat.default_cotisation_cents() {
        check_max_amount(amount)?;
    }
    Ok(())
}

/// The next mandat has to start after the one currently active.
pub(crate) fn check_transition(new_mandat: &NewMandat, active: Option<&Mandat>) -> Result<()> {
    check_mandat(new_mandat)?;
    if let Some(active) = active {
        let active_start = parse_date(active.start_date())?;
        if *new_mandat.start_date() <= active_start {
            warn!(
                "Refusing transition to a mandat starting on {} [active start: {}]",
                new_mandat.start_date(),
                active_start
            );
            return Err(ApplicationError::bad_request(
                "The new mandat must start after the active one.",
            ));
        }
    }
    Ok(())
}

/// Create the next mandat of the club, carry over what was asked and make it the active one.
pub fn transition(
    connection: &mut SqliteConnection,
    club_id: i32,
    request: &TransitionRequest,
) -> Result<TransitionReport> {
    connection.transaction(|connection| {
        let previous = dao::mandat::get_active_mandat(connection, club_id)?;
        check_transition(request.mandat(), previous.as_ref())?;

        let mandat = dao::mandat::insert_mandat(connection, club_id, request.mandat(), false)?;

        let mut commission_members_carried = 0;
        let mut rubriques_carried = 0;
        if let Some(previous) = &previous {
            if *request.carry_over_commissions() {
                commission_members_carried =
                    carry_over_commissions(connection, club_id, previous, &mandat, request)?;
            }
            if *request.carry_over_budget() {
                rubriques_carried = carry_over_budget(connection, previous, &mandat)?;
            }
        }

        dao::mandat::activate(connection, club_id, *mandat.id())?;
        debug!(
            "Club {club_id} moved to mandat {} [commission members: {commission_members_carried}, rubriques: {rubriques_carried}]",
            mandat.id()
        );

        let previous_mandat_id = previous.map(|previous| *previous.id());
        let mandat = dao::mandat::get_mandat(connection, club_id, *mandat.id())?;
        Ok(TransitionReport::new(
            previous_mandat_id,
            mandat.try_into()?,
            commission_members_carried,
            rubriques_carried,
        ))
    })
}

fn carry_over_commissions(
    connection: &mut SqliteConnection,
    club_id: i32,
    previous: &Mandat,
    mandat: &Mandat,
    request: &TransitionRequest,
) -> Result<usize> {
    let membres = dao::commission::get_active_membres_of_mandat(connection, club_id, *previous.id())?;
    for membre in &membres {
        dao::commission::insert_membre(
            connection,
            *membre.commission_id(),
            *membre.member_id(),
            *mandat.id(),
            *membre.is_responsable(),
            *request.mandat().start_date(),
        )?;
    }
    Ok(membres.len())
}

fn carry_over_budget(connection: &mut SqliteConnection, previous: &Mandat, mandat: &Mandat) -> Result<usize> {
    let rubriques = dao::budget::get_rubriques(connection, *previous.id())?;
    for rubrique in &rubriques {
        dao::budget::insert_rubrique(
            connection,
            *rubrique.sous_category_id(),
            *mandat.id(),
            rubrique.name(),
            *rubrique.planned_cents(),
        )?;
    }
    Ok(rubriques.len())
}

#[cfg(test)]
mod tests {
    mod check_mandat {
        use crate::mandat::check_mandat;
        use chrono::NaiveDate;
        use dto::mandat::NewMandat;
        use parameterized::{ide, parameterized};

        ide!();

        fn new_mandat(label: &str, end_day: u32, default: Option<i64>) -> NewMandat {
            NewMandat::new(
                label.to_owned(),
                NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, end_day).unwrap(),
                default,
            )
        }

        #[parameterized(
            label = {"2025-2026", "2025-2026", "", "  ", "2025-2026", "2025-2026", "2025-2026", "2025-2026"},
            end_day = {30, 30, 30, 30, 10, 1, 30, 30},
            default = {Some(5_000), None, None, None, None, None, Some(0), Some(i64::MAX)},
            expected_ok = {true, true, false, false, false, false, false, false}
        )]
        fn check(label: &str, end_day: u32, default: Option<i64>, expected_ok: bool) {
            assert_eq!(expected_ok, check_mandat(&new_mandat(label, end_day, default)).is_ok());
        }
    }

    mod transition {
        use crate::database::dao;
        use crate::database::fixtures::{create_club_with_admin, insert_mandat, insert_member, insert_user};
        use crate::database::{connect, with_temp_database};
        use crate::error::ApplicationError;
        use crate::mandat::transition;
        use chrono::NaiveDate;
        use dto::club::Role;
        use dto::mandat::{NewMandat, TransitionRequest};

        fn next_mandat(start_year: i32) -> NewMandat {
            NewMandat::new(
                format!("{start_year}-{}", start_year + 1),
                NaiveDate::from_ymd_opt(start_year, 9, 1).unwrap(),
                NaiveDate::from_ymd_opt(start_year + 1, 8, 31).unwrap(),
                Some(6_000),
            )
        }

        #[test]
        fn success_with_carry_over() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);
                let previous = insert_mandat(&mut connection, *club.id(), "2025-2026", true);

                let commission = dao::commission::insert_commission(&mut connection, *club.id(), "Fêtes", None).unwrap();
                let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
                dao::commission::insert_membre(&mut connection, *commission.id(), *admin.id(), *previous.id(), true, start).unwrap();
                let leaving = dao::commission::insert_membre(&mut connection, *commission.id(), *member.id(), *previous.id(), false, start).unwrap();
                dao::commission::deactivate_membre(&mut connection, *leaving.id()).unwrap();

                let types = dao::budget::get_types(&mut connection).unwrap();
                let category = dao::budget::insert_category(&mut connection, *club.id(), *types[0].id(), "Soirées").unwrap();
                let sous_category = dao::budget::insert_sous_category(&mut connection, *category.id(), "Gala").unwrap();
                dao::budget::insert_rubrique(&mut connection, *sous_category.id(), *previous.id(), "Billetterie", 150_000).unwrap();

                let request = TransitionRequest::new(next_mandat(2026), true, true);
                let report = transition(&mut connection, *club.id(), &request).unwrap();

                assert_eq!(&Some(*previous.id()), report.previous_mandat_id());
                assert_eq!(&1, report.commission_members_carried());
                assert_eq!(&1, report.rubriques_carried());
                assert!(*report.mandat().active());

                let active = dao::mandat::get_active_mandat(&mut connection, *club.id()).unwrap().unwrap();
                assert_eq!(report.mandat().id(), active.id());

                let membres = dao::commission::get_active_membres(&mut connection, *commission.id(), *active.id()).unwrap();
                assert_eq!(1, membres.len());
                assert!(*membres[0].0.is_responsable());

                let rubriques = dao::budget::get_rubriques(&mut connection, *active.id()).unwrap();
                assert_eq!(&150_000, rubriques[0].planned_cents());
            })
        }

        #[test]
        fn success_without_carry_over() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let previous = insert_mandat(&mut connection, *club.id(), "2025-2026", true);
                let types = dao::budget::get_types(&mut connection).unwrap();
                let category = dao::budget::insert_category(&mut connection, *club.id(), *types[0].id(), "Soirées").unwrap();
                let sous_category = dao::budget::insert_sous_category(&mut connection, *category.id(), "Gala").unwrap();
                dao::budget::insert_rubrique(&mut connection, *sous_category.id(), *previous.id(), "Billetterie", 150_000).unwrap();

                let request = TransitionRequest::new(next_mandat(2026), false, false);
                let report = transition(&mut connection, *club.id(), &request).unwrap();

                assert_eq!(&0, report.rubriques_carried());
                assert!(dao::budget::get_rubriques(&mut connection, *report.mandat().id()).unwrap().is_empty());
            })
        }

        #[test]
        fn success_without_active_mandat() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());

                let request = TransitionRequest::new(next_mandat(2025), true, true);
                let report = transition(&mut connection, *club.id(), &request).unwrap();

                assert_eq!(&None, report.previous_mandat_id());
                assert!(*report.mandat().active());
            })
        }

        #[test]
        fn fail_when_starting_before_active() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let previous = insert_mandat(&mut connection, *club.id(), "2025-2026", true);

                let request = TransitionRequest::new(next_mandat(2024), false, false);
                assert!(matches!(
                    transition(&mut connection, *club.id(), &request),
                    Err(ApplicationError::BadRequest(_))
                ));

                let mandats = dao::mandat::get_mandats(&mut connection, *club.id()).unwrap();
                assert_eq!(1, mandats.len());
                assert_eq!(previous.id(), mandats[0].id());
            })
        }
    }
}
