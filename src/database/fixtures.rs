//! Test helpers inserting a consistent data set.

use crate::database::dao;
use crate::database::model::club::Club;
use crate::database::model::gala::Gala;
use crate::database::model::mandat::Mandat;
use crate::database::model::user::User;
use chrono::NaiveDate;
use diesel::SqliteConnection;
use dto::club::Role;
use dto::gala::NewGala;
use dto::mandat::NewMandat;

pub(crate) fn insert_user(connection: &mut SqliteConnection, email: &str) -> User {
    let first_name = email.split('@').next().unwrap_or(email);
    dao::user::insert_user(connection, email, "hash", first_name, "Doe", None).unwrap()
}

pub(crate) fn create_club_with_admin(
    connection: &mut SqliteConnection,
    name: &str,
    admin_id: i32,
) -> Club {
    let club = dao::club::insert_club(connection, name).unwrap();
    dao::club::add_member(connection, *club.id(), admin_id, Role::Admin, joined_on()).unwrap();
    club
}

pub(crate) fn insert_member(
    connection: &mut SqliteConnection,
    club_id: i32,
    email: &str,
    role: Role,
) -> User {
    let user = insert_user(connection, email);
    dao::club::add_member(connection, club_id, *user.id(), role, joined_on()).unwrap();
    user
}

pub(crate) fn insert_mandat(
    connection: &mut SqliteConnection,
    club_id: i32,
    label: &str,
    active: bool,
) -> Mandat {
    let new_mandat = NewMandat::new(
        label.to_owned(),
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        Some(5_000),
    );
    dao::mandat::insert_mandat(connection, club_id, &new_mandat, active).unwrap()
}

/// Tickets at 80€, tombola tickets at 2€.
pub(crate) fn insert_gala(connection: &mut SqliteConnection, club_id: i32) -> Gala {
    let new_gala = NewGala::new(
        "Gala de printemps".to_owned(),
        NaiveDate::from_ymd_opt(2026, 4, 11).unwrap(),
        Some("Château".to_owned()),
        8_000,
        200,
    );
    dao::gala::insert_gala(connection, club_id, &new_gala).unwrap()
}

fn joined_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}
