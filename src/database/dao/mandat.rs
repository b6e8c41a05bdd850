use super::Result;
use crate::database::model::mandat::Mandat;
use crate::database::schema::mandats;
use diesel::prelude::*;
use dto::mandat::NewMandat;

pub fn insert_mandat(
    connection: &mut SqliteConnection,
    club_id: i32,
    new_mandat: &NewMandat,
    active: bool,
) -> Result<Mandat> {
    let mandat = diesel::insert_into(mandats::table)
        .values((
            mandats::club_id.eq(club_id),
            mandats::label.eq(new_mandat.label()),
            mandats::start_date.eq(new_mandat.start_date().to_string()),
            mandats::end_date.eq(new_mandat.end_date().to_string()),
            mandats::active.eq(active),
            mandats::default_cotisation_cents.eq(*new_mandat.default_cotisation_cents()),
        ))
        .returning(Mandat::as_returning())
        .get_result(connection)?;

    Ok(mandat)
}

pub fn get_mandats(connection: &mut SqliteConnection, club_id: i32) -> Result<Vec<Mandat>> {
    let mandats = mandats::table
        .filter(mandats::club_id.eq(club_id))
        .order_by(mandats::start_date.desc())
        .select(Mandat::as_select())
        .load(connection)?;

    Ok(mandats)
}

/// Retrieve a mandat, provided it belongs to the given club.
pub fn get_mandat(connection: &mut SqliteConnection, club_id: i32, mandat_id: i32) -> Result<Mandat> {
    let mandat = mandats::table
        .filter(mandats::club_id.eq(club_id))
        .filter(mandats::id.eq(mandat_id))
        .select(Mandat::as_select())
        .first(connection)?;

    Ok(mandat)
}

pub fn get_active_mandat(connection: &mut SqliteConnection, club_id: i32) -> Result<Option<Mandat>> {
    let mandat = mandats::table
        .filter(mandats::club_id.eq(club_id))
        .filter(mandats::active.eq(true))
        .select(Mandat::as_select())
        .first(connection)
        .optional()?;

    Ok(mandat)
}

/// Make the given mandat the only active one of its club.
pub fn activate(connection: &mut SqliteConnection, club_id: i32, mandat_id: i32) -> Result<()> {
    connection.transaction(|connection| {
        diesel::update(mandats::table.filter(mandats::club_id.eq(club_id)))
            .set(mandats::active.eq(false))
            .execute(connection)?;
        diesel::update(
            mandats::table
                .filter(mandats::club_id.eq(club_id))
                .filter(mandats::id.eq(mandat_id)),
        )
        .set(mandats::active.eq(true))
        .execute(connection)?;

        Ok(())
    })
}
