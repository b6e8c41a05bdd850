use super::Result;
use crate::database::model::cotisation::{Cotisation, PaiementCotisation};
use crate::database::model::user::User;
use crate::database::schema::{cotisations, mandats, paiements_cotisation, users};
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;

pub fn insert_cotisation(
    connection: &mut SqliteConnection,
    member_id: i32,
    mandat_id: i32,
    amount_cents: i64,
) -> Result<Cotisation> {
    let cotisation = diesel::insert_into(cotisations::table)
        .values((
            cotisations::member_id.eq(member_id),
            cotisations::mandat_id.eq(mandat_id),
            cotisations::amount_cents.eq(amount_cents),
            cotisations::created_at.eq(Utc::now().naive_utc().to_string()),
        ))
        .returning(Cotisation::as_returning())
        .get_result(connection)?;

    Ok(cotisation)
}

pub fn find_cotisation(
    connection: &mut SqliteConnection,
    member_id: i32,
    mandat_id: i32,
) -> Result<Option<Cotisation>> {
    let cotisation = cotisations::table
        .filter(cotisations::member_id.eq(member_id))
        .filter(cotisations::mandat_id.eq(mandat_id))
        .select(Cotisation::as_select())
        .first(connection)
        .optional()?;

    Ok(cotisation)
}

/// Retrieve a cotisation, provided its mandat belongs to the given club.
pub fn get_cotisation_in_club(
    connection: &mut SqliteConnection,
    club_id: i32,
    cotisation_id: i32,
) -> Result<Cotisation> {
    let cotisation = cotisations::table
        .inner_join(mandats::table)
        .filter(mandats::club_id.eq(club_id))
        .filter(cotisations::id.eq(cotisation_id))
        .select(Cotisation::as_select())
        .first(connection)?;

    Ok(cotisation)
}

pub fn get_cotisations_of_mandat(
    connection: &mut SqliteConnection,
    mandat_id: i32,
) -> Result<Vec<(Cotisation, User)>> {
    let cotisations = cotisations::table
        .inner_join(users::table)
        .filter(cotisations::mandat_id.eq(mandat_id))
        .order_by((users::last_name, users::first_name))
        .select((Cotisation::as_select(), User::as_select()))
        .load(connection)?;

    Ok(cotisations)
}

pub fn get_member_ids_with_cotisation(
    connection: &mut SqliteConnection,
    mandat_id: i32,
) -> Result<Vec<i32>> {
    let ids = cotisations::table
        .filter(cotisations::mandat_id.eq(mandat_id))
        .select(cotisations::member_id)
        .load(connection)?;

    Ok(ids)
}

pub fn update_amount(
    connection: &mut SqliteConnection,
    cotisation_id: i32,
    amount_cents: i64,
) -> Result<Cotisation> {
    let cotisation = diesel::update(cotisations::table.find(cotisation_id))
        .set(cotisations::amount_cents.eq(amount_cents))
        .returning(Cotisation::as_returning())
        .get_result(connection)?;

    Ok(cotisation)
}

/// Payments are deleted along with the cotisation.
pub fn delete_cotisation(connection: &mut SqliteConnection, cotisation_id: i32) -> Result<usize> {
    let deleted = diesel::delete(cotisations::table.find(cotisation_id)).execute(connection)?;
    Ok(deleted)
}

pub fn insert_paiement(
    connection: &mut SqliteConnection,
    cotisation_id: i32,
    amount_cents: i64,
    paid_on: NaiveDate,
    comment: Option<&str>,
) -> Result<PaiementCotisation> {
    let paiement = diesel::insert_into(paiements_cotisation::table)
        .values((
            paiements_cotisation::cotisation_id.eq(cotisation_id),
            paiements_cotisation::amount_cents.eq(amount_cents),
            paiements_cotisation::paid_on.eq(paid_on.to_string()),
            paiements_cotisation::comment.eq(comment),
        ))
        .returning(PaiementCotisation::as_returning())
        .get_result(connection)?;

    Ok(paiement)
}

pub fn get_paiements(
    connection: &mut SqliteConnection,
    cotisation_ids: &[i32],
) -> Result<Vec<PaiementCotisation>> {
    let paiements = paiements_cotisation::table
        .filter(paiements_cotisation::cotisation_id.eq_any(cotisation_ids))
        .order_by((paiements_cotisation::paid_on, paiements_cotisation::id))
        .select(PaiementCotisation::as_select())
        .load(connection)?;

    Ok(paiements)
}

pub fn get_paiement_in_club(
    connection: &mut SqliteConnection,
    club_id: i32,
    paiement_id: i32,
) -> Result<PaiementCotisation> {
    let paiement = paiements_cotisation::table
        .inner_join(cotisations::table.inner_join(mandats::table))
        .filter(mandats::club_id.eq(club_id))
        .filter(paiements_cotisation::id.eq(paiement_id))
        .select(PaiementCotisation::as_select())
        .first(connection)?;

    Ok(paiement)
}

pub fn delete_paiement(connection: &mut SqliteConnection, paiement_id: i32) -> Result<usize> {
    let deleted =
        diesel::delete(paiements_cotisation::table.find(paiement_id)).execute(connection)?;
    Ok(deleted)
}
