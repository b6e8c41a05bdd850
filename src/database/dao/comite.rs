use super::Result;
use crate::database::model::comite::{MembreComite, PosteComite};
use crate::database::model::user::User;
use crate::database::schema::{mandats, membres_comite, postes_comite, users};
use diesel::dsl::max;
use diesel::prelude::*;

/// Insert a poste, appending it after the existing ones when no position is given.
pub fn insert_poste(
    connection: &mut SqliteConnection,
    club_id: i32,
    name: &str,
    position: Option<i32>,
) -> Result<PosteComite> {
    let position = match position {
        Some(position) => position,
        None => {
            let last: Option<i32> = postes_comite::table
                .filter(postes_comite::club_id.eq(club_id))
                .select(max(postes_comite::position))
                .first(connection)?;
            last.map_or(1, |last| last + 1)
        }
    };
    let poste = diesel::insert_into(postes_comite::table)
        .values((
            postes_comite::club_id.eq(club_id),
            postes_comite::name.eq(name),
            postes_comite::position.eq(position),
        ))
        .returning(PosteComite::as_returning())
        .get_result(connection)?;

    Ok(poste)
}

pub fn get_postes(connection: &mut SqliteConnection, club_id: i32) -> Result<Vec<PosteComite>> {
    let postes = postes_comite::table
        .filter(postes_comite::club_id.eq(club_id))
        .order_by((postes_comite::position, postes_comite::name))
        .select(PosteComite::as_select())
        .load(connection)?;

    Ok(postes)
}

pub fn get_poste(connection: &mut SqliteConnection, club_id: i32, poste_id: i32) -> Result<PosteComite> {
    let poste = postes_comite::table
        .filter(postes_comite::club_id.eq(club_id))
        .filter(postes_comite::id.eq(poste_id))
        .select(PosteComite::as_select())
        .first(connection)?;

    Ok(poste)
}

/// Give the poste to the member for the mandat, replacing any current holder.
pub fn nominate(
    connection: &mut SqliteConnection,
    poste_id: i32,
    mandat_id: i32,
    member_id: i32,
) -> Result<MembreComite> {
    connection.transaction(|connection| {
        diesel::delete(
            membres_comite::table
                .filter(membres_comite::poste_id.eq(poste_id))
                .filter(membres_comite::mandat_id.eq(mandat_id)),
        )
        .execute(connection)?;
        let membre = diesel::insert_into(membres_comite::table)
            .values((
                membres_comite::poste_id.eq(poste_id),
                membres_comite::mandat_id.eq(mandat_id),
                membres_comite::member_id.eq(member_id),
            ))
            .returning(MembreComite::as_returning())
            .get_result(connection)?;

        Ok(membre)
    })
}

pub fn get_comite(
    connection: &mut SqliteConnection,
    mandat_id: i32,
) -> Result<Vec<(MembreComite, PosteComite, User)>> {
    let comite = membres_comite::table
        .inner_join(postes_comite::table)
        .inner_join(users::table)
        .filter(membres_comite::mandat_id.eq(mandat_id))
        .order_by(postes_comite::position)
        .select((
            MembreComite::as_select(),
            PosteComite::as_select(),
            User::as_select(),
        ))
        .load(connection)?;

    Ok(comite)
}

pub fn get_membre_comite_in_club(
    connection: &mut SqliteConnection,
    club_id: i32,
    membre_comite_id: i32,
) -> Result<MembreComite> {
    let membre = membres_comite::table
        .inner_join(mandats::table)
        .filter(mandats::club_id.eq(club_id))
        .filter(membres_comite::id.eq(membre_comite_id))
        .select(MembreComite::as_select())
        .first(connection)?;

    Ok(membre)
}

pub fn delete_membre_comite(connection: &mut SqliteConnection, membre_comite_id: i32) -> Result<usize> {
    let deleted = diesel::delete(membres_comite::table.find(membre_comite_id)).execute(connection)?;
    Ok(deleted)
}
