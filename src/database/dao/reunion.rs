use super::Result;
use crate::database::model::reunion::{InviteReunion, ListePresence, OrdreDuJour, Reunion};
use crate::database::model::user::User;
use crate::database::schema::{invites_reunion, listes_presence, ordres_du_jour, reunions, users};
use diesel::dsl::max;
use diesel::prelude::*;
use dto::reunion::{NewInviteReunion, NewReunion, PresenceUpdate, UpdateReunion};

pub const DEFAULT_KIND: &str = "Ordinaire";

/// Create the meeting along with its agenda and invitees.
pub fn create_reunion(
    connection: &mut SqliteConnection,
    club_id: i32,
    new_reunion: &NewReunion,
) -> Result<Reunion> {
    connection.transaction(|connection| {
        let reunion = diesel::insert_into(reunions::table)
            .values((
                reunions::club_id.eq(club_id),
                reunions::mandat_id.eq(*new_reunion.mandat_id()),
                reunions::title.eq(new_reunion.title().trim()),
                reunions::date.eq(new_reunion.date().to_string()),
                reunions::location.eq(new_reunion.location().as_deref()),
                reunions::kind.eq(new_reunion.kind().as_deref().unwrap_or(DEFAULT_KIND)),
            ))
            .returning(Reunion::as_returning())
            .get_result(connection)?;

        for ordre_du_jour in new_reunion.ordres_du_jour() {
            insert_ordre_du_jour(
                connection,
                *reunion.id(),
                ordre_du_jour.subject(),
                ordre_du_jour.notes().as_deref(),
            )?;
        }
        for invite in new_reunion.invites() {
            insert_invite(connection, *reunion.id(), invite)?;
        }

        Ok(reunion)
    })
}

pub fn get_reunions(connection: &mut SqliteConnection, club_id: i32) -> Result<Vec<Reunion>> {
    let reunions = reunions::table
        .filter(reunions::club_id.eq(club_id))
        .order_by(reunions::date.desc())
        .select(Reunion::as_select())
        .load(connection)?;

    Ok(reunions)
}

pub fn get_reunion(connection: &mut SqliteConnection, club_id: i32, reunion_id: i32) -> Result<Reunion> {
    let reunion = reunions::table
        .filter(reunions::club_id.eq(club_id))
        .filter(reunions::id.eq(reunion_id))
        .select(Reunion::as_select())
        .first(connection)?;

    Ok(reunion)
}

pub fn update_reunion(
    connection: &mut SqliteConnection,
    reunion_id: i32,
    update: &UpdateReunion,
) -> Result<Reunion> {
    let reunion = diesel::update(reunions::table.find(reunion_id))
        .set((
            reunions::title.eq(update.title().trim()),
            reunions::date.eq(update.date().to_string()),
            reunions::location.eq(update.location().as_deref()),
            reunions::kind.eq(update.kind()),
            reunions::compte_rendu.eq(update.compte_rendu().as_deref()),
        ))
        .returning(Reunion::as_returning())
        .get_result(connection)?;

    Ok(reunion)
}

pub fn delete_reunion(connection: &mut SqliteConnection, reunion_id: i32) -> Result<usize> {
    let deleted = diesel::delete(reunions::table.find(reunion_id)).execute(connection)?;
    Ok(deleted)
}

pub fn get_ordres_du_jour(connection: &mut SqliteConnection, reunion_id: i32) -> Result<Vec<OrdreDuJour>> {
    let ordres_du_jour = ordres_du_jour::table
        .filter(ordres_du_jour::reunion_id.eq(reunion_id))
        .order_by(ordres_du_jour::position)
        .select(OrdreDuJour::as_select())
        .load(connection)?;

    Ok(ordres_du_jour)
}

/// Append an item at the end of the agenda.
pub fn insert_ordre_du_jour(
    connection: &mut SqliteConnection,
    reunion_id: i32,
    subject: &str,
    notes: Option<&str>,
) -> Result<OrdreDuJour> {
    let last: Option<i32> = ordres_du_jour::table
        .filter(ordres_du_jour::reunion_id.eq(reunion_id))
        .select(max(ordres_du_jour::position))
        .first(connection)?;
    let ordre_du_jour = diesel::insert_into(ordres_du_jour::table)
        .values((
            ordres_du_jour::reunion_id.eq(reunion_id),
            ordres_du_jour::position.eq(last.map_or(1, |last| last + 1)),
            ordres_du_jour::subject.eq(subject.trim()),
            ordres_du_jour::notes.eq(notes),
        ))
        .returning(OrdreDuJour::as_returning())
        .get_result(connection)?;

    Ok(ordre_du_jour)
}

pub fn delete_ordre_du_jour(
    connection: &mut SqliteConnection,
    reunion_id: i32,
    ordre_du_jour_id: i32,
) -> Result<usize> {
    let deleted = diesel::delete(
        ordres_du_jour::table
            .filter(ordres_du_jour::reunion_id.eq(reunion_id))
            .filter(ordres_du_jour::id.eq(ordre_du_jour_id)),
    )
    .execute(connection)?;

    Ok(deleted)
}

pub fn get_presences(
    connection: &mut SqliteConnection,
    reunion_id: i32,
) -> Result<Vec<(ListePresence, User)>> {
    let presences = listes_presence::table
        .inner_join(users::table)
        .filter(listes_presence::reunion_id.eq(reunion_id))
        .order_by((users::last_name, users::first_name))
        .select((ListePresence::as_select(), User::as_select()))
        .load(connection)?;

    Ok(presences)
}

/// Record each status, updating the existing line of the member when there is one.
pub fn save_presences(
    connection: &mut SqliteConnection,
    reunion_id: i32,
    updates: &[PresenceUpdate],
) -> Result<()> {
    connection.transaction(|connection| {
        for update in updates {
            let status = update.status().to_string();
            let updated = diesel::update(
                listes_presence::table
                    .filter(listes_presence::reunion_id.eq(reunion_id))
                    .filter(listes_presence::member_id.eq(*update.member_id())),
            )
            .set(listes_presence::status.eq(&status))
            .execute(connection)?;

            if updated == 0 {
                diesel::insert_into(listes_presence::table)
                    .values((
                        listes_presence::reunion_id.eq(reunion_id),
                        listes_presence::member_id.eq(*update.member_id()),
                        listes_presence::status.eq(&status),
                    ))
                    .execute(connection)?;
            }
        }

        Ok(())
    })
}

pub fn get_invites(connection: &mut SqliteConnection, reunion_id: i32) -> Result<Vec<InviteReunion>> {
    let invites = invites_reunion::table
        .filter(invites_reunion::reunion_id.eq(reunion_id))
        .order_by(invites_reunion::name)
        .select(InviteReunion::as_select())
        .load(connection)?;

    Ok(invites)
}

pub fn insert_invite(
    connection: &mut SqliteConnection,
    reunion_id: i32,
    invite: &NewInviteReunion,
) -> Result<InviteReunion> {
    let invite = diesel::insert_into(invites_reunion::table)
        .values((
            invites_reunion::reunion_id.eq(reunion_id),
            invites_reunion::name.eq(invite.name().trim()),
            invites_reunion::email.eq(invite.email().as_deref()),
            invites_reunion::organization.eq(invite.organization().as_deref()),
        ))
        .returning(InviteReunion::as_returning())
        .get_result(connection)?;

    Ok(invite)
}

pub fn delete_invite(connection: &mut SqliteConnection, reunion_id: i32, invite_id: i32) -> Result<usize> {
    let deleted = diesel::delete(
        invites_reunion::table
            .filter(invites_reunion::reunion_id.eq(reunion_id))
            .filter(invites_reunion::id.eq(invite_id)),
    )
    .execute(connection)?;

    Ok(deleted)
}
