use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::gala::{build_tables, check_table, ensure_seat_available};
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::gala::{GalaTable, NewAffectation, NewGalaTable, SeatedInvite};
use log::debug;
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/galas/<gala_id>/tables")]
pub fn get_tables(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
) -> ApiResponse<Vec<GalaTable>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let tables = dao::gala::get_tables(&mut connection, *gala.id())?;
    let invites = dao::gala::get_invites(&mut connection, *gala.id())?;
    let affectations = dao::gala::get_affectations(&mut connection, *gala.id())?;
    ok(build_tables(tables, &invites, &affectations))
}

/// Table numbers are unique within a gala.
#[post("/clubs/<club_id>/galas/<gala_id>/tables", format = "application/json", data = "<new_table>")]
pub fn create_table(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    new_table: Json<NewGalaTable>,
) -> ApiResponse<GalaTable> {
    check_table(&new_table)?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    if dao::gala::find_table_by_number(&mut connection, *gala.id(), *new_table.number())?.is_some() {
        return Err(ApplicationError::bad_request(format!(
            "Table {} already exists.",
            new_table.number()
        )));
    }

    let table = dao::gala::insert_table(&mut connection, *gala.id(), &new_table)?;
    created(GalaTable::new(
        *table.id(),
        *table.gala_id(),
        *table.number(),
        table.label().clone(),
        *table.capacity(),
        vec![],
    ))
}

/// The invitees of the table lose their seat.
#[delete("/clubs/<club_id>/galas/<gala_id>/tables/<table_id>")]
pub fn delete_table(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    table_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    if dao::gala::delete_table(&mut connection, *gala.id(), table_id)? == 0 {
        return Err(ApplicationError::not_found("This table doesn't exist."));
    }
    done("Table deleted.")
}

#[post(
    "/clubs/<club_id>/galas/<gala_id>/tables/<table_id>/affectations",
    format = "application/json",
    data = "<new_affectation>"
)]
pub fn seat_invite(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    table_id: i32,
    new_affectation: Json<NewAffectation>,
) -> ApiResponse<SeatedInvite> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let table = dao::gala::get_table(&mut connection, *gala.id(), table_id)?;
    let invite = match dao::gala::get_invite(&mut connection, *gala.id(), *new_affectation.invite_id()) {
        Err(DatabaseError::NotFound) => {
            return Err(ApplicationError::bad_request("This person isn't invited to the gala."));
        }
        result => result?,
    };

    let seated_count = dao::gala::count_seated(&mut connection, *table.id())?;
    let invite_seated = dao::gala::find_affectation_of_invite(&mut connection, *invite.id())?.is_some();
    ensure_seat_available(&table, seated_count, invite_seated)?;

    let affectation = dao::gala::insert_affectation(&mut connection, *table.id(), *invite.id())?;
    debug!("Invitee seated [table_id: {table_id}, invite_id: {}]", invite.id());
    created(SeatedInvite::new(
        *affectation.id(),
        *invite.id(),
        invite.name().clone(),
    ))
}

#[delete("/clubs/<club_id>/galas/<gala_id>/affectations/<affectation_id>")]
pub fn delete_affectation(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    affectation_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let affectation = dao::gala::get_affectation(&mut connection, *gala.id(), affectation_id)?;
    dao::gala::delete_affectation(&mut connection, *affectation.id())?;
    done("Seat freed.")
}
