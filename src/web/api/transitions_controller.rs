use crate::database::{DbPool, connect};
use crate::mandat::transition as run_transition;
use crate::web::api::{ApiResponse, created};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::mandat::{TransitionReport, TransitionRequest};
use rocket::State;
use rocket::serde::json::Json;

/// Move the club to its next mandat.
#[post("/clubs/<club_id>/transitions", format = "application/json", data = "<request>")]
pub fn transition(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    request: Json<TransitionRequest>,
) -> ApiResponse<TransitionReport> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    created(run_transition(&mut connection, club_id, &request)?)
}
