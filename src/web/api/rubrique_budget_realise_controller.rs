use crate::budget::check_realisation;
use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use chrono::Utc;
use dto::budget::{NewRubriqueBudgetRealise, RubriqueBudgetRealise};
use dto::club::Role;
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/rubriques/<rubrique_id>/realisations")]
pub fn get_realisations(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    rubrique_id: i32,
) -> ApiResponse<Vec<RubriqueBudgetRealise>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let rubrique = dao::budget::get_rubrique_in_club(&mut connection, club_id, rubrique_id)?;
    let realisations = dao::budget::get_realisations(&mut connection, &[*rubrique.id()])?
        .into_iter()
        .map(RubriqueBudgetRealise::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ok(realisations)
}

/// Without a date, the realisation is recorded today.
#[post("/clubs/<club_id>/rubriques/<rubrique_id>/realisations", format = "application/json", data = "<new_realisation>")]
pub fn add_realisation(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    rubrique_id: i32,
    new_realisation: Json<NewRubriqueBudgetRealise>,
) -> ApiResponse<RubriqueBudgetRealise> {
    check_realisation(*new_realisation.amount_cents())?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let rubrique = dao::budget::get_rubrique_in_club(&mut connection, club_id, rubrique_id)?;

    let date = new_realisation.date().unwrap_or_else(|| Utc::now().date_naive());
    let realisation = dao::budget::insert_realisation(
        &mut connection,
        *rubrique.id(),
        *new_realisation.amount_cents(),
        date,
        new_realisation.description().as_deref(),
    )?;
    created(RubriqueBudgetRealise::try_from(realisation)?)
}

#[delete("/clubs/<club_id>/realisations/<realisation_id>")]
pub fn delete_realisation(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    realisation_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let realisation = dao::budget::get_realisation_in_club(&mut connection, club_id, realisation_id)?;
    dao::budget::delete_realisation(&mut connection, *realisation.id())?;
    done("Realisation deleted.")
}
