use crate::budget::{build_rubriques, check_planned};
use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::tools::check_required;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::budget::{NewRubriqueBudget, RubriqueBudget, UpdateRubriqueBudget};
use dto::club::Role;
use rocket::State;
use rocket::serde::json::Json;

/// Rubriques of the mandat, each with the total realised so far.
#[get("/clubs/<club_id>/mandats/<mandat_id>/rubriques")]
pub fn get_rubriques(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
) -> ApiResponse<Vec<RubriqueBudget>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let mandat = dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;
    let rubriques = dao::budget::get_rubriques(&mut connection, *mandat.id())?;
    let rubrique_ids: Vec<i32> = rubriques.iter().map(|rubrique| *rubrique.id()).collect();
    let realisations = dao::budget::get_realisations(&mut connection, &rubrique_ids)?;
    ok(build_rubriques(rubriques, &realisations)?)
}

#[post("/clubs/<club_id>/mandats/<mandat_id>/rubriques", format = "application/json", data = "<new_rubrique>")]
pub fn create_rubrique(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
    new_rubrique: Json<NewRubriqueBudget>,
) -> ApiResponse<RubriqueBudget> {
    check_required(new_rubrique.name(), "The name is required.")?;
    check_planned(*new_rubrique.planned_cents())?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let mandat = dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;
    let sous_category = dao::budget::get_sous_category_in_club(&mut connection, club_id, *new_rubrique.sous_category_id())?;

    let rubrique = dao::budget::insert_rubrique(
        &mut connection,
        *sous_category.id(),
        *mandat.id(),
        new_rubrique.name(),
        *new_rubrique.planned_cents(),
    )?;
    created(RubriqueBudget::new(
        *rubrique.id(),
        *rubrique.sous_category_id(),
        *rubrique.mandat_id(),
        rubrique.name().clone(),
        *rubrique.planned_cents(),
        0,
    ))
}

#[put("/clubs/<club_id>/rubriques/<rubrique_id>", format = "application/json", data = "<update>")]
pub fn update_rubrique(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    rubrique_id: i32,
    update: Json<UpdateRubriqueBudget>,
) -> ApiResponse<RubriqueBudget> {
    check_required(update.name(), "The name is required.")?;
    check_planned(*update.planned_cents())?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let rubrique = dao::budget::get_rubrique_in_club(&mut connection, club_id, rubrique_id)?;

    let rubrique = dao::budget::update_rubrique(&mut connection, *rubrique.id(), update.name(), *update.planned_cents())?;
    let realisations = dao::budget::get_realisations(&mut connection, &[*rubrique.id()])?;
    let mut rubriques = build_rubriques(vec![rubrique], &realisations)?;
    match rubriques.pop() {
        Some(rubrique) => ok(rubrique),
        None => Err(ApplicationError::not_found("This rubrique doesn't exist.")),
    }
}

/// Realisations go along with the rubrique.
#[delete("/clubs/<club_id>/rubriques/<rubrique_id>")]
pub fn delete_rubrique(pool: &State<DbPool>, session: Session, club_id: i32, rubrique_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let rubrique = dao::budget::get_rubrique_in_club(&mut connection, club_id, rubrique_id)?;
    dao::budget::delete_rubrique(&mut connection, *rubrique.id())?;
    done("Rubrique deleted.")
}
