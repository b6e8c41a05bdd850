use crate::cotisation::{
    build_cotisation, build_cotisations, build_situation, check_new_amount, check_positive_amount,
    create_in_bulk, paid_cents, resolve_amount,
};
use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use chrono::Utc;
use dto::club::Role;
use dto::cotisation::{
    BulkCotisationReport, BulkCotisations, Cotisation, NewCotisation, NewPaiement, Paiement, Situation,
    UpdateCotisation,
};
use log::{debug, warn};
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/mandats/<mandat_id>/cotisations")]
pub fn get_cotisations(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
) -> ApiResponse<Vec<Cotisation>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;

    let cotisations = dao::cotisation::get_cotisations_of_mandat(&mut connection, mandat_id)?;
    let ids: Vec<i32> = cotisations.iter().map(|(cotisation, _)| *cotisation.id()).collect();
    let paiements = dao::cotisation::get_paiements(&mut connection, &ids)?;
    ok(build_cotisations(cotisations, &paiements)?)
}

/// A member owes a single cotisation per mandat.
#[post("/clubs/<club_id>/mandats/<mandat_id>/cotisations", format = "application/json", data = "<new_cotisation>")]
pub fn create_cotisation(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
    new_cotisation: Json<NewCotisation>,
) -> ApiResponse<Cotisation> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let mandat = dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;
    let amount_cents = resolve_amount(*new_cotisation.amount_cents(), &mandat)?;

    let member_id = *new_cotisation.member_id();
    if dao::club::find_membership(&mut connection, club_id, member_id)?.is_none() {
        return Err(ApplicationError::bad_request("This user isn't a member of the club."));
    }
    if dao::cotisation::find_cotisation(&mut connection, member_id, mandat_id)?.is_some() {
        warn!("Cotisation already exists [member_id: {member_id}, mandat_id: {mandat_id}]");
        return Err(ApplicationError::bad_request(
            "This member already has a cotisation for the mandat.",
        ));
    }

    let cotisation = dao::cotisation::insert_cotisation(&mut connection, member_id, mandat_id, amount_cents)?;
    let member = dao::user::get_user(&mut connection, member_id)?;
    created(build_cotisation(&cotisation, &member, 0))
}

/// Create the cotisations of several members at once. Those who already have one are only reported.
#[post("/clubs/<club_id>/mandats/<mandat_id>/cotisations/bulk", format = "application/json", data = "<request>")]
pub fn create_cotisations_in_bulk(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
    request: Json<BulkCotisations>,
) -> ApiResponse<BulkCotisationReport> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let mandat = dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;
    let amount_cents = resolve_amount(*request.amount_cents(), &mandat)?;

    let (plan, created_cotisations) =
        create_in_bulk(&mut connection, club_id, mandat_id, request.member_ids(), amount_cents)?;
    debug!(
        "Bulk cotisations [mandat_id: {mandat_id}, created: {}, ignored: {}, rejected: {}]",
        created_cotisations.len(),
        plan.ignored().len(),
        plan.rejected().len()
    );

    created(BulkCotisationReport::new(
        created_cotisations,
        plan.ignored().clone(),
        plan.rejected().clone(),
    ))
}

#[put("/clubs/<club_id>/cotisations/<cotisation_id>", format = "application/json", data = "<update>")]
pub fn update_cotisation(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    cotisation_id: i32,
    update: Json<UpdateCotisation>,
) -> ApiResponse<Cotisation> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let cotisation = dao::cotisation::get_cotisation_in_club(&mut connection, club_id, cotisation_id)?;
    let paid = paid_cents(&dao::cotisation::get_paiements(&mut connection, &[*cotisation.id()])?)?;
    check_new_amount(*update.amount_cents(), paid)?;

    let cotisation = dao::cotisation::update_amount(&mut connection, cotisation_id, *update.amount_cents())?;
    let member = dao::user::get_user(&mut connection, *cotisation.member_id())?;
    ok(build_cotisation(&cotisation, &member, paid))
}

/// Payments of the cotisation go along with it.
#[delete("/clubs/<club_id>/cotisations/<cotisation_id>")]
pub fn delete_cotisation(pool: &State<DbPool>, session: Session, club_id: i32, cotisation_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let cotisation = dao::cotisation::get_cotisation_in_club(&mut connection, club_id, cotisation_id)?;
    dao::cotisation::delete_cotisation(&mut connection, *cotisation.id())?;
    done("Cotisation deleted.")
}

#[post("/clubs/<club_id>/cotisations/<cotisation_id>/paiements", format = "application/json", data = "<new_paiement>")]
pub fn add_paiement(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    cotisation_id: i32,
    new_paiement: Json<NewPaiement>,
) -> ApiResponse<Paiement> {
    check_positive_amount(*new_paiement.amount_cents())?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let cotisation = dao::cotisation::get_cotisation_in_club(&mut connection, club_id, cotisation_id)?;

    let paid_on = new_paiement.paid_on().unwrap_or_else(|| Utc::now().date_naive());
    let paiement = dao::cotisation::insert_paiement(
        &mut connection,
        *cotisation.id(),
        *new_paiement.amount_cents(),
        paid_on,
        new_paiement.comment().as_deref(),
    )?;
    created(Paiement::try_from(paiement)?)
}

#[delete("/clubs/<club_id>/paiements/<paiement_id>")]
pub fn delete_paiement(pool: &State<DbPool>, session: Session, club_id: i32, paiement_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let paiement = dao::cotisation::get_paiement_in_club(&mut connection, club_id, paiement_id)?;
    dao::cotisation::delete_paiement(&mut connection, *paiement.id())?;
    done("Paiement deleted.")
}

/// Members may only look at their own situation, admins at anyone's.
#[get("/clubs/<club_id>/mandats/<mandat_id>/members/<member_id>/situation")]
pub fn get_situation(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
    member_id: i32,
) -> ApiResponse<Situation> {
    let mut connection = connect(pool)?;
    let role = authorize(&mut connection, &session, club_id, Role::Member)?;
    if role != Role::Admin && *session.user_id() != member_id {
        return Err(ApplicationError::Forbidden);
    }
    ok(build_situation(&mut connection, club_id, mandat_id, member_id)?)
}
