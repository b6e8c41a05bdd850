use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::database::model::commission::membre_commission;
use crate::error::ApplicationError;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use chrono::Utc;
use dto::club::Role;
use dto::commission::{MembreCommission, NewMembreCommission};
use log::debug;
use rocket::State;
use rocket::serde::json::Json;

/// Active members of the commission. Without a mandat, the active one is used.
#[get("/clubs/<club_id>/commissions/<commission_id>/membres?<mandat_id>")]
pub fn get_membres(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    commission_id: i32,
    mandat_id: Option<i32>,
) -> ApiResponse<Vec<MembreCommission>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let commission = dao::commission::get_commission(&mut connection, club_id, commission_id)?;
    let mandat_id = match mandat_id {
        Some(mandat_id) => Some(*dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?.id()),
        None => dao::mandat::get_active_mandat(&mut connection, club_id)?.map(|mandat| *mandat.id()),
    };
    let Some(mandat_id) = mandat_id else {
        return ok(vec![]);
    };

    let membres = dao::commission::get_active_membres(&mut connection, *commission.id(), mandat_id)?
        .into_iter()
        .map(|(membre, user)| membre_commission(membre, user))
        .collect::<Result<Vec<_>, _>>()?;
    ok(membres)
}

#[post("/clubs/<club_id>/commissions/<commission_id>/membres", format = "application/json", data = "<new_membre>")]
pub fn add_membre(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    commission_id: i32,
    new_membre: Json<NewMembreCommission>,
) -> ApiResponse<MembreCommission> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let commission = dao::commission::get_commission(&mut connection, club_id, commission_id)?;
    let mandat = dao::mandat::get_mandat(&mut connection, club_id, *new_membre.mandat_id())?;
    let member_id = *new_membre.member_id();
    if dao::club::find_membership(&mut connection, club_id, member_id)?.is_none() {
        return Err(ApplicationError::bad_request("This user isn't a member of the club."));
    }
    if dao::commission::find_active_membre(&mut connection, *commission.id(), *mandat.id(), member_id)?.is_some() {
        return Err(ApplicationError::bad_request(
            "This member already belongs to the commission.",
        ));
    }
    if *new_membre.is_responsable()
        && dao::commission::find_active_responsable(&mut connection, *commission.id(), *mandat.id())?.is_some()
    {
        return Err(ApplicationError::bad_request(
            "The commission already has a responsable.",
        ));
    }

    let membre = dao::commission::insert_membre(
        &mut connection,
        *commission.id(),
        member_id,
        *mandat.id(),
        *new_membre.is_responsable(),
        Utc::now().date_naive(),
    )?;
    let user = dao::user::get_user(&mut connection, member_id)?;
    created(membre_commission(membre, user)?)
}

/// The previous responsable, if any, becomes a simple member.
#[put("/clubs/<club_id>/commissions/<commission_id>/membres/<membre_id>/responsable")]
pub fn set_responsable(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    commission_id: i32,
    membre_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let commission = dao::commission::get_commission(&mut connection, club_id, commission_id)?;
    let membre = dao::commission::get_membre(&mut connection, *commission.id(), membre_id)?;
    if !*membre.active() {
        return Err(ApplicationError::bad_request(
            "This member has left the commission.",
        ));
    }

    dao::commission::set_responsable(&mut connection, &membre)?;
    debug!("New responsable [commission_id: {commission_id}, membre_id: {membre_id}]");
    done("Responsable set.")
}

#[delete("/clubs/<club_id>/commissions/<commission_id>/membres/<membre_id>")]
pub fn remove_membre(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    commission_id: i32,
    membre_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let commission = dao::commission::get_commission(&mut connection, club_id, commission_id)?;
    let membre = dao::commission::get_membre(&mut connection, *commission.id(), membre_id)?;
    dao::commission::deactivate_membre(&mut connection, *membre.id())?;
    done("Member removed from the commission.")
}
