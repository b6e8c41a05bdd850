use crate::club::{build_members, change_role};
use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::{ApplicationError, Result};
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use chrono::Utc;
use diesel::Connection;
use dto::club::{AddClubMember, Club, ClubMember, ClubMembership, NewClub, Role, UpdateRole};
use log::debug;
use rocket::State;
use rocket::serde::json::Json;

/// Create a club, its creator becoming its first admin.
#[post("/clubs", format = "application/json", data = "<new_club>")]
pub fn create_club(pool: &State<DbPool>, session: Session, new_club: Json<NewClub>) -> ApiResponse<Club> {
    let name = new_club.name().trim();
    if name.is_empty() {
        return Err(ApplicationError::bad_request("The name is required."));
    }

    let mut connection = connect(pool)?;
    let club = connection.transaction(|connection| -> Result<_> {
        let club = dao::club::insert_club(connection, name)?;
        dao::club::add_member(
            connection,
            *club.id(),
            *session.user_id(),
            Role::Admin,
            Utc::now().date_naive(),
        )?;
        Ok(club)
    })?;
    debug!("Club created [club_id: {}, user_id: {}]", club.id(), session.user_id());
    created(club.try_into()?)
}

#[get("/clubs")]
pub fn get_clubs(pool: &State<DbPool>, session: Session) -> ApiResponse<Vec<ClubMembership>> {
    let mut connection = connect(pool)?;
    let clubs = dao::club::get_memberships_of_user(&mut connection, *session.user_id())?
        .into_iter()
        .map(|(membership, club)| -> Result<ClubMembership> {
            Ok(ClubMembership::new(
                club.try_into()?,
                membership.parsed_role()?,
                membership.parsed_joined_on()?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    ok(clubs)
}

#[get("/clubs/<club_id>")]
pub fn get_club(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Club> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    ok(dao::club::get_club(&mut connection, club_id)?.try_into()?)
}

#[get("/clubs/<club_id>/members")]
pub fn get_members(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Vec<ClubMember>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    ok(build_members(dao::club::get_members(&mut connection, club_id)?)?)
}

/// Add an already registered user to the club.
#[post("/clubs/<club_id>/members", format = "application/json", data = "<member>")]
pub fn add_member(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    member: Json<AddClubMember>,
) -> ApiResponse<ClubMember> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;

    let user = dao::user::find_by_email(&mut connection, member.email())?
        .ok_or_else(|| ApplicationError::not_found("No user is registered with this email address."))?;
    if dao::club::find_membership(&mut connection, club_id, *user.id())?.is_some() {
        return Err(ApplicationError::bad_request("This user is already a member of the club."));
    }

    let joined_on = member.joined_on().unwrap_or_else(|| Utc::now().date_naive());
    let membership = dao::club::add_member(&mut connection, club_id, *user.id(), *member.role(), joined_on)?;
    created(ClubMember::new(
        user.into(),
        membership.parsed_role()?,
        membership.parsed_joined_on()?,
    ))
}

#[put("/clubs/<club_id>/members/<user_id>/role", format = "application/json", data = "<update>")]
pub fn update_member_role(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    user_id: i32,
    update: Json<UpdateRole>,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    change_role(&mut connection, club_id, user_id, Some(*update.role()))?;
    done("Role updated.")
}

#[delete("/clubs/<club_id>/members/<user_id>")]
pub fn remove_member(pool: &State<DbPool>, session: Session, club_id: i32, user_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    change_role(&mut connection, club_id, user_id, None)?;
    done("Member removed.")
}
