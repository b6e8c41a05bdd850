use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::tools::{check_required, is_valid_email};
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::reunion::{InviteReunion, NewInviteReunion};
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/reunions/<reunion_id>/invites")]
pub fn get_invites(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
) -> ApiResponse<Vec<InviteReunion>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;
    let invites = dao::reunion::get_invites(&mut connection, *reunion.id())?
        .into_iter()
        .map(Into::into)
        .collect();
    ok(invites)
}

#[post("/clubs/<club_id>/reunions/<reunion_id>/invites", format = "application/json", data = "<new_invite>")]
pub fn add_invite(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
    new_invite: Json<NewInviteReunion>,
) -> ApiResponse<InviteReunion> {
    check_required(new_invite.name(), "The name is required.")?;
    if new_invite.email().as_deref().is_some_and(|email| !is_valid_email(email)) {
        return Err(ApplicationError::bad_request("The email is invalid."));
    }
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;

    let invite = dao::reunion::insert_invite(&mut connection, *reunion.id(), &new_invite)?;
    created(invite.into())
}

#[delete("/clubs/<club_id>/reunions/<reunion_id>/invites/<invite_id>")]
pub fn delete_invite(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
    invite_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;
    if dao::reunion::delete_invite(&mut connection, *reunion.id(), invite_id)? == 0 {
        return Err(ApplicationError::not_found("This invitee doesn't exist."));
    }
    done("Invitee deleted.")
}

#[cfg(test)]
mod tests {
    use crate::database::dao;
    use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
    use crate::web::api::tests::{TestApi, read_data};
    use chrono::NaiveDate;
    use dto::club::Role;
    use dto::reunion::{InviteReunion, NewReunion};
    use rocket::http::Status;
    use serde_json::json;

    #[async_test]
    async fn should_manage_invites() {
        let api = TestApi::new().await;
        let mut connection = api.connection();
        let admin = insert_user(&mut connection, "admin@email.com");
        let club = create_club_with_admin(&mut connection, "Club", *admin.id());
        let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);
        let new_reunion = NewReunion::new(
            "AG".to_owned(),
            NaiveDate::from_ymd_opt(2025, 10, 2).unwrap().and_hms_opt(19, 30, 0).unwrap(),
            None,
            None,
            None,
            vec![],
            vec![],
        );
        let reunion = dao::reunion::create_reunion(&mut connection, *club.id(), &new_reunion).unwrap();
        let url = format!("/api/clubs/{}/reunions/{}/invites", club.id(), reunion.id());

        let response = api
            .client
            .post(url.as_str())
            .header(api.authorization(*admin.id()))
            .json(&json!({"name": "Le maire", "email": "not an email"}))
            .dispatch()
            .await;
        assert_eq!(Status::BadRequest, response.status());

        let response = api
            .client
            .post(url.as_str())
            .header(api.authorization(*admin.id()))
            .json(&json!({"name": "Le maire", "email": "maire@mairie.fr", "organization": "Mairie"}))
            .dispatch()
            .await;
        assert_eq!(Status::Created, response.status());
        let invite: InviteReunion = read_data(response).await;

        let response = api
            .client
            .get(url.as_str())
            .header(api.authorization(*member.id()))
            .dispatch()
            .await;
        let invites: Vec<InviteReunion> = read_data(response).await;
        assert_eq!(vec![invite.clone()], invites);

        let response = api
            .client
            .delete(format!("{url}/{}", invite.id()))
            .header(api.authorization(*member.id()))
            .dispatch()
            .await;
        assert_eq!(Status::Forbidden, response.status());

        let response = api
            .client
            .delete(format!("{url}/{}", invite.id()))
            .header(api.authorization(*admin.id()))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }
}
