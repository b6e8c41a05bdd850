use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::{ApplicationError, Result};
use crate::tools::check_required;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use diesel::SqliteConnection;
use dto::club::Role;
use dto::commission::{Commission, NewCommission};
use rocket::State;
use rocket::serde::json::Json;

/// Names are unique in a club, whatever their case.
fn check_name_available(
    connection: &mut SqliteConnection,
    club_id: i32,
    name: &str,
    commission_id: Option<i32>,
) -> Result<()> {
    check_required(name, "The name is required.")?;
    match dao::commission::find_by_name(connection, club_id, name)? {
        Some(existing) if Some(*existing.id()) != commission_id => Err(ApplicationError::bad_request(
            "A commission with this name already exists.",
        )),
        _ => Ok(()),
    }
}

#[get("/clubs/<club_id>/commissions")]
pub fn get_commissions(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Vec<Commission>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let commissions = dao::commission::get_commissions(&mut connection, club_id)?
        .into_iter()
        .map(Into::into)
        .collect();
    ok(commissions)
}

#[post("/clubs/<club_id>/commissions", format = "application/json", data = "<new_commission>")]
pub fn create_commission(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    new_commission: Json<NewCommission>,
) -> ApiResponse<Commission> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    check_name_available(&mut connection, club_id, new_commission.name(), None)?;

    let commission = dao::commission::insert_commission(
        &mut connection,
        club_id,
        new_commission.name().trim(),
        new_commission.description().as_deref(),
    )?;
    created(commission.into())
}

#[put("/clubs/<club_id>/commissions/<commission_id>", format = "application/json", data = "<new_commission>")]
pub fn update_commission(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    commission_id: i32,
    new_commission: Json<NewCommission>,
) -> ApiResponse<Commission> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let commission = dao::commission::get_commission(&mut connection, club_id, commission_id)?;
    check_name_available(&mut connection, club_id, new_commission.name(), Some(*commission.id()))?;

    let commission = dao::commission::update_commission(
        &mut connection,
        *commission.id(),
        new_commission.name().trim(),
        new_commission.description().as_deref(),
    )?;
    ok(commission.into())
}

#[delete("/clubs/<club_id>/commissions/<commission_id>")]
pub fn delete_commission(pool: &State<DbPool>, session: Session, club_id: i32, commission_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let commission = dao::commission::get_commission(&mut connection, club_id, commission_id)?;
    dao::commission::delete_commission(&mut connection, *commission.id())?;
    done("Commission deleted.")
}

#[cfg(test)]
mod tests {
    use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
    use crate::web::api::tests::{TestApi, read_data, read_message};
    use dto::club::Role;
    use dto::commission::Commission;
    use rocket::http::Status;
    use serde_json::json;

    #[async_test]
    async fn should_manage_commissions() {
        let api = TestApi::new().await;
        let mut connection = api.connection();
        let admin = insert_user(&mut connection, "admin@email.com");
        let club = create_club_with_admin(&mut connection, "Club", *admin.id());
        let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);

        let response = api
            .client
            .post(format!("/api/clubs/{}/commissions", club.id()))
            .header(api.authorization(*admin.id()))
            .json(&json!({"name": "Actions", "description": "Actions de service"}))
            .dispatch()
            .await;
        assert_eq!(Status::Created, response.status());
        let commission: Commission = read_data(response).await;

        let response = api
            .client
            .put(format!("/api/clubs/{}/commissions/{}", club.id(), commission.id()))
            .header(api.authorization(*admin.id()))
            .json(&json!({"name": "ACTIONS"}))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());

        let response = api
            .client
            .get(format!("/api/clubs/{}/commissions", club.id()))
            .header(api.authorization(*member.id()))
            .dispatch()
            .await;
        let commissions: Vec<Commission> = read_data(response).await;
        assert_eq!(1, commissions.len());
        assert_eq!("ACTIONS", commissions[0].name());
        assert_eq!(&None, commissions[0].description());

        let response = api
            .client
            .delete(format!("/api/clubs/{}/commissions/{}", club.id(), commission.id()))
            .header(api.authorization(*admin.id()))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }

    #[async_test]
    async fn should_refuse_duplicate_name() {
        let api = TestApi::new().await;
        let mut connection = api.connection();
        let admin = insert_user(&mut connection, "admin@email.com");
        let club = create_club_with_admin(&mut connection, "Club", *admin.id());

        for (name, expected_status) in [("Actions", Status::Created), (" actions ", Status::BadRequest)] {
            let response = api
                .client
                .post(format!("/api/clubs/{}/commissions", club.id()))
                .header(api.authorization(*admin.id()))
                .json(&json!({"name": name}))
                .dispatch()
                .await;
            assert_eq!(expected_status, response.status());
            if expected_status == Status::BadRequest {
                assert_eq!("A commission with this name already exists.", read_message(response).await);
            }
        }
    }

    #[async_test]
    async fn should_refuse_members_creating() {
        let api = TestApi::new().await;
        let mut connection = api.connection();
        let admin = insert_user(&mut connection, "admin@email.com");
        let club = create_club_with_admin(&mut connection, "Club", *admin.id());
        let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);

        let response = api
            .client
            .post(format!("/api/clubs/{}/commissions", club.id()))
            .header(api.authorization(*member.id()))
            .json(&json!({"name": "Actions"}))
            .dispatch()
            .await;

        assert_eq!(Status::Forbidden, response.status());
    }
}
