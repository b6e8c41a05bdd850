use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::reunion::{build_presences, check_presences};
use crate::web::api::{ApiResponse, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::reunion::{Presence, PresenceUpdate};
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/reunions/<reunion_id>/presences")]
pub fn get_presences(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
) -> ApiResponse<Vec<Presence>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;
    ok(build_presences(dao::reunion::get_presences(&mut connection, *reunion.id())?)?)
}

/// Members already in the list get their status replaced, the others are added.
#[put("/clubs/<club_id>/reunions/<reunion_id>/presences", format = "application/json", data = "<updates>")]
pub fn save_presences(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    reunion_id: i32,
    updates: Json<Vec<PresenceUpdate>>,
) -> ApiResponse<Vec<Presence>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let reunion = dao::reunion::get_reunion(&mut connection, club_id, reunion_id)?;
    check_presences(&updates, &dao::club::get_member_ids(&mut connection, club_id)?)?;

    dao::reunion::save_presences(&mut connection, *reunion.id(), &updates)?;
    ok(build_presences(dao::reunion::get_presences(&mut connection, *reunion.id())?)?)
}

#[cfg(test)]
mod tests {
    use crate::database::dao;
    use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
    use crate::web::api::tests::{TestApi, read_data};
    use chrono::NaiveDate;
    use dto::club::Role;
    use dto::reunion::{NewReunion, Presence, PresenceStatus};
    use rocket::http::Status;
    use serde_json::json;

    fn new_reunion() -> NewReunion {
        NewReunion::new(
            "AG".to_owned(),
            NaiveDate::from_ymd_opt(2025, 10, 2).unwrap().and_hms_opt(19, 30, 0).unwrap(),
            None,
            None,
            None,
            vec![],
            vec![],
        )
    }

    #[async_test]
    async fn should_upsert_presences() {
        let api = TestApi::new().await;
        let mut connection = api.connection();
        let admin = insert_user(&mut connection, "admin@email.com");
        let club = create_club_with_admin(&mut connection, "Club", *admin.id());
        let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);
        let reunion = dao::reunion::create_reunion(&mut connection, *club.id(), &new_reunion()).unwrap();
        let url = format!("/api/clubs/{}/reunions/{}/presences", club.id(), reunion.id());

        let response = api
            .client
            .put(url.as_str())
            .header(api.authorization(*admin.id()))
            .json(&json!([
                {"member_id": admin.id(), "status": "Present"},
                {"member_id": member.id(), "status": "Absent"}
            ]))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());

        let response = api
            .client
            .put(url.as_str())
            .header(api.authorization(*admin.id()))
            .json(&json!([{"member_id": member.id(), "status": "Excused"}]))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());

        let response = api
            .client
            .get(url.as_str())
            .header(api.authorization(*member.id()))
            .dispatch()
            .await;
        let presences: Vec<Presence> = read_data(response).await;
        assert_eq!(2, presences.len());
        assert_eq!(&PresenceStatus::Present, presences[0].status());
        assert_eq!(&PresenceStatus::Excused, presences[1].status());
    }

    #[async_test]
    async fn should_refuse_strangers() {
        let api = TestApi::new().await;
        let mut connection = api.connection();
        let admin = insert_user(&mut connection, "admin@email.com");
        let stranger = insert_user(&mut connection, "stranger@email.com");
        let club = create_club_with_admin(&mut connection, "Club", *admin.id());
        let reunion = dao::reunion::create_reunion(&mut connection, *club.id(), &new_reunion()).unwrap();

        let response = api
            .client
            .put(format!("/api/clubs/{}/reunions/{}/presences", club.id(), reunion.id()))
            .header(api.authorization(*admin.id()))
            .json(&json!([{"member_id": stranger.id(), "status": "Present"}]))
            .dispatch()
            .await;

        assert_eq!(Status::BadRequest, response.status());
        assert!(dao::reunion::get_presences(&mut connection, *reunion.id()).unwrap().is_empty());
    }
}
