use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::Result;
use crate::mandat::check_mandat;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::club::Role;
use dto::mandat::{Mandat, NewMandat};
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/mandats")]
pub fn get_mandats(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Vec<Mandat>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let mandats = dao::mandat::get_mandats(&mut connection, club_id)?
        .into_iter()
        .map(Mandat::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ok(mandats)
}

/// New mandats are created inactive, see [activate_mandat].
#[post("/clubs/<club_id>/mandats", format = "application/json", data = "<new_mandat>")]
pub fn create_mandat(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    new_mandat: Json<NewMandat>,
) -> ApiResponse<Mandat> {
    check_mandat(&new_mandat)?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let mandat = dao::mandat::insert_mandat(&mut connection, club_id, &new_mandat, false)?;
    created(mandat.try_into()?)
}

#[put("/clubs/<club_id>/mandats/<mandat_id>/activate")]
pub fn activate_mandat(pool: &State<DbPool>, session: Session, club_id: i32, mandat_id: i32) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    dao::mandat::get_mandat(&mut connection, club_id, mandat_id)?;
    dao::mandat::activate(&mut connection, club_id, mandat_id)?;
    done("Mandat activated.")
}

#[cfg(test)]
mod tests {
    use crate::database::fixtures::{create_club_with_admin, insert_mandat, insert_user};
    use crate::web::api::tests::{TestApi, read_data};
    use dto::mandat::Mandat;
    use rocket::http::Status;
    use serde_json::json;

    mod create_mandat {
        use super::*;

        #[async_test]
        async fn success() {
            let api = TestApi::new().await;
            let mut connection = api.connection();
            let admin = insert_user(&mut connection, "admin@email.com");
            let club = create_club_with_admin(&mut connection, "Club", *admin.id());

            let response = api
                .client
                .post(format!("/api/clubs/{}/mandats", club.id()))
                .header(api.authorization(*admin.id()))
                .json(&json!({
                    "label": "2025-2026",
                    "start_date": "2025-09-01",
                    "end_date": "2026-08-31",
                    "default_cotisation_cents": 5000
                }))
                .dispatch()
                .await;

            assert_eq!(Status::Created, response.status());
            let mandat: Mandat = read_data(response).await;
            assert_eq!("2025-2026", mandat.label());
            assert!(!mandat.active());
        }

        #[async_test]
        async fn fail_when_dates_reversed() {
            let api = TestApi::new().await;
            let mut connection = api.connection();
            let admin = insert_user(&mut connection, "admin@email.com");
            let club = create_club_with_admin(&mut connection, "Club", *admin.id());

            let response = api
                .client
                .post(format!("/api/clubs/{}/mandats", club.id()))
                .header(api.authorization(*admin.id()))
                .json(&json!({"label": "2025-2026", "start_date": "2026-08-31", "end_date": "2025-09-01"}))
                .dispatch()
                .await;

            assert_eq!(Status::BadRequest, response.status());
        }
    }

    mod activate_mandat {
        use super::*;

        #[async_test]
        async fn success() {
            let api = TestApi::new().await;
            let mut connection = api.connection();
            let admin = insert_user(&mut connection, "admin@email.com");
            let club = create_club_with_admin(&mut connection, "Club", *admin.id());
            let previous = insert_mandat(&mut connection, *club.id(), "2024-2025", true);
            let next = insert_mandat(&mut connection, *club.id(), "2025-2026", false);

            let response = api
                .client
                .put(format!("/api/clubs/{}/mandats/{}/activate", club.id(), next.id()))
                .header(api.authorization(*admin.id()))
                .dispatch()
                .await;
            assert_eq!(Status::Ok, response.status());

            let response = api
                .client
                .get(format!("/api/clubs/{}/mandats", club.id()))
                .header(api.authorization(*admin.id()))
                .dispatch()
                .await;
            let mandats: Vec<Mandat> = read_data(response).await;
            let active: Vec<&i32> = mandats.iter().filter(|mandat| *mandat.active()).map(Mandat::id).collect();
            assert_eq!(vec![next.id()], active);
            assert!(mandats.iter().any(|mandat| mandat.id() == previous.id()));
        }

        #[async_test]
        async fn fail_when_mandat_of_other_club() {
            let api = TestApi::new().await;
            let mut connection = api.connection();
            let admin = insert_user(&mut connection, "admin@email.com");
            let club = create_club_with_admin(&mut connection, "Club", *admin.id());
            let other = create_club_with_admin(&mut connection, "Other", *admin.id());
            let mandat = insert_mandat(&mut connection, *other.id(), "2025-2026", false);

            let response = api
                .client
                .put(format!("/api/clubs/{}/mandats/{}/activate", club.id(), mandat.id()))
                .header(api.authorization(*admin.id()))
                .dispatch()
                .await;

            assert_eq!(Status::NotFound, response.status());
        }
    }
}
