use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::{ApplicationError, Result};
use crate::tools::password::{MINIMUM_PASSWORD_LENGTH, hash, is_strong_enough, verify};
use crate::tools::{is_valid_email, log_error_and_return};
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::session_storage::SessionStorage;
use dto::auth::{ChangePasswordRequest, CurrentUser, LoginRequest, LoginResponse, RegisterRequest, User};
use dto::club::ClubMembership;
use log::{debug, warn};
use rocket::State;
use rocket::serde::json::Json;
use std::sync::Mutex;

fn check_password(password: &str) -> Result<()> {
    if !is_strong_enough(password) {
        return Err(ApplicationError::bad_request(format!(
            "The password must be at least {MINIMUM_PASSWORD_LENGTH} characters long."
        )));
    }
    Ok(())
}

fn hash_password(password: &str) -> Result<String> {
    hash(password).map_err(log_error_and_return(ApplicationError::PasswordHashing))
}

#[post("/auth/register", format = "application/json", data = "<request>")]
pub fn register(pool: &State<DbPool>, request: Json<RegisterRequest>) -> ApiResponse<User> {
    if !is_valid_email(request.email()) {
        return Err(ApplicationError::bad_request("The email address isn't valid."));
    }
    if request.first_name().trim().is_empty() || request.last_name().trim().is_empty() {
        return Err(ApplicationError::bad_request("First and last names are required."));
    }
    check_password(request.password())?;

    let mut connection = connect(pool)?;
    if dao::user::find_by_email(&mut connection, request.email())?.is_some() {
        debug!("Registration refused, email already used [email: {}]", request.email());
        return Err(ApplicationError::bad_request("This email address is already used."));
    }

    let password_hash = hash_password(request.password())?;
    let user = dao::user::insert_user(
        &mut connection,
        request.email(),
        &password_hash,
        request.first_name().trim(),
        request.last_name().trim(),
        request.phone().as_deref(),
    )?;
    created(user.into())
}

/// Check the credentials and open a session, whose token is then expected as a bearer token.
#[post("/auth/login", format = "application/json", data = "<request>")]
pub fn login(
    pool: &State<DbPool>,
    session_storage: &State<Mutex<SessionStorage>>,
    request: Json<LoginRequest>,
) -> ApiResponse<LoginResponse> {
    let mut connection = connect(pool)?;
    let user = dao::user::find_by_email(&mut connection, request.email())?;
    let stored_hash = user.as_ref().map(|user| user.password_hash().as_str());
    if !verify(request.password(), stored_hash) {
        warn!("Login failed [email: {}]", request.email());
        return Err(ApplicationError::WrongCredentials);
    }
    let Some(user) = user else {
        return Err(ApplicationError::WrongCredentials);
    };

    let token = session_storage
        .lock()
        .map_err(log_error_and_return(ApplicationError::SessionStorage))?
        .open(*user.id());
    ok(LoginResponse::new(token, user.into()))
}

#[post("/auth/logout")]
pub fn logout(session_storage: &State<Mutex<SessionStorage>>, session: Session) -> ApiResponse<()> {
    session_storage
        .lock()
        .map_err(log_error_and_return(ApplicationError::SessionStorage))?
        .close(session.token());
    done("Logged out.")
}

#[get("/auth/me")]
pub fn me(pool: &State<DbPool>, session: Session) -> ApiResponse<CurrentUser> {
    let mut connection = connect(pool)?;
    let user = dao::user::get_user(&mut connection, *session.user_id())?;
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

    ok(CurrentUser::new(user.into(), clubs))
}

#[put("/auth/password", format = "application/json", data = "<request>")]
pub fn change_password(
    pool: &State<DbPool>,
    session: Session,
    request: Json<ChangePasswordRequest>,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    let user = dao::user::get_user(&mut connection, *session.user_id())?;
    if !verify(request.current_password(), Some(user.password_hash())) {
        warn!("Password change refused, wrong current password [user_id: {}]", user.id());
        return Err(ApplicationError::bad_request("The current password is wrong."));
    }
    check_password(request.new_password())?;

    let password_hash = hash_password(request.new_password())?;
    dao::user::update_password_hash(&mut connection, *user.id(), &password_hash)?;
    done("Password changed.")
}
