use super::Result;
use crate::database::model::user::{NewUser, User};
use crate::database::schema::users;
use chrono::Utc;
use diesel::prelude::*;

pub fn insert_user(
    connection: &mut SqliteConnection,
    email: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
) -> Result<User> {
    let email = email.trim().to_lowercase();
    let new_user = NewUser {
        email: &email,
        password_hash,
        first_name,
        last_name,
        phone,
        created_at: Utc::now().naive_utc().to_string(),
    };
    let user = diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(connection)?;

    Ok(user)
}

pub fn get_user(connection: &mut SqliteConnection, user_id: i32) -> Result<User> {
    let user = users::table
        .find(user_id)
        .select(User::as_select())
        .first(connection)?;

    Ok(user)
}

/// Emails are stored lower-cased, so is the lookup.
pub fn find_by_email(connection: &mut SqliteConnection, email: &str) -> Result<Option<User>> {
    let user = users::table
        .filter(users::email.eq(email.trim().to_lowercase()))
        .select(User::as_select())
        .first(connection)
        .optional()?;

    Ok(user)
}

pub fn get_users(connection: &mut SqliteConnection, user_ids: &[i32]) -> Result<Vec<User>> {
    let users = users::table
        .filter(users::id.eq_any(user_ids))
        .order_by((users::last_name, users::first_name))
        .select(User::as_select())
        .load(connection)?;

    Ok(users)
}

pub fn update_password_hash(
    connection: &mut SqliteConnection,
    user_id: i32,
    password_hash: &str,
) -> Result<()> {
    diesel::update(users::table.find(user_id))
        .set(users::password_hash.eq(password_hash))
        .execute(connection)?;

    Ok(())
}
