use derive_getters::Getters;
use diesel::{Insertable, Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct User {
    id: i32,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::database::schema::users)]
pub(crate) struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
    pub created_at: String,
}

impl From<User> for dto::auth::User {
    fn from(value: User) -> Self {
        dto::auth::User::new(
            value.id,
            value.email,
            value.first_name,
            value.last_name,
            value.phone,
        )
    }
}
