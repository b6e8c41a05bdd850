use crate::database::error::DatabaseError;
use crate::database::model::{parse_date, parse_date_time, parse_stored};
use derive_getters::Getters;
use diesel::{Queryable, Selectable};
use dto::club::Role;

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::clubs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Club {
    id: i32,
    name: String,
    created_at: String,
}

impl TryFrom<Club> for dto::club::Club {
    type Error = DatabaseError;

    fn try_from(value: Club) -> Result<Self, Self::Error> {
        let created_at = parse_date_time(&value.created_at)?;
        Ok(dto::club::Club::new(value.id, value.name, created_at))
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::user_clubs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserClub {
    id: i32,
    user_id: i32,
    club_id: i32,
    role: String,
    joined_on: String,
}

impl UserClub {
    pub(crate) fn parsed_role(&self) -> Result<Role, DatabaseError> {
        parse_stored(&self.role)
    }

    pub(crate) fn parsed_joined_on(&self) -> Result<chrono::NaiveDate, DatabaseError> {
        parse_date(&self.joined_on)
    }
}
