use crate::database::error::DatabaseError;
use crate::database::model::parse_date;
use crate::database::model::user::User;
use derive_getters::Getters;
use diesel::{Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::commissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Commission {
    id: i32,
    club_id: i32,
    name: String,
    description: Option<String>,
}

impl From<Commission> for dto::commission::Commission {
    fn from(value: Commission) -> Self {
        dto::commission::Commission::new(value.id, value.club_id, value.name, value.description)
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::membres_commission)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct MembreCommission {
    id: i32,
    commission_id: i32,
    member_id: i32,
    mandat_id: i32,
    is_responsable: bool,
    active: bool,
    joined_on: String,
}

/// A commission membership along with the club member it belongs to.
pub(crate) fn membre_commission(
    membre: MembreCommission,
    user: User,
) -> Result<dto::commission::MembreCommission, DatabaseError> {
    let joined_on = parse_date(&membre.joined_on)?;
    Ok(dto::commission::MembreCommission::new(
        membre.id,
        membre.commission_id,
        membre.mandat_id,
        membre.member_id,
        user.first_name().clone(),
        user.last_name().clone(),
        membre.is_responsable,
        joined_on,
    ))
}
