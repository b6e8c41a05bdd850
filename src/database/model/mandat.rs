use crate::database::error::DatabaseError;
use crate::database::model::parse_date;
use derive_getters::Getters;
use diesel::{Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::mandats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Mandat {
    id: i32,
    club_id: i32,
    label: String,
    start_date: String,
    end_date: String,
    active: bool,
    default_cotisation_cents: Option<i64>,
}

impl TryFrom<Mandat> for dto::mandat::Mandat {
    type Error = DatabaseError;

    fn try_from(value: Mandat) -> Result<Self, Self::Error> {
        let start_date = parse_date(&value.start_date)?;
        let end_date = parse_date(&value.end_date)?;
        Ok(dto::mandat::Mandat::new(
            value.id,
            value.club_id,
            value.label,
            start_date,
            end_date,
            value.active,
            value.default_cotisation_cents,
        ))
    }
}
