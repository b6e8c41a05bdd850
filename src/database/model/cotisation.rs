use crate::database::error::DatabaseError;
use crate::database::model::parse_date;
use derive_getters::Getters;
use diesel::{Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::cotisations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Cotisation {
    id: i32,
    member_id: i32,
    mandat_id: i32,
    amount_cents: i64,
    created_at: String,
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::paiements_cotisation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PaiementCotisation {
    id: i32,
    cotisation_id: i32,
    amount_cents: i64,
    paid_on: String,
    comment: Option<String>,
}

impl TryFrom<PaiementCotisation> for dto::cotisation::Paiement {
    type Error = DatabaseError;

    fn try_from(value: PaiementCotisation) -> Result<Self, Self::Error> {
        let paid_on = parse_date(&value.paid_on)?;
        Ok(dto::cotisation::Paiement::new(
            value.id,
            value.cotisation_id,
            value.amount_cents,
            paid_on,
            value.comment,
        ))
    }
}
