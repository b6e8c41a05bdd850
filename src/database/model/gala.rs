use crate::database::error::DatabaseError;
use crate::database::model::parse_date;
use derive_getters::Getters;
use diesel::{Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::galas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Gala {
    id: i32,
    club_id: i32,
    name: String,
    date: String,
    location: Option<String>,
    ticket_price_cents: i64,
    tombola_ticket_price_cents: i64,
}

impl TryFrom<Gala> for dto::gala::Gala {
    type Error = DatabaseError;

    fn try_from(value: Gala) -> Result<Self, Self::Error> {
        let date = parse_date(&value.date)?;
        Ok(dto::gala::Gala::new(
            value.id,
            value.club_id,
            value.name,
            date,
            value.location,
            value.ticket_price_cents,
            value.tombola_ticket_price_cents,
        ))
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::gala_invites)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct GalaInvite {
    id: i32,
    gala_id: i32,
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::gala_tables)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct GalaTable {
    id: i32,
    gala_id: i32,
    number: i32,
    label: Option<String>,
    capacity: i32,
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::gala_table_affectations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct GalaTableAffectation {
    id: i32,
    table_id: i32,
    invite_id: i32,
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::gala_tickets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct GalaTicket {
    id: i32,
    gala_id: i32,
    buyer_name: String,
    quantity: i32,
    amount_cents: i64,
    sold_on: String,
}

impl TryFrom<GalaTicket> for dto::gala::GalaTicket {
    type Error = DatabaseError;

    fn try_from(value: GalaTicket) -> Result<Self, Self::Error> {
        let sold_on = parse_date(&value.sold_on)?;
        Ok(dto::gala::GalaTicket::new(
            value.id,
            value.gala_id,
            value.buyer_name,
            value.quantity,
            value.amount_cents,
            sold_on,
        ))
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::gala_tombolas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct GalaTombola {
    id: i32,
    gala_id: i32,
    participant_name: String,
    quantity: i32,
    amount_cents: i64,
}

impl From<GalaTombola> for dto::gala::TombolaEntry {
    fn from(value: GalaTombola) -> Self {
        dto::gala::TombolaEntry::new(
            value.id,
            value.gala_id,
            value.participant_name,
            value.quantity,
            value.amount_cents,
        )
    }
}
