use crate::database::error::DatabaseError;
use crate::database::model::{parse_date_time, parse_stored};
use derive_getters::Getters;
use diesel::{Queryable, Selectable};
use dto::reunion::PresenceStatus;

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::reunions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Reunion {
    id: i32,
    club_id: i32,
    mandat_id: Option<i32>,
    title: String,
    date: String,
    location: Option<String>,
    kind: String,
    compte_rendu: Option<String>,
}

impl TryFrom<Reunion> for dto::reunion::Reunion {
    type Error = DatabaseError;

    fn try_from(value: Reunion) -> Result<Self, Self::Error> {
        let date = parse_date_time(&value.date)?;
        Ok(dto::reunion::Reunion::new(
            value.id,
            value.club_id,
            value.mandat_id,
            value.title,
            date,
            value.location,
            value.kind,
            value.compte_rendu,
        ))
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::ordres_du_jour)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct OrdreDuJour {
    id: i32,
    reunion_id: i32,
    position: i32,
    subject: String,
    notes: Option<String>,
}

impl From<OrdreDuJour> for dto::reunion::OrdreDuJour {
    fn from(value: OrdreDuJour) -> Self {
        dto::reunion::OrdreDuJour::new(
            value.id,
            value.reunion_id,
            value.position,
            value.subject,
            value.notes,
        )
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::listes_presence)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ListePresence {
    id: i32,
    reunion_id: i32,
    member_id: i32,
    status: String,
}

impl ListePresence {
    pub(crate) fn parsed_status(&self) -> Result<PresenceStatus, DatabaseError> {
        parse_stored(&self.status)
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::invites_reunion)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct InviteReunion {
    id: i32,
    reunion_id: i32,
    name: String,
    email: Option<String>,
    organization: Option<String>,
}

impl From<InviteReunion> for dto::reunion::InviteReunion {
    fn from(value: InviteReunion) -> Self {
        dto::reunion::InviteReunion::new(
            value.id,
            value.reunion_id,
            value.name,
            value.email,
            value.organization,
        )
    }
}
