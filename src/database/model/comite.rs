use derive_getters::Getters;
use diesel::{Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::postes_comite)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PosteComite {
    id: i32,
    club_id: i32,
    name: String,
    position: i32,
}

impl From<PosteComite> for dto::comite::PosteComite {
    fn from(value: PosteComite) -> Self {
        dto::comite::PosteComite::new(value.id, value.club_id, value.name, value.position)
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::membres_comite)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct MembreComite {
    id: i32,
    poste_id: i32,
    member_id: i32,
    mandat_id: i32,
}
