use crate::database::error::DatabaseError;
use crate::database::model::parse_date;
use derive_getters::Getters;
use diesel::{Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::types_budget)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct TypeBudget {
    id: i32,
    name: String,
}

impl From<TypeBudget> for dto::budget::TypeBudget {
    fn from(value: TypeBudget) -> Self {
        dto::budget::TypeBudget::new(value.id, value.name)
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::categories_budget)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CategoryBudget {
    id: i32,
    club_id: i32,
    type_id: i32,
    name: String,
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::sous_categories_budget)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct SousCategoryBudget {
    id: i32,
    category_id: i32,
    name: String,
}

impl From<SousCategoryBudget> for dto::budget::SousCategoryBudget {
    fn from(value: SousCategoryBudget) -> Self {
        dto::budget::SousCategoryBudget::new(value.id, value.category_id, value.name)
    }
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::rubriques_budget)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct RubriqueBudget {
    id: i32,
    sous_category_id: i32,
    mandat_id: i32,
    name: String,
    planned_cents: i64,
}

#[derive(Queryable, Selectable, Debug, Getters, Clone)]
#[diesel(table_name = crate::database::schema::rubriques_budget_realise)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct RubriqueBudgetRealise {
    id: i32,
    rubrique_id: i32,
    amount_cents: i64,
    date: String,
    description: Option<String>,
}

impl TryFrom<RubriqueBudgetRealise> for dto::budget::RubriqueBudgetRealise {
    type Error = DatabaseError;

    fn try_from(value: RubriqueBudgetRealise) -> Result<Self, Self::Error> {
        let date = parse_date(&value.date)?;
        Ok(dto::budget::RubriqueBudgetRealise::new(
            value.id,
            value.rubrique_id,
            value.amount_cents,
            date,
            value.description,
        ))
    }
}
