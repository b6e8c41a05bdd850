use super::Result;
use crate::database::model::budget::{
    CategoryBudget, RubriqueBudget, RubriqueBudgetRealise, SousCategoryBudget, TypeBudget,
};
use crate::database::schema::{
    categories_budget, rubriques_budget, rubriques_budget_realise, sous_categories_budget,
    types_budget,
};
use chrono::NaiveDate;
use diesel::prelude::*;

pub fn get_types(connection: &mut SqliteConnection) -> Result<Vec<TypeBudget>> {
    let types = types_budget::table
        .order_by(types_budget::id)
        .select(TypeBudget::as_select())
        .load(connection)?;

    Ok(types)
}

pub fn find_type(connection: &mut SqliteConnection, type_id: i32) -> Result<Option<TypeBudget>> {
    let type_budget = types_budget::table
        .find(type_id)
        .select(TypeBudget::as_select())
        .first(connection)
        .optional()?;

    Ok(type_budget)
}

pub fn get_categories(connection: &mut SqliteConnection, club_id: i32) -> Result<Vec<CategoryBudget>> {
    let categories = categories_budget::table
        .filter(categories_budget::club_id.eq(club_id))
        .order_by((categories_budget::type_id, categories_budget::name))
        .select(CategoryBudget::as_select())
        .load(connection)?;

    Ok(categories)
}

pub fn get_category(
    connection: &mut SqliteConnection,
    club_id: i32,
    category_id: i32,
) -> Result<CategoryBudget> {
    let category = categories_budget::table
        .filter(categories_budget::club_id.eq(club_id))
        .filter(categories_budget::id.eq(category_id))
        .select(CategoryBudget::as_select())
        .first(connection)?;

    Ok(category)
}

pub fn insert_category(
    connection: &mut SqliteConnection,
    club_id: i32,
    type_id: i32,
    name: &str,
) -> Result<CategoryBudget> {
    let category = diesel::insert_into(categories_budget::table)
        .values((
            categories_budget::club_id.eq(club_id),
            categories_budget::type_id.eq(type_id),
            categories_budget::name.eq(name.trim()),
        ))
        .returning(CategoryBudget::as_returning())
        .get_result(connection)?;

    Ok(category)
}

pub fn get_sous_categories(
    connection: &mut SqliteConnection,
    category_ids: &[i32],
) -> Result<Vec<SousCategoryBudget>> {
    let sous_categories = sous_categories_budget::table
        .filter(sous_categories_budget::category_id.eq_any(category_ids))
        .order_by(sous_categories_budget::name)
        .select(SousCategoryBudget::as_select())
        .load(connection)?;

    Ok(sous_categories)
}

pub fn get_sous_category_in_club(
    connection: &mut SqliteConnection,
    club_id: i32,
    sous_category_id: i32,
) -> Result<SousCategoryBudget> {
    let sous_category = sous_categories_budget::table
        .inner_join(categories_budget::table)
        .filter(categories_budget::club_id.eq(club_id))
        .filter(sous_categories_budget::id.eq(sous_category_id))
        .select(SousCategoryBudget::as_select())
        .first(connection)?;

    Ok(sous_category)
}

pub fn insert_sous_category(
    connection: &mut SqliteConnection,
    category_id: i32,
    name: &str,
) -> Result<SousCategoryBudget> {
    let sous_category = diesel::insert_into(sous_categories_budget::table)
        .values((
            sous_categories_budget::category_id.eq(category_id),
            sous_categories_budget::name.eq(name.trim()),
        ))
        .returning(SousCategoryBudget::as_returning())
        .get_result(connection)?;

    Ok(sous_category)
}

pub fn get_rubriques(connection: &mut SqliteConnection, mandat_id: i32) -> Result<Vec<RubriqueBudget>> {
    let rubriques = rubriques_budget::table
        .filter(rubriques_budget::mandat_id.eq(mandat_id))
        .order_by((rubriques_budget::sous_category_id, rubriques_budget::name))
        .select(RubriqueBudget::as_select())
        .load(connection)?;

    Ok(rubriques)
}

pub fn get_rubrique_in_club(
    connection: &mut SqliteConnection,
    club_id: i32,
    rubrique_id: i32,
) -> Result<RubriqueBudget> {
    let rubrique = rubriques_budget::table
        .inner_join(sous_categories_budget::table.inner_join(categories_budget::table))
        .filter(categories_budget::club_id.eq(club_id))
        .filter(rubriques_budget::id.eq(rubrique_id))
        .select(RubriqueBudget::as_select())
        .first(connection)?;

    Ok(rubrique)
}

pub fn insert_rubrique(
    connection: &mut SqliteConnection,
    sous_category_id: i32,
    mandat_id: i32,
    name: &str,
    planned_cents: i64,
) -> Result<RubriqueBudget> {
    let rubrique = diesel::insert_into(rubriques_budget::table)
        .values((
            rubriques_budget::sous_category_id.eq(sous_category_id),
            rubriques_budget::mandat_id.eq(mandat_id),
            rubriques_budget::name.eq(name.trim()),
            rubriques_budget::planned_cents.eq(planned_cents),
        ))
        .returning(RubriqueBudget::as_returning())
        .get_result(connection)?;

    Ok(rubrique)
}

pub fn update_rubrique(
    connection: &mut SqliteConnection,
    rubrique_id: i32,
    name: &str,
    planned_cents: i64,
) -> Result<RubriqueBudget> {
    let rubrique = diesel::update(rubriques_budget::table.find(rubrique_id))
        .set((
            rubriques_budget::name.eq(name.trim()),
            rubriques_budget::planned_cents.eq(planned_cents),
        ))
        .returning(RubriqueBudget::as_returning())
        .get_result(connection)?;

    Ok(rubrique)
}

pub fn delete_rubrique(connection: &mut SqliteConnection, rubrique_id: i32) -> Result<usize> {
    let deleted = diesel::delete(rubriques_budget::table.find(rubrique_id)).execute(connection)?;
    Ok(deleted)
}

pub fn get_realisations(
    connection: &mut SqliteConnection,
    rubrique_ids: &[i32],
) -> Result<Vec<RubriqueBudgetRealise>> {
    let realisations = rubriques_budget_realise::table
        .filter(rubriques_budget_realise::rubrique_id.eq_any(rubrique_ids))
        .order_by((rubriques_budget_realise::date, rubriques_budget_realise::id))
        .select(RubriqueBudgetRealise::as_select())
        .load(connection)?;

    Ok(realisations)
}

pub fn get_realisation_in_club(
    connection: &mut SqliteConnection,
    club_id: i32,
    realisation_id: i32,
) -> Result<RubriqueBudgetRealise> {
    let realisation = rubriques_budget_realise::table
        .inner_join(
            rubriques_budget::table
                .inner_join(sous_categories_budget::table.inner_join(categories_budget::table)),
        )
        .filter(categories_budget::club_id.eq(club_id))
        .filter(rubriques_budget_realise::id.eq(realisation_id))
        .select(RubriqueBudgetRealise::as_select())
        .first(connection)?;

    Ok(realisation)
}

pub fn insert_realisation(
    connection: &mut SqliteConnection,
    rubrique_id: i32,
    amount_cents: i64,
    date: NaiveDate,
    description: Option<&str>,
) -> Result<RubriqueBudgetRealise> {
    let realisation = diesel::insert_into(rubriques_budget_realise::table)
        .values((
            rubriques_budget_realise::rubrique_id.eq(rubrique_id),
            rubriques_budget_realise::amount_cents.eq(amount_cents),
            rubriques_budget_realise::date.eq(date.to_string()),
            rubriques_budget_realise::description.eq(description),
        ))
        .returning(RubriqueBudgetRealise::as_returning())
        .get_result(connection)?;

    Ok(realisation)
}

pub fn delete_realisation(connection: &mut SqliteConnection, realisation_id: i32) -> Result<usize> {
    let deleted =
        diesel::delete(rubriques_budget_realise::table.find(realisation_id)).execute(connection)?;
    Ok(deleted)
}
