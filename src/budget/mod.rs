use crate::database::dao;
use crate::database::model::budget::{
    CategoryBudget, RubriqueBudget, RubriqueBudgetRealise, SousCategoryBudget, TypeBudget,
};
use crate::error::{ApplicationError, Result};
use crate::tools::{add_amounts, check_max_amount};
use diesel::SqliteConnection;
use dto::budget::{BudgetCategorySummary, BudgetSummary, BudgetTypeSummary};
use std::collections::HashMap;

pub fn check_planned(planned_cents: i64) -> Result<()> {
    if planned_cents < 0 {
        return Err(ApplicationError::bad_request("The planned amount can't be negative."));
    }
    check_max_amount(planned_cents)
}

pub fn check_realisation(amount_cents: i64) -> Result<()> {
    if amount_cents <= 0 {
        return Err(ApplicationError::bad_request("The amount must be positive."));
    }
    check_max_amount(amount_cents)
}

pub(crate) fn build_categories(
    categories: Vec<CategoryBudget>,
    sous_categories: Vec<SousCategoryBudget>,
) -> Vec<dto::budget::CategoryBudget> {
    let mut by_category: HashMap<i32, Vec<dto::budget::SousCategoryBudget>> = HashMap::new();
    for sous_category in sous_categories {
        by_category
            .entry(*sous_category.category_id())
            .or_default()
            .push(sous_category.into());
    }

    categories
        .into_iter()
        .map(|category| {
            dto::budget::CategoryBudget::new(
                *category.id(),
                *category.club_id(),
                *category.type_id(),
                category.name().clone(),
                by_category.remove(category.id()).unwrap_or_default(),
            )
        })
        .collect()
}

fn realised_by_rubrique(realisations: &[RubriqueBudgetRealise]) -> Result<HashMap<i32, i64>> {
    let mut realised: HashMap<i32, i64> = HashMap::new();
    for realisation in realisations {
        let total = realised.entry(*realisation.rubrique_id()).or_default();
        *total = add_amounts(*total, *realisation.amount_cents())?;
    }
    Ok(realised)
}

pub(crate) fn build_rubriques(
    rubriques: Vec<RubriqueBudget>,
    realisations: &[RubriqueBudgetRealise],
) -> Result<Vec<dto::budget::RubriqueBudget>> {
    let realised = realised_by_rubrique(realisations)?;
    let rubriques = rubriques
        .into_iter()
        .map(|rubrique| {
            dto::budget::RubriqueBudget::new(
                *rubrique.id(),
                *rubrique.sous_category_id(),
                *rubrique.mandat_id(),
                rubrique.name().clone(),
                *rubrique.planned_cents(),
                realised.get(rubrique.id()).copied().unwrap_or_default(),
            )
        })
        .collect();
    Ok(rubriques)
}

/// Planned against realised amounts, per budget type then per category.
pub(crate) fn summarize(
    mandat_id: i32,
    types: Vec<TypeBudget>,
    categories: &[CategoryBudget],
    sous_categories: &[SousCategoryBudget],
    rubriques: &[RubriqueBudget],
    realisations: &[RubriqueBudgetRealise],
) -> Result<BudgetSummary> {
    let category_of_sous_category: HashMap<i32, i32> = sous_categories
        .iter()
        .map(|sous_category| (*sous_category.id(), *sous_category.category_id()))
        .collect();
    let realised = realised_by_rubrique(realisations)?;

    let mut totals: HashMap<i32, (i64, i64)> = HashMap::new();
    for rubrique in rubriques {
        if let Some(category_id) = category_of_sous_category.get(rubrique.sous_category_id()) {
            let total = totals.entry(*category_id).or_default();
            total.0 = add_amounts(total.0, *rubrique.planned_cents())?;
            total.1 = add_amounts(total.1, realised.get(rubrique.id()).copied().unwrap_or_default())?;
        }
    }

    let types = types
        .into_iter()
        .map(|type_budget| {
            let categories = categories
                .iter()
                .filter(|category| category.type_id() == type_budget.id())
                .map(|category| {
                    let (planned_cents, realised_cents) =
                        totals.get(category.id()).copied().unwrap_or_default();
                    BudgetCategorySummary::new(
                        *category.id(),
                        category.name().clone(),
                        planned_cents,
                        realised_cents,
                    )
                })
                .collect();
            BudgetTypeSummary::new(*type_budget.id(), type_budget.name().clone(), categories)
        })
        .collect();

    Ok(BudgetSummary::new(mandat_id, types))
}

pub fn get_summary(connection: &mut SqliteConnection, club_id: i32, mandat_id: i32) -> Result<BudgetSummary> {
    dao::mandat::get_mandat(connection, club_id, mandat_id)?;
    let types = dao::budget::get_types(connection)?;
    let categories = dao::budget::get_categories(connection, club_id)?;
    let category_ids: Vec<i32> = categories.iter().map(|category| *category.id()).collect();
    let sous_categories = dao::budget::get_sous_categories(connection, &category_ids)?;
    let rubriques = dao::budget::get_rubriques(connection, mandat_id)?;
    let rubrique_ids: Vec<i32> = rubriques.iter().map(|rubrique| *rubrique.id()).collect();
    let realisations = dao::budget::get_realisations(connection, &rubrique_ids)?;

    summarize(
        mandat_id,
        types,
        &categories,
        &sous_categories,
        &rubriques,
        &realisations,
    )
}
