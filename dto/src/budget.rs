use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Top of the budget hierarchy: `Recettes` or `Dépenses`.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct TypeBudget {
    id: i32,
    name: String,
}

impl TypeBudget {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct CategoryBudget {
    id: i32,
    club_id: i32,
    type_id: i32,
    name: String,
    sous_categories: Vec<SousCategoryBudget>,
}

impl CategoryBudget {
    pub fn new(
        id: i32,
        club_id: i32,
        type_id: i32,
        name: String,
        sous_categories: Vec<SousCategoryBudget>,
    ) -> Self {
        Self {
            id,
            club_id,
            type_id,
            name,
            sous_categories,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewCategoryBudget {
    type_id: i32,
    name: String,
}

impl NewCategoryBudget {
    pub fn new(type_id: i32, name: String) -> Self {
        Self { type_id, name }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct SousCategoryBudget {
    id: i32,
    category_id: i32,
    name: String,
}

impl SousCategoryBudget {
    pub fn new(id: i32, category_id: i32, name: String) -> Self {
        Self {
            id,
            category_id,
            name,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewSousCategoryBudget {
    name: String,
}

impl NewSousCategoryBudget {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct RubriqueBudget {
    id: i32,
    sous_category_id: i32,
    mandat_id: i32,
    name: String,
    planned_cents: i64,
    realised_cents: i64,
}

impl RubriqueBudget {
    pub fn new(
        id: i32,
        sous_category_id: i32,
        mandat_id: i32,
        name: String,
        planned_cents: i64,
        realised_cents: i64,
    ) -> Self {
        Self {
            id,
            sous_category_id,
            mandat_id,
            name,
            planned_cents,
            realised_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewRubriqueBudget {
    sous_category_id: i32,
    name: String,
    planned_cents: i64,
}

impl NewRubriqueBudget {
    pub fn new(sous_category_id: i32, name: String, planned_cents: i64) -> Self {
        Self {
            sous_category_id,
            name,
            planned_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct UpdateRubriqueBudget {
    name: String,
    planned_cents: i64,
}

impl UpdateRubriqueBudget {
    pub fn new(name: String, planned_cents: i64) -> Self {
        Self {
            name,
            planned_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct RubriqueBudgetRealise {
    id: i32,
    rubrique_id: i32,
    amount_cents: i64,
    date: NaiveDate,
    description: Option<String>,
}

impl RubriqueBudgetRealise {
    pub fn new(
        id: i32,
        rubrique_id: i32,
        amount_cents: i64,
        date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            rubrique_id,
            amount_cents,
            date,
            description,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewRubriqueBudgetRealise {
    amount_cents: i64,
    date: Option<NaiveDate>,
    description: Option<String>,
}

impl NewRubriqueBudgetRealise {
    pub fn new(amount_cents: i64, date: Option<NaiveDate>, description: Option<String>) -> Self {
        Self {
            amount_cents,
            date,
            description,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct BudgetCategorySummary {
    category_id: i32,
    name: String,
    planned_cents: i64,
    realised_cents: i64,
}

impl BudgetCategorySummary {
    pub fn new(category_id: i32, name: String, planned_cents: i64, realised_cents: i64) -> Self {
        Self {
            category_id,
            name,
            planned_cents,
            realised_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct BudgetTypeSummary {
    type_id: i32,
    name: String,
    planned_cents: i64,
    realised_cents: i64,
    categories: Vec<BudgetCategorySummary>,
}

impl BudgetTypeSummary {
    pub fn new(type_id: i32, name: String, categories: Vec<BudgetCategorySummary>) -> Self {
        Self {
            type_id,
            name,
            planned_cents: categories.iter().map(|category| category.planned_cents).fold(0, i64::saturating_add),
            realised_cents: categories.iter().map(|category| category.realised_cents).fold(0, i64::saturating_add),
            categories,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct BudgetSummary {
    mandat_id: i32,
    types: Vec<BudgetTypeSummary>,
}

impl BudgetSummary {
    pub fn new(mandat_id: i32, types: Vec<BudgetTypeSummary>) -> Self {
        Self { mandat_id, types }
    }
}
