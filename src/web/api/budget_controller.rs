use crate::budget::build_categories;
use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::tools::check_required;
use crate::web::api::{ApiResponse, created, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use dto::budget::{
    BudgetSummary, CategoryBudget, NewCategoryBudget, NewSousCategoryBudget, SousCategoryBudget, TypeBudget,
};
use dto::club::Role;
use rocket::State;
use rocket::serde::json::Json;

/// Budget types are shared by every club.
#[get("/budget/types")]
pub fn get_types(pool: &State<DbPool>, _session: Session) -> ApiResponse<Vec<TypeBudget>> {
    let mut connection = connect(pool)?;
    let types = dao::budget::get_types(&mut connection)?
        .into_iter()
        .map(Into::into)
        .collect();
    ok(types)
}

#[get("/clubs/<club_id>/budget/categories")]
pub fn get_categories(pool: &State<DbPool>, session: Session, club_id: i32) -> ApiResponse<Vec<CategoryBudget>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let categories = dao::budget::get_categories(&mut connection, club_id)?;
    let category_ids: Vec<i32> = categories.iter().map(|category| *category.id()).collect();
    let sous_categories = dao::budget::get_sous_categories(&mut connection, &category_ids)?;
    ok(build_categories(categories, sous_categories))
}

#[post("/clubs/<club_id>/budget/categories", format = "application/json", data = "<new_category>")]
pub fn create_category(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    new_category: Json<NewCategoryBudget>,
) -> ApiResponse<CategoryBudget> {
    check_required(new_category.name(), "The name is required.")?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    if dao::budget::find_type(&mut connection, *new_category.type_id())?.is_none() {
        return Err(ApplicationError::bad_request("This budget type doesn't exist."));
    }

    let category = dao::budget::insert_category(
        &mut connection,
        club_id,
        *new_category.type_id(),
        new_category.name(),
    )?;
    created(CategoryBudget::new(
        *category.id(),
        *category.club_id(),
        *category.type_id(),
        category.name().clone(),
        vec![],
    ))
}

#[post(
    "/clubs/<club_id>/budget/categories/<category_id>/sous-categories",
    format = "application/json",
    data = "<new_sous_category>"
)]
pub fn create_sous_category(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    category_id: i32,
    new_sous_category: Json<NewSousCategoryBudget>,
) -> ApiResponse<SousCategoryBudget> {
    check_required(new_sous_category.name(), "The name is required.")?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let category = dao::budget::get_category(&mut connection, club_id, category_id)?;
    let sous_category = dao::budget::insert_sous_category(&mut connection, *category.id(), new_sous_category.name())?;
    created(sous_category.into())
}

#[get("/clubs/<club_id>/mandats/<mandat_id>/budget/summary")]
pub fn get_summary(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    mandat_id: i32,
) -> ApiResponse<BudgetSummary> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    ok(crate::budget::get_summary(&mut connection, club_id, mandat_id)?)
}
