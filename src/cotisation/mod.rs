use crate::database::dao;
use crate::database::model::cotisation::{Cotisation, PaiementCotisation};
use crate::database::model::mandat::Mandat;
use crate::database::model::user::User;
use crate::error::{ApplicationError, Result};
use crate::tools::{add_amounts, check_max_amount, sum_amounts};
use derive_getters::Getters;
use diesel::SqliteConnection;
use dto::cotisation::Situation;
use std::collections::HashMap;

/// Amount of a new cotisation: the given one, else the default one of the mandat. It must be positive.
pub(crate) fn resolve_amount(amount_cents: Option<i64>, mandat: &Mandat) -> Result<i64> {
    let amount_cents = amount_cents
        .or(*mandat.default_cotisation_cents())
        .ok_or_else(|| {
            ApplicationError::bad_request("No amount given and the mandat has no default amount.")
        })?;
    check_positive_amount(amount_cents)?;
    Ok(amount_cents)
}

pub fn check_positive_amount(amount_cents: i64) -> Result<()> {
    if amount_cents <= 0 {
        return Err(ApplicationError::bad_request("The amount must be positive."));
    }
    check_max_amount(amount_cents)
}

/// A cotisation can't go below what has already been paid.
pub fn check_new_amount(amount_cents: i64, paid_cents: i64) -> Result<()> {
    check_positive_amount(amount_cents)?;
    if amount_cents < paid_cents {
        return Err(ApplicationError::bad_request(format!(
            "The amount can't be lower than what has already been paid ({paid_cents} cents)."
        )));
    }
    Ok(())
}

/// How a bulk creation splits the requested members.
#[derive(Debug, Getters, PartialEq)]
pub struct BulkPlan {
    to_create: Vec<i32>,
    ignored: Vec<i32>,
    rejected: Vec<i32>,
}

/// Members who already have a cotisation are ignored, those outside the club are rejected.
/// An empty request targets every member of the club.
pub fn plan_bulk(requested: &[i32], club_member_ids: &[i32], with_cotisation: &[i32]) -> BulkPlan {
    let requested = if requested.is_empty() {
        club_member_ids
    } else {
        requested
    };

    let mut plan = BulkPlan {
        to_create: vec![],
        ignored: vec![],
        rejected: vec![],
    };
    for member_id in requested {
        let already_planned = plan.to_create.contains(member_id)
            || plan.ignored.contains(member_id)
            || plan.rejected.contains(member_id);
        if already_planned {
            continue;
        }
        if !club_member_ids.contains(member_id) {
            plan.rejected.push(*member_id);
        } else if with_cotisation.contains(member_id) {
            plan.ignored.push(*member_id);
        } else {
            plan.to_create.push(*member_id);
        }
    }
    plan
}

/// Plan and create the cotisations of a bulk request at once, under the database write lock,
/// so members given a cotisation meanwhile are reported as ignored.
pub(crate) fn create_in_bulk(
    connection: &mut SqliteConnection,
    club_id: i32,
    mandat_id: i32,
    requested: &[i32],
    amount_cents: i64,
) -> Result<(BulkPlan, Vec<dto::cotisation::Cotisation>)> {
    connection.immediate_transaction(|connection| {
        let club_member_ids = dao::club::get_member_ids(connection, club_id)?;
        let with_cotisation = dao::cotisation::get_member_ids_with_cotisation(connection, mandat_id)?;
        let plan = plan_bulk(requested, &club_member_ids, &with_cotisation);

        let created = plan
            .to_create()
            .iter()
            .map(|member_id| -> Result<dto::cotisation::Cotisation> {
                let cotisation = dao::cotisation::insert_cotisation(connection, *member_id, mandat_id, amount_cents)?;
                let member = dao::user::get_user(connection, *member_id)?;
                Ok(build_cotisation(&cotisation, &member, 0))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok((plan, created))
    })
}

pub(crate) fn paid_cents(paiements: &[PaiementCotisation]) -> Result<i64> {
    sum_amounts(paiements.iter().map(|paiement| *paiement.amount_cents()))
}

pub(crate) fn build_cotisation(cotisation: &Cotisation, member: &User, paid_cents: i64) -> dto::cotisation::Cotisation {
    dto::cotisation::Cotisation::new(
        *cotisation.id(),
        *cotisation.member_id(),
        format!("{} {}", member.first_name(), member.last_name()),
        *cotisation.mandat_id(),
        *cotisation.amount_cents(),
        paid_cents,
    )
}

pub(crate) fn build_cotisations(
    cotisations: Vec<(Cotisation, User)>,
    paiements: &[PaiementCotisation],
) -> Result<Vec<dto::cotisation::Cotisation>> {
    let mut paid_by_cotisation: HashMap<i32, i64> = HashMap::new();
    for paiement in paiements {
        let paid = paid_by_cotisation.entry(*paiement.cotisation_id()).or_default();
        *paid = add_amounts(*paid, *paiement.amount_cents())?;
    }

    let cotisations = cotisations
        .iter()
        .map(|(cotisation, member)| {
            let paid_cents = paid_by_cotisation
                .get(cotisation.id())
                .copied()
                .unwrap_or_default();
            build_cotisation(cotisation, member, paid_cents)
        })
        .collect();
    Ok(cotisations)
}

/// Where a member stands with their cotisation of the mandat.
pub fn build_situation(
    connection: &mut SqliteConnection,
    club_id: i32,
    mandat_id: i32,
    member_id: i32,
) -> Result<Situation> {
    let mandat = dao::mandat::get_mandat(connection, club_id, mandat_id)?;
    if dao::club::find_membership(connection, club_id, member_id)?.is_none() {
        return Err(ApplicationError::not_found("This user isn't a member of the club."));
    }
    let cotisation = dao::cotisation::find_cotisation(connection, member_id, mandat_id)?
        .ok_or_else(|| ApplicationError::not_found("This member has no cotisation for the mandat."))?;
    let member = dao::user::get_user(connection, member_id)?;
    let paiements = dao::cotisation::get_paiements(connection, &[*cotisation.id()])?
        .into_iter()
        .map(dto::cotisation::Paiement::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Situation::new(
        member.into(),
        mandat.try_into()?,
        *cotisation.id(),
        *cotisation.amount_cents(),
        paiements,
    ))
}
