use crate::auth::User;
use crate::mandat::Mandat;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A due, with what has already been paid. Amounts are in cents.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Cotisation {
    id: i32,
    member_id: i32,
    member_name: String,
    mandat_id: i32,
    amount_cents: i64,
    paid_cents: i64,
    remaining_cents: i64,
}

impl Cotisation {
    pub fn new(
        id: i32,
        member_id: i32,
        member_name: String,
        mandat_id: i32,
        amount_cents: i64,
        paid_cents: i64,
    ) -> Self {
        Self {
            id,
            member_id,
            member_name,
            mandat_id,
            amount_cents,
            paid_cents,
            remaining_cents: amount_cents.saturating_sub(paid_cents),
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewCotisation {
    member_id: i32,
    amount_cents: Option<i64>,
}

impl NewCotisation {
    pub fn new(member_id: i32, amount_cents: Option<i64>) -> Self {
        Self {
            member_id,
            amount_cents,
        }
    }
}

/// Create a cotisation for several members at once.
/// When `member_ids` is empty, every member of the club is targeted.
#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct BulkCotisations {
    #[serde(default)]
    member_ids: Vec<i32>,
    amount_cents: Option<i64>,
}

impl BulkCotisations {
    pub fn new(member_ids: Vec<i32>, amount_cents: Option<i64>) -> Self {
        Self {
            member_ids,
            amount_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct BulkCotisationReport {
    created: Vec<Cotisation>,
    /// Members who already have a cotisation for the mandat.
    ignored: Vec<i32>,
    /// Ids that don't belong to any member of the club.
    rejected: Vec<i32>,
}

impl BulkCotisationReport {
    pub fn new(created: Vec<Cotisation>, ignored: Vec<i32>, rejected: Vec<i32>) -> Self {
        Self {
            created,
            ignored,
            rejected,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct UpdateCotisation {
    amount_cents: i64,
}

impl UpdateCotisation {
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Paiement {
    id: i32,
    cotisation_id: i32,
    amount_cents: i64,
    paid_on: NaiveDate,
    comment: Option<String>,
}

impl Paiement {
    pub fn new(
        id: i32,
        cotisation_id: i32,
        amount_cents: i64,
        paid_on: NaiveDate,
        comment: Option<String>,
    ) -> Self {
        Self {
            id,
            cotisation_id,
            amount_cents,
            paid_on,
            comment,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewPaiement {
    amount_cents: i64,
    paid_on: Option<NaiveDate>,
    comment: Option<String>,
}

impl NewPaiement {
    pub fn new(amount_cents: i64, paid_on: Option<NaiveDate>, comment: Option<String>) -> Self {
        Self {
            amount_cents,
            paid_on,
            comment,
        }
    }
}

/// Where a member stands regarding their cotisation for a mandat.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Situation {
    member: User,
    mandat: Mandat,
    cotisation_id: i32,
    amount_cents: i64,
    paid_cents: i64,
    remaining_cents: i64,
    paiements: Vec<Paiement>,
}

impl Situation {
    pub fn new(member: User, mandat: Mandat, cotisation_id: i32, amount_cents: i64, paiements: Vec<Paiement>) -> Self {
        let paid_cents = paiements.iter().map(|paiement| paiement.amount_cents).fold(0, i64::saturating_add);
        Self {
            member,
            mandat,
            cotisation_id,
            amount_cents,
            paid_cents,
            remaining_cents: amount_cents.saturating_sub(paid_cents),
            paiements,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.remaining_cents <= 0
    }
}
