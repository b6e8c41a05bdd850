use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Mandat {
    id: i32,
    club_id: i32,
    label: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    active: bool,
    default_cotisation_cents: Option<i64>,
}

impl Mandat {
    pub fn new(
        id: i32,
        club_id: i32,
        label: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active: bool,
        default_cotisation_cents: Option<i64>,
    ) -> Self {
        Self {
            id,
            club_id,
            label,
            start_date,
            end_date,
            active,
            default_cotisation_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, Clone)]
pub struct NewMandat {
    label: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    default_cotisation_cents: Option<i64>,
}

impl NewMandat {
    pub fn new(
        label: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        default_cotisation_cents: Option<i64>,
    ) -> Self {
        Self {
            label,
            start_date,
            end_date,
            default_cotisation_cents,
        }
    }
}

/// Move a club from its active mandat to a brand-new one.
#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct TransitionRequest {
    mandat: NewMandat,
    #[serde(default)]
    carry_over_commissions: bool,
    #[serde(default)]
    carry_over_budget: bool,
}

impl TransitionRequest {
    pub fn new(mandat: NewMandat, carry_over_commissions: bool, carry_over_budget: bool) -> Self {
        Self {
            mandat,
            carry_over_commissions,
            carry_over_budget,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct TransitionReport {
    previous_mandat_id: Option<i32>,
    mandat: Mandat,
    commission_members_carried: usize,
    rubriques_carried: usize,
}

impl TransitionReport {
    pub fn new(
        previous_mandat_id: Option<i32>,
        mandat: Mandat,
        commission_members_carried: usize,
        rubriques_carried: usize,
    ) -> Self {
        Self {
            previous_mandat_id,
            mandat,
            commission_members_carried,
            rubriques_carried,
        }
    }
}
