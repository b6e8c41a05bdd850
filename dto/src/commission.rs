use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Commission {
    id: i32,
    club_id: i32,
    name: String,
    description: Option<String>,
}

impl Commission {
    pub fn new(id: i32, club_id: i32, name: String, description: Option<String>) -> Self {
        Self {
            id,
            club_id,
            name,
            description,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewCommission {
    name: String,
    description: Option<String>,
}

impl NewCommission {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self { name, description }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembreCommission {
    id: i32,
    commission_id: i32,
    mandat_id: i32,
    member_id: i32,
    first_name: String,
    last_name: String,
    is_responsable: bool,
    joined_on: NaiveDate,
}

impl MembreCommission {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        commission_id: i32,
        mandat_id: i32,
        member_id: i32,
        first_name: String,
        last_name: String,
        is_responsable: bool,
        joined_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            commission_id,
            mandat_id,
            member_id,
            first_name,
            last_name,
            is_responsable,
            joined_on,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewMembreCommission {
    member_id: i32,
    mandat_id: i32,
    #[serde(default)]
    is_responsable: bool,
}

impl NewMembreCommission {
    pub fn new(member_id: i32, mandat_id: i32, is_responsable: bool) -> Self {
        Self {
            member_id,
            mandat_id,
            is_responsable,
        }
    }
}
