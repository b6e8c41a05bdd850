use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct PosteComite {
    id: i32,
    club_id: i32,
    name: String,
    position: i32,
}

impl PosteComite {
    pub fn new(id: i32, club_id: i32, name: String, position: i32) -> Self {
        Self {
            id,
            club_id,
            name,
            position,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewPosteComite {
    name: String,
    position: Option<i32>,
}

impl NewPosteComite {
    pub fn new(name: String, position: Option<i32>) -> Self {
        Self { name, position }
    }
}

/// The holder of a poste for a given mandat.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct MembreComite {
    id: i32,
    mandat_id: i32,
    poste_id: i32,
    poste_name: String,
    member_id: i32,
    first_name: String,
    last_name: String,
}

impl MembreComite {
    pub fn new(
        id: i32,
        mandat_id: i32,
        poste_id: i32,
        poste_name: String,
        member_id: i32,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id,
            mandat_id,
            poste_id,
            poste_name,
            member_id,
            first_name,
            last_name,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct Nomination {
    poste_id: i32,
    member_id: i32,
}

impl Nomination {
    pub fn new(poste_id: i32, member_id: i32) -> Self {
        Self { poste_id, member_id }
    }
}
