use crate::auth::User;
use chrono::{NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Role of a user within a club. An `Admin` can do everything a `Member` can.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn allows(&self, required: Role) -> bool {
        match required {
            Role::Admin => *self == Role::Admin,
            Role::Member => true,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admin" => Ok(Role::Admin),
            "Member" => Ok(Role::Member),
            _ => Err(format!("Unknown role [role: {value}]")),
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Club {
    id: i32,
    name: String,
    created_at: NaiveDateTime,
}

impl Club {
    pub fn new(id: i32, name: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewClub {
    name: String,
}

impl NewClub {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// A club as seen from one of its members.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct ClubMembership {
    club: Club,
    role: Role,
    joined_on: NaiveDate,
}

impl ClubMembership {
    pub fn new(club: Club, role: Role, joined_on: NaiveDate) -> Self {
        Self {
            club,
            role,
            joined_on,
        }
    }
}

/// A member as seen from their club.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct ClubMember {
    user: User,
    role: Role,
    joined_on: NaiveDate,
}

impl ClubMember {
    pub fn new(user: User, role: Role, joined_on: NaiveDate) -> Self {
        Self {
            user,
            role,
            joined_on,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct AddClubMember {
    email: String,
    role: Role,
    joined_on: Option<NaiveDate>,
}

impl AddClubMember {
    pub fn new(email: String, role: Role, joined_on: Option<NaiveDate>) -> Self {
        Self {
            email,
            role,
            joined_on,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct UpdateRole {
    role: Role,
}

impl UpdateRole {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}
