use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Present,
    Absent,
    Excused,
}

impl Display for PresenceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for PresenceStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Present" => Ok(PresenceStatus::Present),
            "Absent" => Ok(PresenceStatus::Absent),
            "Excused" => Ok(PresenceStatus::Excused),
            _ => Err(format!("Unknown presence status [status: {value}]")),
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Reunion {
    id: i32,
    club_id: i32,
    mandat_id: Option<i32>,
    title: String,
    date: NaiveDateTime,
    location: Option<String>,
    kind: String,
    compte_rendu: Option<String>,
}

impl Reunion {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        club_id: i32,
        mandat_id: Option<i32>,
        title: String,
        date: NaiveDateTime,
        location: Option<String>,
        kind: String,
        compte_rendu: Option<String>,
    ) -> Self {
        Self {
            id,
            club_id,
            mandat_id,
            title,
            date,
            location,
            kind,
            compte_rendu,
        }
    }
}

/// A meeting together with its agenda and invitees, created at once.
#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewReunion {
    title: String,
    date: NaiveDateTime,
    location: Option<String>,
    kind: Option<String>,
    mandat_id: Option<i32>,
    #[serde(default)]
    ordres_du_jour: Vec<NewOrdreDuJour>,
    #[serde(default)]
    invites: Vec<NewInviteReunion>,
}

impl NewReunion {
    pub fn new(
        title: String,
        date: NaiveDateTime,
        location: Option<String>,
        kind: Option<String>,
        mandat_id: Option<i32>,
        ordres_du_jour: Vec<NewOrdreDuJour>,
        invites: Vec<NewInviteReunion>,
    ) -> Self {
        Self {
            title,
            date,
            location,
            kind,
            mandat_id,
            ordres_du_jour,
            invites,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct UpdateReunion {
    title: String,
    date: NaiveDateTime,
    location: Option<String>,
    kind: String,
    compte_rendu: Option<String>,
}

impl UpdateReunion {
    pub fn new(
        title: String,
        date: NaiveDateTime,
        location: Option<String>,
        kind: String,
        compte_rendu: Option<String>,
    ) -> Self {
        Self {
            title,
            date,
            location,
            kind,
            compte_rendu,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrdreDuJour {
    id: i32,
    reunion_id: i32,
    position: i32,
    subject: String,
    notes: Option<String>,
}

impl OrdreDuJour {
    pub fn new(id: i32, reunion_id: i32, position: i32, subject: String, notes: Option<String>) -> Self {
        Self {
            id,
            reunion_id,
            position,
            subject,
            notes,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, Clone)]
pub struct NewOrdreDuJour {
    subject: String,
    notes: Option<String>,
}

impl NewOrdreDuJour {
    pub fn new(subject: String, notes: Option<String>) -> Self {
        Self { subject, notes }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Presence {
    member_id: i32,
    first_name: String,
    last_name: String,
    status: PresenceStatus,
}

impl Presence {
    pub fn new(member_id: i32, first_name: String, last_name: String, status: PresenceStatus) -> Self {
        Self {
            member_id,
            first_name,
            last_name,
            status,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, Clone)]
pub struct PresenceUpdate {
    member_id: i32,
    status: PresenceStatus,
}

impl PresenceUpdate {
    pub fn new(member_id: i32, status: PresenceStatus) -> Self {
        Self { member_id, status }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct InviteReunion {
    id: i32,
    reunion_id: i32,
    name: String,
    email: Option<String>,
    organization: Option<String>,
}

impl InviteReunion {
    pub fn new(
        id: i32,
        reunion_id: i32,
        name: String,
        email: Option<String>,
        organization: Option<String>,
    ) -> Self {
        Self {
            id,
            reunion_id,
            name,
            email,
            organization,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, Clone)]
pub struct NewInviteReunion {
    name: String,
    email: Option<String>,
    organization: Option<String>,
}

impl NewInviteReunion {
    pub fn new(name: String, email: Option<String>, organization: Option<String>) -> Self {
        Self {
            name,
            email,
            organization,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct ReunionDetails {
    reunion: Reunion,
    ordres_du_jour: Vec<OrdreDuJour>,
    presences: Vec<Presence>,
    invites: Vec<InviteReunion>,
}

impl ReunionDetails {
    pub fn new(
        reunion: Reunion,
        ordres_du_jour: Vec<OrdreDuJour>,
        presences: Vec<Presence>,
        invites: Vec<InviteReunion>,
    ) -> Self {
        Self {
            reunion,
            ordres_du_jour,
            presences,
            invites,
        }
    }
}
