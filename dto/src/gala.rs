use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Gala {
    id: i32,
    club_id: i32,
    name: String,
    date: NaiveDate,
    location: Option<String>,
    ticket_price_cents: i64,
    tombola_ticket_price_cents: i64,
}

impl Gala {
    pub fn new(
        id: i32,
        club_id: i32,
        name: String,
        date: NaiveDate,
        location: Option<String>,
        ticket_price_cents: i64,
        tombola_ticket_price_cents: i64,
    ) -> Self {
        Self {
            id,
            club_id,
            name,
            date,
            location,
            ticket_price_cents,
            tombola_ticket_price_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewGala {
    name: String,
    date: NaiveDate,
    location: Option<String>,
    ticket_price_cents: i64,
    tombola_ticket_price_cents: i64,
}

impl NewGala {
    pub fn new(
        name: String,
        date: NaiveDate,
        location: Option<String>,
        ticket_price_cents: i64,
        tombola_ticket_price_cents: i64,
    ) -> Self {
        Self {
            name,
            date,
            location,
            ticket_price_cents,
            tombola_ticket_price_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct GalaInvite {
    id: i32,
    gala_id: i32,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    table_number: Option<i32>,
}

impl GalaInvite {
    pub fn new(
        id: i32,
        gala_id: i32,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        table_number: Option<i32>,
    ) -> Self {
        Self {
            id,
            gala_id,
            name,
            email,
            phone,
            table_number,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewGalaInvite {
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

impl NewGalaInvite {
    pub fn new(name: String, email: Option<String>, phone: Option<String>) -> Self {
        Self { name, email, phone }
    }
}

/// What happened to the rows of an imported invitees file.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct ImportReport {
    imported: usize,
    duplicates: Vec<String>,
    skipped: usize,
}

impl ImportReport {
    pub fn new(imported: usize, duplicates: Vec<String>, skipped: usize) -> Self {
        Self {
            imported,
            duplicates,
            skipped,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct SeatedInvite {
    affectation_id: i32,
    invite_id: i32,
    name: String,
}

impl SeatedInvite {
    pub fn new(affectation_id: i32, invite_id: i32, name: String) -> Self {
        Self {
            affectation_id,
            invite_id,
            name,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct GalaTable {
    id: i32,
    gala_id: i32,
    number: i32,
    label: Option<String>,
    capacity: i32,
    seated: Vec<SeatedInvite>,
}

impl GalaTable {
    pub fn new(
        id: i32,
        gala_id: i32,
        number: i32,
        label: Option<String>,
        capacity: i32,
        seated: Vec<SeatedInvite>,
    ) -> Self {
        Self {
            id,
            gala_id,
            number,
            label,
            capacity,
            seated,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewGalaTable {
    number: i32,
    label: Option<String>,
    capacity: i32,
}

impl NewGalaTable {
    pub fn new(number: i32, label: Option<String>, capacity: i32) -> Self {
        Self {
            number,
            label,
            capacity,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewAffectation {
    invite_id: i32,
}

impl NewAffectation {
    pub fn new(invite_id: i32) -> Self {
        Self { invite_id }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct GalaTicket {
    id: i32,
    gala_id: i32,
    buyer_name: String,
    quantity: i32,
    amount_cents: i64,
    sold_on: NaiveDate,
}

impl GalaTicket {
    pub fn new(
        id: i32,
        gala_id: i32,
        buyer_name: String,
        quantity: i32,
        amount_cents: i64,
        sold_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            gala_id,
            buyer_name,
            quantity,
            amount_cents,
            sold_on,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewGalaTicket {
    buyer_name: String,
    quantity: i32,
    amount_cents: Option<i64>,
    sold_on: Option<NaiveDate>,
}

impl NewGalaTicket {
    pub fn new(
        buyer_name: String,
        quantity: i32,
        amount_cents: Option<i64>,
        sold_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            buyer_name,
            quantity,
            amount_cents,
            sold_on,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct TombolaEntry {
    id: i32,
    gala_id: i32,
    participant_name: String,
    quantity: i32,
    amount_cents: i64,
}

impl TombolaEntry {
    pub fn new(id: i32, gala_id: i32, participant_name: String, quantity: i32, amount_cents: i64) -> Self {
        Self {
            id,
            gala_id,
            participant_name,
            quantity,
            amount_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct NewTombolaEntry {
    participant_name: String,
    quantity: i32,
    amount_cents: Option<i64>,
}

impl NewTombolaEntry {
    pub fn new(participant_name: String, quantity: i32, amount_cents: Option<i64>) -> Self {
        Self {
            participant_name,
            quantity,
            amount_cents,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct DrawRequest {
    count: usize,
}

impl DrawRequest {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

/// Tickets are numbered from 1 across the whole tombola, in the order of the entries.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct TombolaWinner {
    rank: usize,
    entry_id: i32,
    participant_name: String,
    ticket_number: i32,
}

impl TombolaWinner {
    pub fn new(rank: usize, entry_id: i32, participant_name: String, ticket_number: i32) -> Self {
        Self {
            rank,
            entry_id,
            participant_name,
            ticket_number,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct GalaSummary {
    gala: Gala,
    invites_count: usize,
    seated_count: usize,
    tables_count: usize,
    tickets_sold: i64,
    tickets_revenue_cents: i64,
    tombola_tickets_sold: i64,
    tombola_revenue_cents: i64,
    total_revenue_cents: i64,
}

impl GalaSummary {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gala: Gala,
        invites_count: usize,
        seated_count: usize,
        tables_count: usize,
        tickets_sold: i64,
        tickets_revenue_cents: i64,
        tombola_tickets_sold: i64,
        tombola_revenue_cents: i64,
    ) -> Self {
        Self {
            gala,
            invites_count,
            seated_count,
            tables_count,
            tickets_sold,
            tickets_revenue_cents,
            tombola_tickets_sold,
            tombola_revenue_cents,
            total_revenue_cents: tickets_revenue_cents.saturating_add(tombola_revenue_cents),
        }
    }
}
