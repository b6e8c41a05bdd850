use crate::database::model::gala::{GalaInvite, GalaTable, GalaTableAffectation, GalaTicket, GalaTombola};
use crate::error::{ApplicationError, Result};
use crate::tools::{MAX_AMOUNT_CENTS, check_max_amount, normalize, sum_amounts};
use dto::gala::{Gala, GalaSummary, NewGala, NewGalaTable, SeatedInvite};
use std::collections::HashMap;

pub mod import_invites;
pub mod tombola;

/// Largest number of tickets in a single sale or tombola entry.
pub const MAX_SALE_QUANTITY: i32 = 10_000;

pub fn check_gala(new_gala: &NewGala) -> Result<()> {
    if new_gala.name().trim().is_empty() {
        return Err(ApplicationError::bad_request("A gala needs a name."));
    }
    if *new_gala.ticket_price_cents() < 0 || *new_gala.tombola_ticket_price_cents() < 0 {
        return Err(ApplicationError::bad_request("Prices can't be negative."));
    }
    check_max_amount(*new_gala.ticket_price_cents())?;
    check_max_amount(*new_gala.tombola_ticket_price_cents())?;
    Ok(())
}

/// A gala is only deleted once nothing is attached to it anymore.
pub fn ensure_deletable((invites, tickets, tombola): (i64, i64, i64)) -> Result<()> {
    if invites > 0 || tickets > 0 || tombola > 0 {
        return Err(ApplicationError::bad_request(format!(
            "The gala can't be deleted: it still has {invites} invitees, {tickets} ticket sales and {tombola} tombola entries."
        )));
    }
    Ok(())
}

/// Amount of a sale: the given one, or the quantity at unit price.
pub fn sale_amount(quantity: i32, unit_price_cents: i64, amount_cents: Option<i64>) -> Result<i64> {
    if quantity <= 0 {
        return Err(ApplicationError::bad_request("The quantity must be positive."));
    }
    if quantity > MAX_SALE_QUANTITY {
        return Err(ApplicationError::bad_request(format!(
            "No more than {MAX_SALE_QUANTITY} tickets can be sold at once."
        )));
    }
    let amount_cents = match amount_cents {
        Some(amount_cents) if amount_cents < 0 => {
            return Err(ApplicationError::bad_request("The amount can't be negative."));
        }
        Some(amount_cents) => amount_cents,
        None => i64::from(quantity)
            .checked_mul(unit_price_cents)
            .filter(|amount_cents| *amount_cents <= MAX_AMOUNT_CENTS)
            .ok_or_else(|| {
                ApplicationError::bad_request(format!("The amount can't exceed {MAX_AMOUNT_CENTS} cents."))
            })?,
    };
    check_max_amount(amount_cents)?;
    Ok(amount_cents)
}

pub fn ensure_new_invite_name(existing: &[GalaInvite], name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ApplicationError::bad_request("An invitee needs a name."));
    }
    let normalized_name = normalize(name);
    if existing
        .iter()
        .any(|invite| normalize(invite.name()) == normalized_name)
    {
        return Err(ApplicationError::bad_request(format!(
            "{} is already invited.",
            name.trim()
        )));
    }
    Ok(())
}

pub fn check_table(new_table: &NewGalaTable) -> Result<()> {
    if *new_table.number() <= 0 {
        return Err(ApplicationError::bad_request("The table number must be positive."));
    }
    if *new_table.capacity() <= 0 {
        return Err(ApplicationError::bad_request("The table capacity must be positive."));
    }
    Ok(())
}

/// An invitee sits at one table at most, and a table never exceeds its capacity.
pub fn ensure_seat_available(table: &GalaTable, seated_count: i64, invite_seated: bool) -> Result<()> {
    if invite_seated {
        return Err(ApplicationError::bad_request("The invitee already has a seat."));
    }
    if seated_count >= i64::from(*table.capacity()) {
        return Err(ApplicationError::bad_request(format!(
            "Table {} is full.",
            table.number()
        )));
    }
    Ok(())
}

pub fn build_invites(
    invites: Vec<GalaInvite>,
    tables: &[GalaTable],
    affectations: &[GalaTableAffectation],
) -> Vec<dto::gala::GalaInvite> {
    let table_numbers: HashMap<i32, i32> = tables
        .iter()
        .map(|table| (*table.id(), *table.number()))
        .collect();
    let seats: HashMap<i32, i32> = affectations
        .iter()
        .filter_map(|affectation| {
            table_numbers
                .get(affectation.table_id())
                .map(|number| (*affectation.invite_id(), *number))
        })
        .collect();

    invites
        .into_iter()
        .map(|invite| {
            let table_number = seats.get(invite.id()).copied();
            dto::gala::GalaInvite::new(
                *invite.id(),
                *invite.gala_id(),
                invite.name().clone(),
                invite.email().clone(),
                invite.phone().clone(),
                table_number,
            )
        })
        .collect()
}

pub fn build_tables(
    tables: Vec<GalaTable>,
    invites: &[GalaInvite],
    affectations: &[GalaTableAffectation],
) -> Vec<dto::gala::GalaTable> {
    let names: HashMap<i32, &String> = invites
        .iter()
        .map(|invite| (*invite.id(), invite.name()))
        .collect();

    tables
        .into_iter()
        .map(|table| {
            let seated = affectations
                .iter()
                .filter(|affectation| affectation.table_id() == table.id())
                .map(|affectation| {
                    SeatedInvite::new(
                        *affectation.id(),
                        *affectation.invite_id(),
                        names
                            .get(affectation.invite_id())
                            .map(|name| (*name).clone())
                            .unwrap_or_default(),
                    )
                })
                .collect();
            dto::gala::GalaTable::new(
                *table.id(),
                *table.gala_id(),
                *table.number(),
                table.label().clone(),
                *table.capacity(),
                seated,
            )
        })
        .collect()
}

pub fn summarize(
    gala: Gala,
    invites_count: usize,
    tables_count: usize,
    seated_count: usize,
    tickets: &[GalaTicket],
    tombola: &[GalaTombola],
) -> Result<GalaSummary> {
    let tickets_sold = sum_amounts(tickets.iter().map(|ticket| i64::from(*ticket.quantity())))?;
    let tickets_revenue_cents = sum_amounts(tickets.iter().map(|ticket| *ticket.amount_cents()))?;
    let tombola_tickets_sold = sum_amounts(tombola.iter().map(|entry| i64::from(*entry.quantity())))?;
    let tombola_revenue_cents = sum_amounts(tombola.iter().map(|entry| *entry.amount_cents()))?;

    Ok(GalaSummary::new(
        gala,
        invites_count,
        seated_count,
        tables_count,
        tickets_sold,
        tickets_revenue_cents,
        tombola_tickets_sold,
        tombola_revenue_cents,
    ))
}
