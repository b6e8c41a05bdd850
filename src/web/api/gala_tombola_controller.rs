use crate::database::dao;
use crate::database::{DbPool, connect};
use crate::error::ApplicationError;
use crate::gala::sale_amount;
use crate::gala::tombola::draw_winners;
use crate::tools::check_required;
use crate::web::api::{ApiResponse, created, done, ok};
use crate::web::authentication::Session;
use crate::web::authorization::authorize;
use chrono::Utc;
use dto::club::Role;
use dto::gala::{DrawRequest, GalaTicket, NewGalaTicket, NewTombolaEntry, TombolaEntry, TombolaWinner};
use log::info;
use rocket::State;
use rocket::serde::json::Json;

#[get("/clubs/<club_id>/galas/<gala_id>/tickets")]
pub fn get_tickets(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
) -> ApiResponse<Vec<GalaTicket>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let tickets = dao::gala::get_tickets(&mut connection, *gala.id())?
        .into_iter()
        .map(GalaTicket::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ok(tickets)
}

/// Without an amount, the tickets are sold at the gala's price.
#[post("/clubs/<club_id>/galas/<gala_id>/tickets", format = "application/json", data = "<new_ticket>")]
pub fn sell_tickets(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    new_ticket: Json<NewGalaTicket>,
) -> ApiResponse<GalaTicket> {
    check_required(new_ticket.buyer_name(), "The buyer's name is required.")?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let amount_cents = sale_amount(
        *new_ticket.quantity(),
        *gala.ticket_price_cents(),
        *new_ticket.amount_cents(),
    )?;

    let ticket = dao::gala::insert_ticket(
        &mut connection,
        *gala.id(),
        new_ticket.buyer_name(),
        *new_ticket.quantity(),
        amount_cents,
        new_ticket.sold_on().unwrap_or_else(|| Utc::now().date_naive()),
    )?;
    created(GalaTicket::try_from(ticket)?)
}

#[delete("/clubs/<club_id>/galas/<gala_id>/tickets/<ticket_id>")]
pub fn delete_ticket(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    ticket_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    if dao::gala::delete_ticket(&mut connection, *gala.id(), ticket_id)? == 0 {
        return Err(ApplicationError::not_found("This ticket sale doesn't exist."));
    }
    done("Ticket sale deleted.")
}

#[get("/clubs/<club_id>/galas/<gala_id>/tombola")]
pub fn get_tombola_entries(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
) -> ApiResponse<Vec<TombolaEntry>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Member)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let entries = dao::gala::get_tombola_entries(&mut connection, *gala.id())?
        .into_iter()
        .map(Into::into)
        .collect();
    ok(entries)
}

/// Without an amount, the tombola tickets are sold at the gala's price.
#[post("/clubs/<club_id>/galas/<gala_id>/tombola", format = "application/json", data = "<new_entry>")]
pub fn add_tombola_entry(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    new_entry: Json<NewTombolaEntry>,
) -> ApiResponse<TombolaEntry> {
    check_required(new_entry.participant_name(), "The participant's name is required.")?;
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let amount_cents = sale_amount(
        *new_entry.quantity(),
        *gala.tombola_ticket_price_cents(),
        *new_entry.amount_cents(),
    )?;

    let entry = dao::gala::insert_tombola_entry(
        &mut connection,
        *gala.id(),
        new_entry.participant_name(),
        *new_entry.quantity(),
        amount_cents,
    )?;
    created(entry.into())
}

#[delete("/clubs/<club_id>/galas/<gala_id>/tombola/<entry_id>")]
pub fn delete_tombola_entry(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    entry_id: i32,
) -> ApiResponse<()> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    if dao::gala::delete_tombola_entry(&mut connection, *gala.id(), entry_id)? == 0 {
        return Err(ApplicationError::not_found("This tombola entry doesn't exist."));
    }
    done("Tombola entry deleted.")
}

/// Draw the winners among every tombola ticket sold. Nothing is stored: each call is a new draw.
#[post("/clubs/<club_id>/galas/<gala_id>/tombola/tirage", format = "application/json", data = "<request>")]
pub fn draw(
    pool: &State<DbPool>,
    session: Session,
    club_id: i32,
    gala_id: i32,
    request: Json<DrawRequest>,
) -> ApiResponse<Vec<TombolaWinner>> {
    let mut connection = connect(pool)?;
    authorize(&mut connection, &session, club_id, Role::Admin)?;
    let gala = dao::gala::get_gala(&mut connection, club_id, gala_id)?;
    let entries: Vec<TombolaEntry> = dao::gala::get_tombola_entries(&mut connection, *gala.id())?
        .into_iter()
        .map(Into::into)
        .collect();

    let winners = draw_winners(&mut rand::rng(), &entries, *request.count())?;
    info!("Tombola drawn [gala_id: {gala_id}, winners: {}]", winners.len());
    ok(winners)
}
