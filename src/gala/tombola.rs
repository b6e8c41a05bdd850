use dto::gala::{TombolaEntry, TombolaWinner};
use rand::Rng;
use rand::seq::index::sample;
use thiserror::Error;

/// Largest number of winners of a single draw.
pub const MAX_WINNERS: usize = 1_000;

#[derive(Debug, Error, PartialEq)]
pub enum DrawError {
    #[error("At least one winner must be drawn.")]
    NoWinnerRequested,
    #[error("No more than {MAX_WINNERS} winners can be drawn at once.")]
    TooManyWinnersRequested,
    #[error("Only {available} tickets have been sold, {requested} winners can't be drawn.")]
    NotEnoughTickets { requested: usize, available: usize },
    #[error("Too many tickets have been sold to number them all.")]
    TooManyTickets,
}

/// For each entry, the index following its last ticket.
/// Tickets are numbered from 1, following the order of the entries.
fn ticket_bounds(entries: &[TombolaEntry]) -> Result<Vec<usize>, DrawError> {
    let mut bounds = Vec::with_capacity(entries.len());
    let mut total: usize = 0;
    for entry in entries {
        let quantity = usize::try_from(*entry.quantity()).unwrap_or_default();
        total = total
            .checked_add(quantity)
            .filter(|total| i32::try_from(*total).is_ok())
            .ok_or(DrawError::TooManyTickets)?;
        bounds.push(total);
    }
    Ok(bounds)
}

/// Draw `count` distinct tickets among every ticket of the entries.
/// A participant holding several tickets may win several times.
pub fn draw_winners<R: Rng + ?Sized>(
    rng: &mut R,
    entries: &[TombolaEntry],
    count: usize,
) -> Result<Vec<TombolaWinner>, DrawError> {
    if count == 0 {
        return Err(DrawError::NoWinnerRequested);
    }
    if count > MAX_WINNERS {
        return Err(DrawError::TooManyWinnersRequested);
    }
    let bounds = ticket_bounds(entries)?;
    let available = bounds.last().copied().unwrap_or_default();
    if count > available {
        return Err(DrawError::NotEnoughTickets {
            requested: count,
            available,
        });
    }

    let winners = sample(rng, available, count)
        .into_iter()
        .enumerate()
        .map(|(rank, index)| {
            let entry = &entries[bounds.partition_point(|bound| *bound <= index)];
            TombolaWinner::new(
                rank + 1,
                *entry.id(),
                entry.participant_name().clone(),
                (index + 1) as i32,
            )
        })
        .collect();

    Ok(winners)
}
