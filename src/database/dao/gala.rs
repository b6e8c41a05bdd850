use super::Result;
use crate::database::model::gala::{
    Gala, GalaInvite, GalaTable, GalaTableAffectation, GalaTicket, GalaTombola,
};
use crate::database::schema::{
    gala_invites, gala_table_affectations, gala_tables, gala_tickets, gala_tombolas, galas,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use dto::gala::{NewGala, NewGalaInvite, NewGalaTable};

pub fn insert_gala(connection: &mut SqliteConnection, club_id: i32, new_gala: &NewGala) -> Result<Gala> {
    let gala = diesel::insert_into(galas::table)
        .values((
            galas::club_id.eq(club_id),
            galas::name.eq(new_gala.name().trim()),
            galas::date.eq(new_gala.date().to_string()),
            galas::location.eq(new_gala.location().as_deref()),
            galas::ticket_price_cents.eq(*new_gala.ticket_price_cents()),
            galas::tombola_ticket_price_cents.eq(*new_gala.tombola_ticket_price_cents()),
        ))
        .returning(Gala::as_returning())
        .get_result(connection)?;

    Ok(gala)
}

pub fn get_galas(connection: &mut SqliteConnection, club_id: i32) -> Result<Vec<Gala>> {
    let galas = galas::table
        .filter(galas::club_id.eq(club_id))
        .order_by(galas::date.desc())
        .select(Gala::as_select())
        .load(connection)?;

    Ok(galas)
}

pub fn get_gala(connection: &mut SqliteConnection, club_id: i32, gala_id: i32) -> Result<Gala> {
    let gala = galas::table
        .filter(galas::club_id.eq(club_id))
        .filter(galas::id.eq(gala_id))
        .select(Gala::as_select())
        .first(connection)?;

    Ok(gala)
}

pub fn update_gala(connection: &mut SqliteConnection, gala_id: i32, new_gala: &NewGala) -> Result<Gala> {
    let gala = diesel::update(galas::table.find(gala_id))
        .set((
            galas::name.eq(new_gala.name().trim()),
            galas::date.eq(new_gala.date().to_string()),
            galas::location.eq(new_gala.location().as_deref()),
            galas::ticket_price_cents.eq(*new_gala.ticket_price_cents()),
            galas::tombola_ticket_price_cents.eq(*new_gala.tombola_ticket_price_cents()),
        ))
        .returning(Gala::as_returning())
        .get_result(connection)?;

    Ok(gala)
}

pub fn delete_gala(connection: &mut SqliteConnection, gala_id: i32) -> Result<usize> {
    let deleted = diesel::delete(galas::table.find(gala_id)).execute(connection)?;
    Ok(deleted)
}

/// Number of invitees, ticket sales and tombola entries attached to the gala.
pub fn count_attachments(connection: &mut SqliteConnection, gala_id: i32) -> Result<(i64, i64, i64)> {
    let invites = gala_invites::table
        .filter(gala_invites::gala_id.eq(gala_id))
        .count()
        .get_result(connection)?;
    let tickets = gala_tickets::table
        .filter(gala_tickets::gala_id.eq(gala_id))
        .count()
        .get_result(connection)?;
    let tombola = gala_tombolas::table
        .filter(gala_tombolas::gala_id.eq(gala_id))
        .count()
        .get_result(connection)?;

    Ok((invites, tickets, tombola))
}

pub fn get_invites(connection: &mut SqliteConnection, gala_id: i32) -> Result<Vec<GalaInvite>> {
    let invites = gala_invites::table
        .filter(gala_invites::gala_id.eq(gala_id))
        .order_by(gala_invites::name)
        .select(GalaInvite::as_select())
        .load(connection)?;

    Ok(invites)
}

pub fn get_invite(connection: &mut SqliteConnection, gala_id: i32, invite_id: i32) -> Result<GalaInvite> {
    let invite = gala_invites::table
        .filter(gala_invites::gala_id.eq(gala_id))
        .filter(gala_invites::id.eq(invite_id))
        .select(GalaInvite::as_select())
        .first(connection)?;

    Ok(invite)
}

pub fn insert_invite(
    connection: &mut SqliteConnection,
    gala_id: i32,
    invite: &NewGalaInvite,
) -> Result<GalaInvite> {
    let invite = diesel::insert_into(gala_invites::table)
        .values((
            gala_invites::gala_id.eq(gala_id),
            gala_invites::name.eq(invite.name().trim()),
            gala_invites::email.eq(invite.email().as_deref()),
            gala_invites::phone.eq(invite.phone().as_deref()),
        ))
        .returning(GalaInvite::as_returning())
        .get_result(connection)?;

    Ok(invite)
}

/// Insert every invitee or none of them.
pub fn insert_invites(
    connection: &mut SqliteConnection,
    gala_id: i32,
    invites: &[NewGalaInvite],
) -> Result<usize> {
    connection.transaction(|connection| {
        for invite in invites {
            insert_invite(connection, gala_id, invite)?;
        }
        Ok(invites.len())
    })
}

pub fn delete_invite(connection: &mut SqliteConnection, gala_id: i32, invite_id: i32) -> Result<usize> {
    let deleted = diesel::delete(
        gala_invites::table
            .filter(gala_invites::gala_id.eq(gala_id))
            .filter(gala_invites::id.eq(invite_id)),
    )
    .execute(connection)?;

    Ok(deleted)
}

pub fn get_tables(connection: &mut SqliteConnection, gala_id: i32) -> Result<Vec<GalaTable>> {
    let tables = gala_tables::table
        .filter(gala_tables::gala_id.eq(gala_id))
        .order_by(gala_tables::number)
        .select(GalaTable::as_select())
        .load(connection)?;

    Ok(tables)
}

pub fn get_table(connection: &mut SqliteConnection, gala_id: i32, table_id: i32) -> Result<GalaTable> {
    let table = gala_tables::table
        .filter(gala_tables::gala_id.eq(gala_id))
        .filter(gala_tables::id.eq(table_id))
        .select(GalaTable::as_select())
        .first(connection)?;

    Ok(table)
}

pub fn find_table_by_number(
    connection: &mut SqliteConnection,
    gala_id: i32,
    number: i32,
) -> Result<Option<GalaTable>> {
    let table = gala_tables::table
        .filter(gala_tables::gala_id.eq(gala_id))
        .filter(gala_tables::number.eq(number))
        .select(GalaTable::as_select())
        .first(connection)
        .optional()?;

    Ok(table)
}

pub fn insert_table(
    connection: &mut SqliteConnection,
    gala_id: i32,
    new_table: &NewGalaTable,
) -> Result<GalaTable> {
    let table = diesel::insert_into(gala_tables::table)
        .values((
            gala_tables::gala_id.eq(gala_id),
            gala_tables::number.eq(*new_table.number()),
            gala_tables::label.eq(new_table.label().as_deref()),
            gala_tables::capacity.eq(*new_table.capacity()),
        ))
        .returning(GalaTable::as_returning())
        .get_result(connection)?;

    Ok(table)
}

pub fn delete_table(connection: &mut SqliteConnection, gala_id: i32, table_id: i32) -> Result<usize> {
    let deleted = diesel::delete(
        gala_tables::table
            .filter(gala_tables::gala_id.eq(gala_id))
            .filter(gala_tables::id.eq(table_id)),
    )
    .execute(connection)?;

    Ok(deleted)
}

/// All seatings of the gala.
pub fn get_affectations(
    connection: &mut SqliteConnection,
    gala_id: i32,
) -> Result<Vec<GalaTableAffectation>> {
    let affectations = gala_table_affectations::table
        .inner_join(gala_tables::table)
        .filter(gala_tables::gala_id.eq(gala_id))
        .select(GalaTableAffectation::as_select())
        .load(connection)?;

    Ok(affectations)
}

pub fn get_affectation(
    connection: &mut SqliteConnection,
    gala_id: i32,
    affectation_id: i32,
) -> Result<GalaTableAffectation> {
    let affectation = gala_table_affectations::table
        .inner_join(gala_tables::table)
        .filter(gala_tables::gala_id.eq(gala_id))
        .filter(gala_table_affectations::id.eq(affectation_id))
        .select(GalaTableAffectation::as_select())
        .first(connection)?;

    Ok(affectation)
}

pub fn count_seated(connection: &mut SqliteConnection, table_id: i32) -> Result<i64> {
    let count = gala_table_affectations::table
        .filter(gala_table_affectations::table_id.eq(table_id))
        .count()
        .get_result(connection)?;

    Ok(count)
}

pub fn find_affectation_of_invite(
    connection: &mut SqliteConnection,
    invite_id: i32,
) -> Result<Option<GalaTableAffectation>> {
    let affectation = gala_table_affectations::table
        .filter(gala_table_affectations::invite_id.eq(invite_id))
        .select(GalaTableAffectation::as_select())
        .first(connection)
        .optional()?;

    Ok(affectation)
}

pub fn insert_affectation(
    connection: &mut SqliteConnection,
    table_id: i32,
    invite_id: i32,
) -> Result<GalaTableAffectation> {
    let affectation = diesel::insert_into(gala_table_affectations::table)
        .values((
            gala_table_affectations::table_id.eq(table_id),
            gala_table_affectations::invite_id.eq(invite_id),
        ))
        .returning(GalaTableAffectation::as_returning())
        .get_result(connection)?;

    Ok(affectation)
}

pub fn delete_affectation(connection: &mut SqliteConnection, affectation_id: i32) -> Result<usize> {
    let deleted =
        diesel::delete(gala_table_affectations::table.find(affectation_id)).execute(connection)?;
    Ok(deleted)
}

pub fn get_tickets(connection: &mut SqliteConnection, gala_id: i32) -> Result<Vec<GalaTicket>> {
    let tickets = gala_tickets::table
        .filter(gala_tickets::gala_id.eq(gala_id))
        .order_by((gala_tickets::sold_on, gala_tickets::id))
        .select(GalaTicket::as_select())
        .load(connection)?;

    Ok(tickets)
}

pub fn insert_ticket(
    connection: &mut SqliteConnection,
    gala_id: i32,
    buyer_name: &str,
    quantity: i32,
    amount_cents: i64,
    sold_on: NaiveDate,
) -> Result<GalaTicket> {
    let ticket = diesel::insert_into(gala_tickets::table)
        .values((
            gala_tickets::gala_id.eq(gala_id),
            gala_tickets::buyer_name.eq(buyer_name.trim()),
            gala_tickets::quantity.eq(quantity),
            gala_tickets::amount_cents.eq(amount_cents),
            gala_tickets::sold_on.eq(sold_on.to_string()),
        ))
        .returning(GalaTicket::as_returning())
        .get_result(connection)?;

    Ok(ticket)
}

pub fn delete_ticket(connection: &mut SqliteConnection, gala_id: i32, ticket_id: i32) -> Result<usize> {
    let deleted = diesel::delete(
        gala_tickets::table
            .filter(gala_tickets::gala_id.eq(gala_id))
            .filter(gala_tickets::id.eq(ticket_id)),
    )
    .execute(connection)?;

    Ok(deleted)
}

/// Entries in insertion order, which numbers the tombola tickets.
pub fn get_tombola_entries(connection: &mut SqliteConnection, gala_id: i32) -> Result<Vec<GalaTombola>> {
    let entries = gala_tombolas::table
        .filter(gala_tombolas::gala_id.eq(gala_id))
        .order_by(gala_tombolas::id)
        .select(GalaTombola::as_select())
        .load(connection)?;

    Ok(entries)
}

pub fn insert_tombola_entry(
    connection: &mut SqliteConnection,
    gala_id: i32,
    participant_name: &str,
    quantity: i32,
    amount_cents: i64,
) -> Result<GalaTombola> {
    let entry = diesel::insert_into(gala_tombolas::table)
        .values((
            gala_tombolas::gala_id.eq(gala_id),
            gala_tombolas::participant_name.eq(participant_name.trim()),
            gala_tombolas::quantity.eq(quantity),
            gala_tombolas::amount_cents.eq(amount_cents),
        ))
        .returning(GalaTombola::as_returning())
        .get_result(connection)?;

    Ok(entry)
}

pub fn delete_tombola_entry(
    connection: &mut SqliteConnection,
    gala_id: i32,
    entry_id: i32,
) -> Result<usize> {
    let deleted = diesel::delete(
        gala_tombolas::table
            .filter(gala_tombolas::gala_id.eq(gala_id))
            .filter(gala_tombolas::id.eq(entry_id)),
    )
    .execute(connection)?;

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use crate::database::dao::gala::insert_gala;
    use crate::database::model::gala::Gala;
    use chrono::NaiveDate;
    use diesel::SqliteConnection;
    use dto::gala::NewGala;

    pub(super) fn create_gala(connection: &mut SqliteConnection, club_id: i32) -> Gala {
        let new_gala = NewGala::new(
            "Gala".to_owned(),
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            None,
            4_500,
            200,
        );
        insert_gala(connection, club_id, &new_gala).unwrap()
    }

    mod count_attachments {
        use crate::database::dao::gala::tests::create_gala;
        use crate::database::dao::gala::{count_attachments, insert_ticket, insert_tombola_entry};
        use crate::database::fixtures::{create_club_with_admin, insert_user};
        use crate::database::{connect, with_temp_database};
        use chrono::NaiveDate;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let gala = create_gala(&mut connection, *club.id());
                assert_eq!((0, 0, 0), count_attachments(&mut connection, *gala.id()).unwrap());

                let sold_on = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
                insert_ticket(&mut connection, *gala.id(), "Jon", 2, 9_000, sold_on).unwrap();
                insert_tombola_entry(&mut connection, *gala.id(), "Jon", 3, 600).unwrap();
                insert_tombola_entry(&mut connection, *gala.id(), "Jean", 1, 200).unwrap();
                assert_eq!((0, 1, 2), count_attachments(&mut connection, *gala.id()).unwrap());
            })
        }
    }

    mod insert_affectation {
        use crate::database::dao::gala::tests::create_gala;
        use crate::database::dao::gala::{
            count_seated, get_affectations, insert_affectation, insert_invite, insert_table,
        };
        use crate::database::error::DatabaseError;
        use crate::database::fixtures::{create_club_with_admin, insert_user};
        use crate::database::{connect, with_temp_database};
        use dto::gala::{NewGalaInvite, NewGalaTable};

        #[test]
        fn fail_when_invite_already_seated() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let gala = create_gala(&mut connection, *club.id());
                let first =
                    insert_table(&mut connection, *gala.id(), &NewGalaTable::new(1, None, 8))
                        .unwrap();
                let second =
                    insert_table(&mut connection, *gala.id(), &NewGalaTable::new(2, None, 8))
                        .unwrap();
                let invite = insert_invite(
                    &mut connection,
                    *gala.id(),
                    &NewGalaInvite::new("Jon Doe".to_owned(), None, None),
                )
                .unwrap();

                insert_affectation(&mut connection, *first.id(), *invite.id()).unwrap();
                let error =
                    insert_affectation(&mut connection, *second.id(), *invite.id()).unwrap_err();

                assert!(matches!(error, DatabaseError::UniqueViolation(_)));
                assert_eq!(1, count_seated(&mut connection, *first.id()).unwrap());
                assert_eq!(1, get_affectations(&mut connection, *gala.id()).unwrap().len());
            })
        }
    }

    mod get_tombola_entries {
        use crate::database::dao::gala::tests::create_gala;
        use crate::database::dao::gala::{get_tombola_entries, insert_tombola_entry};
        use crate::database::fixtures::{create_club_with_admin, insert_user};
        use crate::database::{connect, with_temp_database};

        #[test]
        fn keep_insertion_order() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let gala = create_gala(&mut connection, *club.id());
                insert_tombola_entry(&mut connection, *gala.id(), "Zoé", 1, 200).unwrap();
                insert_tombola_entry(&mut connection, *gala.id(), "Adam", 1, 200).unwrap();

                let names: Vec<String> = get_tombola_entries(&mut connection, *gala.id())
                    .unwrap()
                    .into_iter()
                    .map(|entry| entry.participant_name().clone())
                    .collect();
                assert_eq!(vec!["Zoé", "Adam"], names);
            })
        }
    }
}
