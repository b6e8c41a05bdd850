use super::Result;
use crate::database::model::commission::{Commission, MembreCommission};
use crate::database::model::user::User;
use crate::database::schema::{commissions, membres_commission, users};
use chrono::NaiveDate;
use diesel::prelude::*;

pub fn insert_commission(
    connection: &mut SqliteConnection,
    club_id: i32,
    name: &str,
    description: Option<&str>,
) -> Result<Commission> {
    let commission = diesel::insert_into(commissions::table)
        .values((
            commissions::club_id.eq(club_id),
            commissions::name.eq(name),
            commissions::description.eq(description),
        ))
        .returning(Commission::as_returning())
        .get_result(connection)?;

    Ok(commission)
}

pub fn get_commissions(connection: &mut SqliteConnection, club_id: i32) -> Result<Vec<Commission>> {
    let commissions = commissions::table
        .filter(commissions::club_id.eq(club_id))
        .order_by(commissions::name)
        .select(Commission::as_select())
        .load(connection)?;

    Ok(commissions)
}

pub fn get_commission(
    connection: &mut SqliteConnection,
    club_id: i32,
    commission_id: i32,
) -> Result<Commission> {
    let commission = commissions::table
        .filter(commissions::club_id.eq(club_id))
        .filter(commissions::id.eq(commission_id))
        .select(Commission::as_select())
        .first(connection)?;

    Ok(commission)
}

/// Case-insensitive lookup, used to keep names unique in a club.
pub fn find_by_name(
    connection: &mut SqliteConnection,
    club_id: i32,
    name: &str,
) -> Result<Option<Commission>> {
    let name = name.trim().to_lowercase();
    let commission = commissions::table
        .filter(commissions::club_id.eq(club_id))
        .select(Commission::as_select())
        .load(connection)?
        .into_iter()
        .find(|commission| commission.name().to_lowercase() == name);

    Ok(commission)
}

pub fn update_commission(
    connection: &mut SqliteConnection,
    commission_id: i32,
    name: &str,
    description: Option<&str>,
) -> Result<Commission> {
    let commission = diesel::update(commissions::table.find(commission_id))
        .set((
            commissions::name.eq(name),
            commissions::description.eq(description),
        ))
        .returning(Commission::as_returning())
        .get_result(connection)?;

    Ok(commission)
}

pub fn delete_commission(connection: &mut SqliteConnection, commission_id: i32) -> Result<usize> {
    let deleted = diesel::delete(commissions::table.find(commission_id)).execute(connection)?;
    Ok(deleted)
}

pub fn insert_membre(
    connection: &mut SqliteConnection,
    commission_id: i32,
    member_id: i32,
    mandat_id: i32,
    is_responsable: bool,
    joined_on: NaiveDate,
) -> Result<MembreCommission> {
    let membre = diesel::insert_into(membres_commission::table)
        .values((
            membres_commission::commission_id.eq(commission_id),
            membres_commission::member_id.eq(member_id),
            membres_commission::mandat_id.eq(mandat_id),
            membres_commission::is_responsable.eq(is_responsable),
            membres_commission::active.eq(true),
            membres_commission::joined_on.eq(joined_on.to_string()),
        ))
        .returning(MembreCommission::as_returning())
        .get_result(connection)?;

    Ok(membre)
}

pub fn get_active_membres(
    connection: &mut SqliteConnection,
    commission_id: i32,
    mandat_id: i32,
) -> Result<Vec<(MembreCommission, User)>> {
    let membres = membres_commission::table
        .inner_join(users::table)
        .filter(membres_commission::commission_id.eq(commission_id))
        .filter(membres_commission::mandat_id.eq(mandat_id))
        .filter(membres_commission::active.eq(true))
        .order_by((
            membres_commission::is_responsable.desc(),
            users::last_name,
            users::first_name,
        ))
        .select((MembreCommission::as_select(), User::as_select()))
        .load(connection)?;

    Ok(membres)
}

/// Every active membership of every commission of the club for the mandat.
pub fn get_active_membres_of_mandat(
    connection: &mut SqliteConnection,
    club_id: i32,
    mandat_id: i32,
) -> Result<Vec<MembreCommission>> {
    let membres = membres_commission::table
        .inner_join(commissions::table)
        .filter(commissions::club_id.eq(club_id))
        .filter(membres_commission::mandat_id.eq(mandat_id))
        .filter(membres_commission::active.eq(true))
        .select(MembreCommission::as_select())
        .load(connection)?;

    Ok(membres)
}

pub fn get_membre(
    connection: &mut SqliteConnection,
    commission_id: i32,
    membre_id: i32,
) -> Result<MembreCommission> {
    let membre = membres_commission::table
        .filter(membres_commission::commission_id.eq(commission_id))
        .filter(membres_commission::id.eq(membre_id))
        .select(MembreCommission::as_select())
        .first(connection)?;

    Ok(membre)
}

pub fn find_active_membre(
    connection: &mut SqliteConnection,
    commission_id: i32,
    mandat_id: i32,
    member_id: i32,
) -> Result<Option<MembreCommission>> {
    let membre = membres_commission::table
        .filter(membres_commission::commission_id.eq(commission_id))
        .filter(membres_commission::mandat_id.eq(mandat_id))
        .filter(membres_commission::member_id.eq(member_id))
        .filter(membres_commission::active.eq(true))
        .select(MembreCommission::as_select())
        .first(connection)
        .optional()?;

    Ok(membre)
}

pub fn find_active_responsable(
    connection: &mut SqliteConnection,
    commission_id: i32,
    mandat_id: i32,
) -> Result<Option<MembreCommission>> {
    let membre = membres_commission::table
        .filter(membres_commission::commission_id.eq(commission_id))
        .filter(membres_commission::mandat_id.eq(mandat_id))
        .filter(membres_commission::is_responsable.eq(true))
        .filter(membres_commission::active.eq(true))
        .select(MembreCommission::as_select())
        .first(connection)
        .optional()?;

    Ok(membre)
}

/// Make the given membership the only responsable of its commission for the mandat.
pub fn set_responsable(connection: &mut SqliteConnection, membre: &MembreCommission) -> Result<()> {
    connection.transaction(|connection| {
        diesel::update(
            membres_commission::table
                .filter(membres_commission::commission_id.eq(*membre.commission_id()))
                .filter(membres_commission::mandat_id.eq(*membre.mandat_id())),
        )
        .set(membres_commission::is_responsable.eq(false))
        .execute(connection)?;
        diesel::update(membres_commission::table.find(*membre.id()))
            .set(membres_commission::is_responsable.eq(true))
            .execute(connection)?;

        Ok(())
    })
}

/// Memberships are kept for history: leaving only marks them inactive.
pub fn deactivate_membre(connection: &mut SqliteConnection, membre_id: i32) -> Result<usize> {
    let updated = diesel::update(membres_commission::table.find(membre_id))
        .set((
            membres_commission::active.eq(false),
            membres_commission::is_responsable.eq(false),
        ))
        .execute(connection)?;

    Ok(updated)
}

#[cfg(test)]
mod tests {
    mod set_responsable {
        use crate::database::dao::commission::{
            find_active_responsable, insert_commission, insert_membre, set_responsable,
        };
        use crate::database::fixtures::{
            create_club_with_admin, insert_mandat, insert_member, insert_user,
        };
        use crate::database::{connect, with_temp_database};
        use chrono::NaiveDate;
        use dto::club::Role;

        #[test]
        fn replace_current_responsable() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member =
                    insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);
                let mandat = insert_mandat(&mut connection, *club.id(), "2025-2026", true);
                let commission =
                    insert_commission(&mut connection, *club.id(), "Sport", None).unwrap();
                let joined_on = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
                insert_membre(
                    &mut connection,
                    *commission.id(),
                    *admin.id(),
                    *mandat.id(),
                    true,
                    joined_on,
                )
                .unwrap();
                let other = insert_membre(
                    &mut connection,
                    *commission.id(),
                    *member.id(),
                    *mandat.id(),
                    false,
                    joined_on,
                )
                .unwrap();

                set_responsable(&mut connection, &other).unwrap();

                let responsable =
                    find_active_responsable(&mut connection, *commission.id(), *mandat.id())
                        .unwrap()
                        .unwrap();
                assert_eq!(other.id(), responsable.id());
            })
        }
    }

    mod deactivate_membre {
        use crate::database::dao::commission::{
            deactivate_membre, get_active_membres, insert_commission, insert_membre,
        };
        use crate::database::fixtures::{create_club_with_admin, insert_mandat, insert_user};
        use crate::database::{connect, with_temp_database};
        use chrono::NaiveDate;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let mandat = insert_mandat(&mut connection, *club.id(), "2025-2026", true);
                let commission =
                    insert_commission(&mut connection, *club.id(), "Sport", None).unwrap();
                let membre = insert_membre(
                    &mut connection,
                    *commission.id(),
                    *admin.id(),
                    *mandat.id(),
                    false,
                    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                )
                .unwrap();

                assert_eq!(1, deactivate_membre(&mut connection, *membre.id()).unwrap());
                assert!(
                    get_active_membres(&mut connection, *commission.id(), *mandat.id())
                        .unwrap()
                        .is_empty()
                );
            })
        }
    }

    mod find_by_name {
        use crate::database::dao::commission::{find_by_name, insert_commission};
        use crate::database::fixtures::{create_club_with_admin, insert_user};
        use crate::database::{connect, with_temp_database};

        #[test]
        fn ignore_case() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                insert_commission(&mut connection, *club.id(), "Sport", None).unwrap();

                assert!(
                    find_by_name(&mut connection, *club.id(), " SPORT ")
                        .unwrap()
                        .is_some()
                );
                assert!(
                    find_by_name(&mut connection, *club.id(), "Culture")
                        .unwrap()
                        .is_none()
                );
            })
        }
    }
}
