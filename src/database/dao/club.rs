use super::Result;
use crate::database::model::club::{Club, UserClub};
use crate::database::model::user::User;
use crate::database::schema::{clubs, user_clubs, users};
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use dto::club::Role;

pub fn insert_club(connection: &mut SqliteConnection, name: &str) -> Result<Club> {
    let club = diesel::insert_into(clubs::table)
        .values((
            clubs::name.eq(name),
            clubs::created_at.eq(Utc::now().naive_utc().to_string()),
        ))
        .returning(Club::as_returning())
        .get_result(connection)?;

    Ok(club)
}

pub fn get_club(connection: &mut SqliteConnection, club_id: i32) -> Result<Club> {
    let club = clubs::table
        .find(club_id)
        .select(Club::as_select())
        .first(connection)?;

    Ok(club)
}

pub fn add_member(
    connection: &mut SqliteConnection,
    club_id: i32,
    user_id: i32,
    role: Role,
    joined_on: NaiveDate,
) -> Result<UserClub> {
    let membership = diesel::insert_into(user_clubs::table)
        .values((
            user_clubs::club_id.eq(club_id),
            user_clubs::user_id.eq(user_id),
            user_clubs::role.eq(role.to_string()),
            user_clubs::joined_on.eq(joined_on.to_string()),
        ))
        .returning(UserClub::as_returning())
        .get_result(connection)?;

    Ok(membership)
}

pub fn find_membership(
    connection: &mut SqliteConnection,
    club_id: i32,
    user_id: i32,
) -> Result<Option<UserClub>> {
    let membership = user_clubs::table
        .filter(user_clubs::club_id.eq(club_id))
        .filter(user_clubs::user_id.eq(user_id))
        .select(UserClub::as_select())
        .first(connection)
        .optional()?;

    Ok(membership)
}

pub fn get_memberships_of_user(
    connection: &mut SqliteConnection,
    user_id: i32,
) -> Result<Vec<(UserClub, Club)>> {
    let memberships = user_clubs::table
        .inner_join(clubs::table)
        .filter(user_clubs::user_id.eq(user_id))
        .order_by(clubs::name)
        .select((UserClub::as_select(), Club::as_select()))
        .load(connection)?;

    Ok(memberships)
}

pub fn get_members(
    connection: &mut SqliteConnection,
    club_id: i32,
) -> Result<Vec<(UserClub, User)>> {
    let members = user_clubs::table
        .inner_join(users::table)
        .filter(user_clubs::club_id.eq(club_id))
        .order_by((users::last_name, users::first_name))
        .select((UserClub::as_select(), User::as_select()))
        .load(connection)?;

    Ok(members)
}

pub fn get_member_ids(connection: &mut SqliteConnection, club_id: i32) -> Result<Vec<i32>> {
    let ids = user_clubs::table
        .filter(user_clubs::club_id.eq(club_id))
        .select(user_clubs::user_id)
        .load(connection)?;

    Ok(ids)
}

pub fn count_admins(connection: &mut SqliteConnection, club_id: i32) -> Result<i64> {
    let count = user_clubs::table
        .filter(user_clubs::club_id.eq(club_id))
        .filter(user_clubs::role.eq(Role::Admin.to_string()))
        .count()
        .get_result(connection)?;

    Ok(count)
}

pub fn update_role(
    connection: &mut SqliteConnection,
    club_id: i32,
    user_id: i32,
    role: Role,
) -> Result<usize> {
    let updated = diesel::update(
        user_clubs::table
            .filter(user_clubs::club_id.eq(club_id))
            .filter(user_clubs::user_id.eq(user_id)),
    )
    .set(user_clubs::role.eq(role.to_string()))
    .execute(connection)?;

    Ok(updated)
}

pub fn remove_member(connection: &mut SqliteConnection, club_id: i32, user_id: i32) -> Result<usize> {
    let deleted = diesel::delete(
        user_clubs::table
            .filter(user_clubs::club_id.eq(club_id))
            .filter(user_clubs::user_id.eq(user_id)),
    )
    .execute(connection)?;

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    mod add_member {
        use crate::database::dao::club::{add_member, find_membership};
        use crate::database::error::DatabaseError;
        use crate::database::fixtures::{create_club_with_admin, insert_user};
        use crate::database::{connect, with_temp_database};
        use chrono::NaiveDate;
        use dto::club::Role;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member = insert_user(&mut connection, "member@email.com");
                let joined_on = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

                add_member(&mut connection, *club.id(), *member.id(), Role::Member, joined_on)
                    .unwrap();

                let membership = find_membership(&mut connection, *club.id(), *member.id())
                    .unwrap()
                    .unwrap();
                assert_eq!(Role::Member, membership.parsed_role().unwrap());
                assert_eq!(joined_on, membership.parsed_joined_on().unwrap());
            })
        }

        #[test]
        fn fail_when_already_member() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let joined_on = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

                let error =
                    add_member(&mut connection, *club.id(), *admin.id(), Role::Member, joined_on)
                        .unwrap_err();
                assert!(matches!(error, DatabaseError::UniqueViolation(_)));
            })
        }
    }

    mod count_admins {
        use crate::database::dao::club::{count_admins, update_role};
        use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
        use crate::database::{connect, with_temp_database};
        use dto::club::Role;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member =
                    insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);
                assert_eq!(1, count_admins(&mut connection, *club.id()).unwrap());

                update_role(&mut connection, *club.id(), *member.id(), Role::Admin).unwrap();
                assert_eq!(2, count_admins(&mut connection, *club.id()).unwrap());
            })
        }
    }

    mod get_memberships_of_user {
        use crate::database::dao::club::get_memberships_of_user;
        use crate::database::fixtures::{create_club_with_admin, insert_user};
        use crate::database::{connect, with_temp_database};

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let other = insert_user(&mut connection, "other@email.com");
                create_club_with_admin(&mut connection, "B club", *admin.id());
                create_club_with_admin(&mut connection, "A club", *admin.id());
                create_club_with_admin(&mut connection, "Other club", *other.id());

                let memberships = get_memberships_of_user(&mut connection, *admin.id()).unwrap();
                let names: Vec<&str> = memberships
                    .iter()
                    .map(|(_, club)| club.name().as_str())
                    .collect();
                assert_eq!(vec!["A club", "B club"], names);
            })
        }
    }
}
