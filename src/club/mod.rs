use crate::database::dao;
use crate::database::model::club::UserClub;
use crate::database::model::user::User;
use crate::error::{ApplicationError, Result};
use diesel::SqliteConnection;
use dto::club::{ClubMember, Role};
use log::warn;

/// A club always keeps at least one admin: the last one can be neither demoted nor removed.
/// `new_role` is `None` when the member leaves the club.
pub(crate) fn ensure_admin_remains(current_role: Role, new_role: Option<Role>, admin_count: i64) -> Result<()> {
    let loses_admin = current_role == Role::Admin && new_role != Some(Role::Admin);
    if loses_admin && admin_count <= 1 {
        warn!("Refusing to drop the last admin of a club");
        return Err(ApplicationError::bad_request("A club must keep at least one admin."));
    }
    Ok(())
}

/// Check the member can lose their current role in the club, `None` meaning they leave it.
pub(crate) fn check_role_change(
    connection: &mut SqliteConnection,
    club_id: i32,
    user_id: i32,
    new_role: Option<Role>,
) -> Result<()> {
    let membership = dao::club::find_membership(connection, club_id, user_id)?
        .ok_or_else(|| ApplicationError::not_found("This user isn't a member of the club."))?;
    let admin_count = dao::club::count_admins(connection, club_id)?;
    ensure_admin_remains(membership.parsed_role()?, new_role, admin_count)
}

/// Change the role of a member, `None` removing them from the club.
/// The write lock is taken before counting the admins, so two admins can't demote each other at once.
pub(crate) fn change_role(
    connection: &mut SqliteConnection,
    club_id: i32,
    user_id: i32,
    new_role: Option<Role>,
) -> Result<()> {
    connection.immediate_transaction(|connection| {
        check_role_change(connection, club_id, user_id, new_role)?;
        match new_role {
            Some(role) => dao::club::update_role(connection, club_id, user_id, role)?,
            None => dao::club::remove_member(connection, club_id, user_id)?,
        };
        Ok(())
    })
}

pub(crate) fn build_members(members: Vec<(UserClub, User)>) -> Result<Vec<ClubMember>> {
    members
        .into_iter()
        .map(|(membership, user)| -> Result<ClubMember> {
            Ok(ClubMember::new(
                user.into(),
                membership.parsed_role()?,
                membership.parsed_joined_on()?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    mod ensure_admin_remains {
        use crate::club::ensure_admin_remains;
        use dto::club::Role;
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            current_role = {Role::Admin, Role::Admin, Role::Admin, Role::Member, Role::Member},
            new_role = {Some(Role::Member), None, Some(Role::Admin), None, Some(Role::Admin)},
            admin_count = {2, 2, 1, 1, 1}
        )]
        fn success(current_role: Role, new_role: Option<Role>, admin_count: i64) {
            assert!(ensure_admin_remains(current_role, new_role, admin_count).is_ok());
        }

        #[parameterized(new_role = {Some(Role::Member), None})]
        fn fail_for_last_admin(new_role: Option<Role>) {
            assert!(ensure_admin_remains(Role::Admin, new_role, 1).is_err());
        }
    }

    mod check_role_change {
        use crate::club::check_role_change;
        use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
        use crate::database::{connect, with_temp_database};
        use crate::error::ApplicationError;
        use dto::club::Role;

        #[test]
        fn success_when_another_admin_exists() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                insert_member(&mut connection, *club.id(), "other@email.com", Role::Admin);

                assert!(check_role_change(&mut connection, *club.id(), *admin.id(), None).is_ok());
            })
        }

        #[test]
        fn fail_for_last_admin() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);

                assert!(matches!(
                    check_role_change(&mut connection, *club.id(), *admin.id(), Some(Role::Member)),
                    Err(ApplicationError::BadRequest(_))
                ));
            })
        }

        #[test]
        fn fail_when_not_member() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let stranger = insert_user(&mut connection, "stranger@email.com");

                assert!(matches!(
                    check_role_change(&mut connection, *club.id(), *stranger.id(), None),
                    Err(ApplicationError::NotFound(_))
                ));
            })
        }
    }

    mod change_role {
        use crate::club::change_role;
        use crate::database::dao;
        use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
        use crate::database::{connect, with_temp_database};
        use dto::club::Role;
        use std::sync::Barrier;
        use std::thread;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);

                change_role(&mut connection, *club.id(), *member.id(), Some(Role::Admin)).unwrap();
                change_role(&mut connection, *club.id(), *admin.id(), None).unwrap();

                assert_eq!(1, dao::club::count_admins(&mut connection, *club.id()).unwrap());
                assert!(dao::club::find_membership(&mut connection, *club.id(), *admin.id()).unwrap().is_none());
            })
        }

        #[test]
        fn keep_one_admin_when_admins_demote_each_other_at_once() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let first = insert_user(&mut connection, "first@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *first.id());
                let second = insert_member(&mut connection, *club.id(), "second@email.com", Role::Admin);
                let club_id = *club.id();
                let barrier = Barrier::new(2);

                let results: Vec<bool> = thread::scope(|scope| {
                    let handles: Vec<_> = [(*second.id(), Some(Role::Member)), (*first.id(), None)]
                        .into_iter()
                        .map(|(user_id, new_role)| {
                            let pool = pool.clone();
                            let barrier = &barrier;
                            scope.spawn(move || {
                                let mut connection = connect(&pool).unwrap();
                                barrier.wait();
                                change_role(&mut connection, club_id, user_id, new_role).is_ok()
                            })
                        })
                        .collect();
                    handles.into_iter().map(|handle| handle.join().unwrap()).collect()
                });

                assert_eq!(1, results.iter().filter(|succeeded| **succeeded).count());
                assert_eq!(1, dao::club::count_admins(&mut connection, club_id).unwrap());
            })
        }
    }
}
