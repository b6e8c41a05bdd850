use crate::database::dao;
use crate::error::{ApplicationError, Result};
use crate::web::authentication::Session;
use diesel::SqliteConnection;
use dto::club::Role;
use log::warn;

/// Ensure the caller belongs to the club with at least the `required` role, and return their role.
/// Members may read, admins may also write.
pub fn authorize(
    connection: &mut SqliteConnection,
    session: &Session,
    club_id: i32,
    required: Role,
) -> Result<Role> {
    let Some(membership) = dao::club::find_membership(connection, club_id, *session.user_id())? else {
        warn!(
            "User isn't a member of the club [user_id: {}, club_id: {club_id}]",
            session.user_id()
        );
        return Err(ApplicationError::Forbidden);
    };

    let role = membership.parsed_role()?;
    if !role.allows(required) {
        warn!(
            "User lacks the required role [user_id: {}, club_id: {club_id}, role: {role}, required: {required}]",
            session.user_id()
        );
        return Err(ApplicationError::Forbidden);
    }
    Ok(role)
}

#[cfg(test)]
pub mod tests {
    use crate::web::authentication::Session;

    pub fn session(user_id: i32) -> Session {
        Session::new("0ea9a5fb-0f46-4057-902a-2552ed956bde".to_owned(), user_id)
    }

    mod authorize {
        use crate::database::fixtures::{create_club_with_admin, insert_member, insert_user};
        use crate::database::{connect, with_temp_database};
        use crate::error::ApplicationError;
        use crate::web::authorization::authorize;
        use crate::web::authorization::tests::session;
        use dto::club::Role;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);

                assert_eq!(
                    Role::Admin,
                    authorize(&mut connection, &session(*admin.id()), *club.id(), Role::Admin).unwrap()
                );
                assert_eq!(
                    Role::Member,
                    authorize(&mut connection, &session(*member.id()), *club.id(), Role::Member).unwrap()
                );
            })
        }

        #[test]
        fn fail_when_member_requires_admin() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let member = insert_member(&mut connection, *club.id(), "member@email.com", Role::Member);

                assert!(matches!(
                    authorize(&mut connection, &session(*member.id()), *club.id(), Role::Admin),
                    Err(ApplicationError::Forbidden)
                ));
            })
        }

        #[test]
        fn fail_when_stranger() {
            with_temp_database(|pool| {
                let mut connection = connect(&pool).unwrap();
                let admin = insert_user(&mut connection, "admin@email.com");
                let club = create_club_with_admin(&mut connection, "Club", *admin.id());
                let stranger = insert_user(&mut connection, "stranger@email.com");

                assert!(matches!(
                    authorize(&mut connection, &session(*stranger.id()), *club.id(), Role::Member),
                    Err(ApplicationError::Forbidden)
                ));
            })
        }
    }
}
