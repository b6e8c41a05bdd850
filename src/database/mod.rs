use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::error::Result;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};

pub(crate) mod dao;
pub(crate) mod error;
mod migrations;
pub(crate) mod model;
pub(crate) mod schema;

#[cfg(test)]
pub(crate) mod fixtures;

const DATABASE_URL_ARG: &str = "--database-url";

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite leaves foreign keys unchecked unless asked, connection per connection.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Open the database given by `--database-url` and bring its schema up to date.
pub fn init_db() -> Result<DbPool> {
    let database_url = retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)?;
    let pool = create_pool(&database_url)?;
    let mut connection = connect(&pool)?;
    run_migrations(&mut *connection)?;

    Ok(pool)
}

pub fn create_pool(database_url: &str) -> Result<DbPool, DatabaseError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .map_err(log_error_and_return(ConnectionFailed))
}

pub fn connect(pool: &DbPool) -> Result<DbConnection, DatabaseError> {
    pool.get().map_err(log_error_and_return(ConnectionFailed))
}

/// A freshly migrated database living in a temporary folder, removed once dropped.
#[cfg(test)]
pub struct TempDatabase {
    folder: std::path::PathBuf,
    pool: DbPool,
}

#[cfg(test)]
impl TempDatabase {
    pub fn new() -> Self {
        let folder = crate::tools::test::tests::temp_dir();
        let database_url = folder.join("database.db").to_str().unwrap().to_string();
        let pool = create_pool(&database_url).unwrap();
        run_migrations(&mut *pool.get().unwrap()).unwrap();
        Self { folder, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

#[cfg(test)]
impl Drop for TempDatabase {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.folder);
    }
}

/// Run `function` against a freshly migrated database living in a temporary folder.
#[cfg(test)]
pub fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce(DbPool) -> T,
{
    let database = TempDatabase::new();
    function(database.pool())
}

#[cfg(test)]
mod tests {
    use crate::database::schema::types_budget::dsl::types_budget;
    use crate::database::schema::types_budget::name;
    use crate::database::{connect, with_temp_database};
    use diesel::prelude::*;
    use diesel::sql_types::Integer;

    #[derive(QueryableByName)]
    struct Pragma {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    #[test]
    fn should_seed_budget_types() {
        with_temp_database(|pool| {
            let mut connection = connect(&pool).unwrap();
            let names: Vec<String> = types_budget
                .select(name)
                .order_by(name)
                .load(&mut connection)
                .unwrap();
            assert_eq!(vec!["Dépenses".to_owned(), "Recettes".to_owned()], names);
        })
    }

    #[test]
    fn should_enforce_foreign_keys() {
        with_temp_database(|pool| {
            let mut connection = connect(&pool).unwrap();
            let pragma = diesel::sql_query("PRAGMA foreign_keys")
                .get_result::<Pragma>(&mut connection)
                .unwrap();
            assert_eq!(1, pragma.foreign_keys);
        })
    }
}
