use crate::database::error::DatabaseError;

pub(crate) mod budget;
pub(crate) mod club;
pub(crate) mod comite;
pub(crate) mod commission;
pub(crate) mod cotisation;
pub(crate) mod gala;
pub(crate) mod mandat;
pub(crate) mod reunion;
pub(crate) mod user;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;
