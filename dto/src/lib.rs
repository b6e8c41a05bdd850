pub mod auth;
pub mod budget;
pub mod club;
pub mod comite;
pub mod commission;
pub mod cotisation;
pub mod email;
pub mod envelope;
pub mod gala;
pub mod mandat;
pub mod reunion;
