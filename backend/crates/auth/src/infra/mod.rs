//! Infrastructure Layer
//!
//! Database implementations of the domain repositories.

pub mod postgres;

pub use postgres::PgUserRepository;
