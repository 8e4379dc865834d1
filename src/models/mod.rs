//! Modelos del sistema
//!
//! Entidades persistidas que mapean al schema PostgreSQL.

pub mod vehicle;

pub use vehicle::Vehicle;
