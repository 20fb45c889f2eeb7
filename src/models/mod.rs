//! Persistence entities
//!
//! Identifiers stay `None` until a store assigns the database-generated key.
//! Relation collections are only filled by queries that join them.

pub mod pupil;
pub mod school;
pub mod teacher;

pub use pupil::Pupil;
pub use school::School;
pub use teacher::Teacher;
