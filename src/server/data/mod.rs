//! Repositories wrapping SeaORM entity access. Each repository borrows the
//! shared [`DatabaseConnection`](sea_orm::DatabaseConnection) and returns
//! domain models rather than raw entities.

pub mod feature;
pub mod gallery;
pub mod news;
pub mod peak;
pub mod rule;
pub mod screenshot;
pub mod stats;

#[cfg(test)]
mod test;
