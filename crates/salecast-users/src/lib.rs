//! # salecast-users
//!
//! Account registry for Salecast.
//!
//! The forecasting crates only ever see a [`UserId`](salecast_core::UserId).
//! This crate is the collaborator that hands one out: it stores accounts
//! behind the [`UserRepository`] trait and implements signup and login on
//! top of it.
//!
//! Passwords are stored as argon2id PHC strings with default parameters.

pub mod account;
pub mod error;
pub mod password;
pub mod repository;

pub use account::{login, signup};
pub use error::UserError;
pub use repository::{InMemoryUsers, JsonlUsers, User, UserRepository};
