//! Client-side workflow for an employee expense bill application.
//!
//! Two components make up the workflow: [`bills::BillsList`] fetches the
//! user's bills from a store and formats them for display, and
//! [`new_bill::NewBillForm`] validates and uploads a receipt file, then
//! finalizes the draft bill on submission. The store is an abstract
//! collaborator ([`store::BillStore`]); two backends ship with the crate
//! (SQLite and remote HTTP), and the hosting layer wires the components'
//! handler methods to its own UI toolkit.

pub mod bills;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod models;
pub mod new_bill;
pub mod session;
pub mod store;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use error::Error;
