//! The settlement pipeline.
//!
//! [`aggregator`] folds expenses into net balances, [`resolver`] turns those
//! into transfers and [`tracker`] hides the ones already paid. [`engine`] ties
//! the three together per group; [`summary`] holds the reporting helpers.

pub mod aggregator;
pub mod engine;
pub mod resolver;
pub mod summary;
pub mod tracker;
