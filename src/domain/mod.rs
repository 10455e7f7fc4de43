//! Value types shared by the settlement pipeline, plus the storage port.

pub mod balances;
pub mod expense;
pub mod group;
pub mod money;
pub mod participant;
pub mod ports;
pub mod settlement;
