//! Wire types shared between the boiler controller API and its clients.

pub mod domain;
pub mod error;
pub mod protocol;
