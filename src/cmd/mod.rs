//! Command module structure for the seopipe CLI

pub mod check;
pub mod validate;
