//! Family cookbook quantity engine
//!
//! Exact parsing, scaling, and formatting of ingredient amounts.

pub mod models;
pub mod scaling;
