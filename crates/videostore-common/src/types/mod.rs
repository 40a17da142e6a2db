//! Core data types for the video store

pub mod customer;
pub mod loyalty;
pub mod movie;
pub mod pricing;
pub mod rental;
