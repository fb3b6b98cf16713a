//! Restock Ranker - Multi-criteria prioritisation of restock candidates.
//!
//! This crate ranks named alternatives against weighted benefit/cost criteria
//! with the TOPSIS method, and exposes the ranking as a library and an HTTP
//! service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
