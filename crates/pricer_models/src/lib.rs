//! # Pricer Models (L2: Business Logic)
//!
//! Payoffs, distribution models, the factories that build them from names,
//! and the deal/portfolio containers.
//!
//! This crate provides:
//! - Payoff definitions (plain vanilla, digital, barrier) in [`instruments`]
//! - Distribution models (Gamma, LogNormal, Uniform) in [`models`]
//! - Name → constructor registries in [`factory`]
//! - Deals and portfolios in [`portfolio`]
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs and models** for static dispatch
//! - **Validation at construction**: every public constructor returns `Result`
//! - **Explicit registries** instead of name reflection

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod factory;
pub mod instruments;
pub mod models;
pub mod portfolio;
