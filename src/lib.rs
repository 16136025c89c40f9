//! `pkcat` is a catalog of Pokemon backed by PokéAPI.
//!
//! The [`api`] and [`model`] modules talk to the service; [`catalog`],
//! [`chain`] and [`moves`] hold the pure logic the catalog's views are built
//! from.

#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod chain;
pub mod config;
pub mod display;
pub mod model;
pub mod moves;
pub mod source;
pub mod species;

pub use api::Api;
pub use catalog::CatalogEntry;
pub use chain::EvolutionNode;
pub use config::Config;
pub use source::Source;
