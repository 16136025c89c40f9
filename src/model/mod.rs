//! Structs describing the parts of the PokéAPI data model this crate reads.
//!
//! Only the fields needed by the catalog are decoded; serde ignores the rest.

pub mod evolution;
pub mod pokemon;
pub mod resource;
pub mod species;
pub mod text;

pub use evolution::Family;
pub use pokemon::Pokemon;
pub use resource::Resource;
pub use species::Species;
