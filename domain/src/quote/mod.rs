//! Quote request data model.
//!
//! - [`request::QuoteRequest`]: the entity the wizard fills in
//! - [`field::Field`]: field identifiers and their form metadata
//! - [`species::Species`], [`timeline::Timeline`]: closed picker choices

pub mod field;
pub mod request;
pub mod species;
pub mod timeline;

pub use field::Field;
pub use request::QuoteRequest;
pub use species::Species;
pub use timeline::Timeline;
