//! Melona Deck Engine
//!
//! Platform-agnostic core logic for the Melona date-ticket deck.
//! This crate provides the unlock calendar, collection tracking, session
//! gating and carousel navigation without UI or browser dependencies.

pub mod carousel;
pub mod catalog;
pub mod collection;
pub mod session;
pub mod unlock;

// Re-export commonly used types
pub use carousel::{Carousel, SlideDirection};
pub use catalog::{Catalog, CatalogError, Category, Filter, Ticket};
pub use collection::Collection;
pub use session::{PassphraseOutcome, SessionConfig};
pub use unlock::{UnlockCalendar, UnlockConfig, UnlockStatus, spanish_date};
