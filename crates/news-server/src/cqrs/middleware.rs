//! Command/query markers
//!
//! Every request type registered with the mediator is tagged as either a
//! write ([`Command`]) or a read ([`Query`]). Commands change rows; queries
//! never do.

/// Marker for requests that modify state (POST, PATCH, DELETE)
pub trait Command: Send + 'static {}

/// Marker for requests that only read state (GET)
pub trait Query: Send + 'static {}
