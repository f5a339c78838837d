// Shortlist API: ranking requests and the persisted score-record trail.

pub mod handlers;
pub mod service;
pub mod store;
