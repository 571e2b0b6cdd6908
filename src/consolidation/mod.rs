/// Consolidation domain: snapshots, merge policy and the create-solution payload
///
/// Everything in here is pure; file access, network calls and logging live
/// behind the ports and are injected by the application layer.
pub mod domain;
pub mod policies;
pub mod services;
