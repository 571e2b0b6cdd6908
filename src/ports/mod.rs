/// Ports module defining interfaces for hexagonal architecture
///
/// The consolidation core only talks to the outside world (file system,
/// remote service, console, log file) through these traits.
pub mod outbound;
