pub mod packager;
pub mod server;

/// Heading to put before log messages from the web server
pub const SERVER_HEADING: &str = "[SERVER] ";

/// Heading to put before log messages from the packager
pub const PACKAGER_HEADING: &str = "[PACKAGER] ";
