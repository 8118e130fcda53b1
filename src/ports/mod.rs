//! Port traits: the seams between the datafeed and its collaborators.

pub mod config_port;
pub mod datafeed_port;
pub mod price_port;
pub mod sink;
