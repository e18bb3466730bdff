use super::RequestsLoggingLevel;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub bind_address: IpAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 8501,
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        }
    }
}
