//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::persistence::SqliteConnector;

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) connector: SqliteConnector,
}

impl ServerConfig {
    /// Bundle the listener address with the storage connector.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, connector: SqliteConnector) -> Self {
        Self {
            bind_addr,
            connector,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the connector handed to persistence adapters.
    #[must_use]
    pub fn connector(&self) -> &SqliteConnector {
        &self.connector
    }
}
