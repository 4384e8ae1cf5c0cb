use thiserror::Error;

/// Failures while configuring or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Host/port could not be parsed into a socket address.
    #[error("invalid bind address: {0}")]
    InvalidAddress(String),

    /// The configured CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),

    /// Binding the listener failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that could not be bound.
        addr: std::net::SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
