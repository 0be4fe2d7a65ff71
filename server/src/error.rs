//! Startup and serve errors for the portal host.

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("config: {var} = {value:?}: {reason}")]
    Config { var: &'static str, value: String, reason: String },

    /// The Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind its address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
