// Composition root: configuration, wiring of adapters into handlers, the HTTP
// and GraphQL surface and background workers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod response;
pub mod session;
pub mod state;
pub mod workers;
