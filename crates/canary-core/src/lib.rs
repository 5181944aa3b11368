pub mod env;
pub mod middleware;
pub mod tracing;
