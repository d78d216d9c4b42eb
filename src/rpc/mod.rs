mod handlers;
mod server;

pub use server::{router, serve, SERVICE_PATH};
