pub mod server;
pub mod store;
pub mod upstream;
