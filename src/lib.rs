pub mod clients;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod structs;
pub mod utils;

#[cfg(test)]
mod test_support;
