pub mod creation_client;

pub use creation_client::CreationClient;
