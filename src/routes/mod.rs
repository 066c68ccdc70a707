mod routes;

pub use routes::init_routes;
