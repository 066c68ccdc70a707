pub mod render_url;
pub mod request_builder;
pub mod style_encoder;
