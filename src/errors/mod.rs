pub mod qr_error;

pub use qr_error::{ErrorKind, QrError};
