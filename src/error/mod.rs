mod error;

pub use error::NumberError;
