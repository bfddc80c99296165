pub mod bytes;
pub mod constants;
pub mod error;
pub mod varint;

pub use bytes::*;
pub use error::*;
pub use varint::*;
