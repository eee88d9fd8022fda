pub mod codec;
pub mod error;
pub mod shorten;

pub use codec::SharePayloadCodec;
pub use error::{DecodeError, ShareError};
pub use shorten::{HttpShortener, LinkShortener};
