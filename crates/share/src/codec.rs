use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use planning::WeeklyMenu;

use crate::error::{DecodeError, ShareError};

/// Compact, URL-safe serialization of a weekly schedule for link
/// sharing: JSON, zlib-deflated, base64-encoded without padding.
///
/// The round trip is lossy only in the intended way: ephemeral fields
/// never make it into the menu's serialized form, so
/// `decode(encode(m))` equals the purified `m`.
pub struct SharePayloadCodec;

impl SharePayloadCodec {
    pub fn encode(menu: &WeeklyMenu) -> Result<String, ShareError> {
        let json = serde_json::to_vec(menu)?;
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)?;
        let compressed = encoder.finish()?;
        Ok(URL_SAFE_NO_PAD.encode(compressed))
    }

    pub fn decode(payload: &str) -> Result<WeeklyMenu, DecodeError> {
        let compressed = URL_SAFE_NO_PAD.decode(payload.trim())?;
        let mut json = Vec::new();
        ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut json)?;
        Ok(serde_json::from_slice(&json)?)
    }
}
