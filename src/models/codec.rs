//! JSON encoding of a [`League`].
//!
//! The on-disk and on-the-wire shape is a bare array:
//! `[{"Name":"Gianni","Wins":10},{"Name":"Pino","Wins":45}]`

use crate::error::CodecError;
use crate::models::League;

pub fn decode_league(bytes: &[u8]) -> Result<League, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

pub fn encode_league(league: &League) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(league).map_err(CodecError::Encode)
}
