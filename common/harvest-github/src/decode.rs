//! Pure decoders from response bodies to typed records

use crate::error::Result;
use crate::types::{Commit, Compare, Repository};
use serde::de::DeserializeOwned;

/// Decode a JSON body into any record type.
///
/// Decoding is all-or-nothing: a schema mismatch anywhere in the body is
/// returned as `GitHubError::Decode` and no partial value is produced.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode one page of a repository listing
pub fn decode_repositories(body: &[u8]) -> Result<Vec<Repository>> {
    decode_json(body)
}

pub fn decode_commit(body: &[u8]) -> Result<Commit> {
    decode_json(body)
}

pub fn decode_compare(body: &[u8]) -> Result<Compare> {
    decode_json(body)
}
