//! Key handlers - turn neighbour keys from clients into new order keys.
//!
//! The service keeps no state. Clients still have to read the neighbours and
//! store the returned key in one transaction of their own.

use crate::config::Config;
use crate::error::{AppError, Result};
use lexorder_engine::KeyRequest;
use serde::{Deserialize, Serialize};

/// Query parameters for a key before `next`.
#[derive(Debug, Deserialize)]
pub struct StartQuery {
    pub next: String,
}

/// Query parameters for a key after `previous`.
#[derive(Debug, Deserialize)]
pub struct EndQuery {
    pub previous: String,
}

/// Query parameters for a key between two neighbours.
#[derive(Debug, Deserialize)]
pub struct BetweenQuery {
    pub previous: String,
    pub next: String,
}

/// Response carrying one key.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyResponse {
    pub key: String,
}

/// Response carrying several keys in ascending order.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeysResponse {
    pub keys: Vec<String>,
}

/// Key for the first item of an empty list.
pub fn handle_initial() -> Result<KeyResponse> {
    let key = lexorder_engine::initial()?;
    Ok(KeyResponse { key })
}

/// Key before `next`.
pub fn handle_start(query: StartQuery) -> Result<KeyResponse> {
    let key = lexorder_engine::start(&query.next)?;
    tracing::debug!("start key {} before {}", key, query.next);
    Ok(KeyResponse { key })
}

/// Key after `previous`.
pub fn handle_end(query: EndQuery) -> Result<KeyResponse> {
    let key = lexorder_engine::end(&query.previous)?;
    tracing::debug!("end key {} after {}", key, query.previous);
    Ok(KeyResponse { key })
}

/// Key between `previous` and `next`.
pub fn handle_between(query: BetweenQuery) -> Result<KeyResponse> {
    let key = lexorder_engine::between(&query.previous, &query.next)?;
    tracing::debug!(
        "between key {} for {}..{}",
        key,
        query.previous,
        query.next
    );
    Ok(KeyResponse { key })
}

/// Process a general key request, filling in the configured alphabet.
pub fn handle_generate(config: &Config, mut request: KeyRequest) -> Result<KeysResponse> {
    let requested = request.key_count();
    if requested > config.max_count {
        return Err(AppError::TooManyKeys {
            requested,
            limit: config.max_count,
        });
    }

    request
        .alphabet
        .get_or_insert_with(|| config.alphabet.clone());

    let keys = request.run()?;
    tracing::debug!("generated {} keys", keys.len());
    Ok(KeysResponse { keys })
}
