//! Client side of the data-submission store.
//!
//! The engine only depends on the three lookups below. Any failure of the
//! remote call (missing id, trap, undecodable value) surfaces as
//! `ContractError::InvalidData`.

use soroban_sdk::{contractclient, log, Address, BytesN, Env};

use crate::types::FRESHNESS_WINDOW_SECONDS;
use crate::ContractError;

/// Interface a data-submission store must expose to be bound as the data source.
#[contractclient(name = "DataSourceClient")]
pub trait DataSource {
    fn get_hash(env: Env, data_id: u64) -> BytesN<32>;
    fn get_submitter(env: Env, data_id: u64) -> Address;
    fn get_timestamp(env: Env, data_id: u64) -> u64;
}

/// Submission metadata as reported by the data source.
#[derive(Clone, Debug)]
pub struct Submission {
    /// Only fetched when the caller needs to compare content
    pub hash: Option<BytesN<32>>,
    pub submitter: Address,
    pub timestamp: u64,
}

impl Submission {
    pub fn is_stale(&self, now: u64) -> bool {
        is_stale(self.timestamp, now)
    }

    pub fn hash_matches(&self, claimed: &BytesN<32>) -> bool {
        self.hash.as_ref() == Some(claimed)
    }
}

/// True when `submitted_at` lies further back than the freshness window.
/// Submissions stamped in the future are never stale.
pub fn is_stale(submitted_at: u64, now: u64) -> bool {
    submitted_at < now.saturating_sub(FRESHNESS_WINDOW_SECONDS)
}

/// Queries `source` for everything known about `data_id`. The hash lookup is
/// skipped unless `with_hash` is set.
pub fn fetch_submission(
    env: &Env,
    source: &Address,
    data_id: u64,
    with_hash: bool,
) -> Result<Submission, ContractError> {
    let client = DataSourceClient::new(env, source);

    let hash = if with_hash {
        Some(settle(env, data_id, client.try_get_hash(&data_id))?)
    } else {
        None
    };
    let submitter = settle(env, data_id, client.try_get_submitter(&data_id))?;
    let timestamp = settle(env, data_id, client.try_get_timestamp(&data_id))?;

    Ok(Submission {
        hash,
        submitter,
        timestamp,
    })
}

fn settle<T, C, E>(env: &Env, data_id: u64, result: Result<Result<T, C>, E>) -> Result<T, ContractError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => {
            log!(env, "rejected: data source lookup failed", data_id);
            Err(ContractError::InvalidData)
        }
    }
}
