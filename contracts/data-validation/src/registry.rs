//! Oracle membership: the active set, per-oracle records and counters.
//!
//! The active set lives in instance storage next to the admin so that
//! `count()` is always the length of that set. Records stay in persistent
//! storage after removal for audit.

use soroban_sdk::{log, Address, Env, Vec};

use crate::types::{DataKey, OracleRecord, MAX_ORACLES};
use crate::ContractError;

pub fn get_oracle(env: &Env, oracle: &Address) -> Option<OracleRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Oracle(oracle.clone()))
}

fn set_oracle(env: &Env, oracle: &Address, record: &OracleRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Oracle(oracle.clone()), record);
}

pub fn is_active(env: &Env, oracle: &Address) -> bool {
    get_oracle(env, oracle).is_some_and(|record| record.active)
}

/// Active oracles in onboarding order.
pub fn active_oracles(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::ActiveOracles)
        .unwrap_or(Vec::new(env))
}

pub fn count(env: &Env) -> u32 {
    active_oracles(env).len()
}

/// Onboards `oracle`, or re-onboards a previously removed one with fresh
/// counters.
pub fn add(env: &Env, oracle: &Address) -> Result<OracleRecord, ContractError> {
    let mut active = active_oracles(env);

    if active.len() >= MAX_ORACLES {
        log!(env, "rejected: oracle capacity reached", MAX_ORACLES);
        return Err(ContractError::InvalidOracle);
    }

    if is_active(env, oracle) {
        log!(env, "rejected: oracle already active", oracle.clone());
        return Err(ContractError::InvalidOracle);
    }

    let record = OracleRecord {
        active: true,
        added_at: env.ledger().timestamp(),
        validation_count: 0,
    };
    set_oracle(env, oracle, &record);

    active.push_back(oracle.clone());
    env.storage().instance().set(&DataKey::ActiveOracles, &active);

    Ok(record)
}

/// Deactivates `oracle`. `added_at` and `validation_count` are kept.
pub fn remove(env: &Env, oracle: &Address) -> Result<OracleRecord, ContractError> {
    let mut record = match get_oracle(env, oracle) {
        Some(record) if record.active => record,
        _ => {
            log!(env, "rejected: oracle is not active", oracle.clone());
            return Err(ContractError::InvalidOracle);
        }
    };

    record.active = false;
    set_oracle(env, oracle, &record);

    let mut remaining = Vec::new(env);
    for existing in active_oracles(env).iter() {
        if existing != *oracle {
            remaining.push_back(existing);
        }
    }
    env.storage()
        .instance()
        .set(&DataKey::ActiveOracles, &remaining);

    Ok(record)
}

/// Counts one more decision against `oracle`. Callers must have checked
/// that the oracle is active.
pub fn record_validation(env: &Env, oracle: &Address) {
    if let Some(mut record) = get_oracle(env, oracle) {
        record.validation_count = record.validation_count.saturating_add(1);
        set_oracle(env, oracle, &record);
    }
}
