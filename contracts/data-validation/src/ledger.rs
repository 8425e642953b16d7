//! Write-once verdict map, one record per data identifier.

use soroban_sdk::{log, Env};

use crate::types::{DataKey, ValidationRecord, ValidationStatus};
use crate::ContractError;

pub fn get(env: &Env, data_id: u64) -> Option<ValidationRecord> {
    env.storage().persistent().get(&DataKey::Validation(data_id))
}

pub fn is_decided(env: &Env, data_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Validation(data_id))
}

pub fn require_undecided(env: &Env, data_id: u64) -> Result<(), ContractError> {
    if is_decided(env, data_id) {
        log!(env, "rejected: data already decided", data_id);
        return Err(ContractError::AlreadyDecided);
    }
    Ok(())
}

/// The only write path for verdicts. An existing record is never replaced.
pub fn commit(env: &Env, data_id: u64, record: &ValidationRecord) -> Result<(), ContractError> {
    require_undecided(env, data_id)?;
    env.storage()
        .persistent()
        .set(&DataKey::Validation(data_id), record);
    Ok(())
}

pub fn status(env: &Env, data_id: u64) -> ValidationStatus {
    match get(env, data_id) {
        None => ValidationStatus::Undecided,
        Some(record) if record.is_valid => ValidationStatus::Valid,
        Some(_) => ValidationStatus::Invalid,
    }
}
