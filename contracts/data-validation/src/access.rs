//! Administrator identity, pause flag and the data-source binding.

use soroban_sdk::{log, Address, Env};

use crate::types::DataKey;
use crate::ContractError;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Authenticates `caller` and checks that it is the administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();

    let admin = get_admin(env).ok_or(ContractError::NotInitialized)?;
    if *caller != admin {
        log!(env, "rejected: caller is not the admin", caller.clone());
        return Err(ContractError::NotAuthorized);
    }

    Ok(())
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

/// Only decisions are blocked while paused; reads and registry
/// administration stay available.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        log!(env, "rejected: validation is paused");
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn get_data_source(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::DataSource)
}

pub fn set_data_source(env: &Env, data_source: &Address) {
    env.storage().instance().set(&DataKey::DataSource, data_source);
}
