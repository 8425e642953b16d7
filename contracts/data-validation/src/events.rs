//! Contract events, one per state change.

use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(env: &Env, admin: &Address, data_source: &Address) {
    env.events().publish(
        (symbol_short!("init"),),
        (admin.clone(), data_source.clone()),
    );
}

pub fn oracle_added(env: &Env, oracle: &Address, added_at: u64) {
    env.events()
        .publish((symbol_short!("orc_add"),), (oracle.clone(), added_at));
}

pub fn oracle_removed(env: &Env, oracle: &Address, validation_count: u32) {
    env.events()
        .publish((symbol_short!("orc_rem"),), (oracle.clone(), validation_count));
}

pub fn paused(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("paused"),), (admin.clone(),));
}

pub fn unpaused(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("unpaused"),), (admin.clone(),));
}

pub fn data_source_set(env: &Env, data_source: &Address) {
    env.events()
        .publish((symbol_short!("src_set"),), (data_source.clone(),));
}

pub fn data_verified(
    env: &Env,
    data_id: u64,
    oracle: &Address,
    submitter: &Address,
    quality_score: u32,
) {
    env.events().publish(
        (symbol_short!("verified"), data_id),
        (oracle.clone(), submitter.clone(), quality_score),
    );
}

pub fn data_invalidated(env: &Env, data_id: u64, oracle: &Address, submitter: &Address) {
    env.events().publish(
        (symbol_short!("invalid"), data_id),
        (oracle.clone(), submitter.clone()),
    );
}
