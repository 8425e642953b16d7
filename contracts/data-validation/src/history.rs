//! Per-submitter and per-oracle decision history plus daily decision counters.
//!
//! Only written from a successful verdict commit. Reads never fail: a missing
//! list is empty and a missing counter is zero.

use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, DAY_SECONDS, MAX_HISTORY};

/// Day index of a ledger timestamp.
pub fn day_bucket(timestamp: u64) -> u64 {
    timestamp / DAY_SECONDS
}

pub fn submitter_history(env: &Env, submitter: &Address) -> Vec<u64> {
    list(env, &DataKey::SubmitterHistory(submitter.clone()))
}

pub fn oracle_history(env: &Env, oracle: &Address) -> Vec<u64> {
    list(env, &DataKey::OracleHistory(oracle.clone()))
}

pub fn daily_count(env: &Env, day: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::DailyCount(day))
        .unwrap_or(0)
}

/// Books one decision on `data_id` made now. Returns the day bucket that was
/// incremented.
pub fn record(env: &Env, data_id: u64, submitter: &Address, oracle: &Address) -> u64 {
    append(env, DataKey::SubmitterHistory(submitter.clone()), data_id);
    append(env, DataKey::OracleHistory(oracle.clone()), data_id);

    let day = day_bucket(env.ledger().timestamp());
    let count = daily_count(env, day).saturating_add(1);
    env.storage()
        .persistent()
        .set(&DataKey::DailyCount(day), &count);

    day
}

fn list(env: &Env, key: &DataKey) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(key)
        .unwrap_or(Vec::new(env))
}

fn append(env: &Env, key: DataKey, data_id: u64) {
    let mut entries = list(env, &key);
    while entries.len() >= MAX_HISTORY {
        entries.pop_front();
    }
    entries.push_back(data_id);
    env.storage().persistent().set(&key, &entries);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DataValidationContract;
    use soroban_sdk::testutils::{Address as _, Ledger as _};

    #[test]
    fn test_reads_default_to_empty() {
        let env = Env::default();
        let contract_id = env.register(DataValidationContract, ());
        let nobody = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert!(submitter_history(&env, &nobody).is_empty());
            assert!(oracle_history(&env, &nobody).is_empty());
            assert_eq!(daily_count(&env, 19_000), 0);
        });
    }

    #[test]
    fn test_record_appends_in_order_and_counts_per_day() {
        let env = Env::default();
        let contract_id = env.register(DataValidationContract, ());
        let submitter = Address::generate(&env);
        let oracle = Address::generate(&env);

        env.ledger().with_mut(|li| {
            li.timestamp = 3 * DAY_SECONDS + 10;
        });

        env.as_contract(&contract_id, || {
            assert_eq!(record(&env, 5, &submitter, &oracle), 3);
            assert_eq!(record(&env, 9, &submitter, &oracle), 3);
        });

        env.ledger().with_mut(|li| {
            li.timestamp = 4 * DAY_SECONDS;
        });

        env.as_contract(&contract_id, || {
            assert_eq!(record(&env, 2, &submitter, &oracle), 4);

            let history = submitter_history(&env, &submitter);
            assert_eq!(history.len(), 3);
            assert_eq!(history.get(0), Some(5));
            assert_eq!(history.get(2), Some(2));
            assert_eq!(oracle_history(&env, &oracle), history);

            assert_eq!(daily_count(&env, 3), 2);
            assert_eq!(daily_count(&env, 4), 1);
        });
    }

    #[test]
    fn test_history_drops_oldest_beyond_cap() {
        let env = Env::default();
        let contract_id = env.register(DataValidationContract, ());
        let submitter = Address::generate(&env);
        let oracle = Address::generate(&env);

        env.as_contract(&contract_id, || {
            for data_id in 0..(MAX_HISTORY as u64 + 3) {
                record(&env, data_id, &submitter, &oracle);
            }

            let history = submitter_history(&env, &submitter);
            assert_eq!(history.len(), MAX_HISTORY);
            assert_eq!(history.first(), Some(3));
            assert_eq!(history.last(), Some(MAX_HISTORY as u64 + 2));
            assert_eq!(daily_count(&env, 0), MAX_HISTORY + 3);
        });
    }
}
