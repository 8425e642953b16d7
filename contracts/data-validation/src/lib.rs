//! Data Validation Contract
//!
//! Settles the validity of submitted data records. A small set of
//! administrator-curated oracles either verifies a record (claimed content
//! hash matches the data source, submission still fresh) with a quality score,
//! or invalidates it. Either verdict is permanent: a data identifier is decided
//! exactly once, and every verdict books the submitter's and oracle's history
//! and the daily decision counter in the same invocation.

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, BytesN, Env, Vec};

pub mod access;
pub mod data_source;
pub mod events;
pub mod history;
pub mod ledger;
pub mod registry;
pub mod types;

pub use data_source::{DataSource, DataSourceClient, Submission};
pub use types::{
    OracleRecord, ValidationRecord, ValidationStatus, DAY_SECONDS, FRESHNESS_WINDOW_SECONDS,
    MAX_HISTORY, MAX_ORACLES, MAX_QUALITY,
};


/// Contract errors
#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Caller is not the admin, or not an active oracle
    NotAuthorized = 1,
    /// Data source lookup failed or the claimed hash does not match
    InvalidData = 2,
    Paused = 3,
    /// Oracle capacity reached, oracle already active, or oracle not active
    InvalidOracle = 4,
    AlreadyDecided = 5,
    InvalidQuality = 6,
    StaleTimestamp = 7,
    /// Quality requested for a data identifier with no verdict
    NotDecided = 8,
    AlreadyInitialized = 9,
    NotInitialized = 10,
}

#[contract]
pub struct DataValidationContract;

#[contractimpl]
impl DataValidationContract {
    /// Initialize the contract with the admin and the data source to query.
    ///
    /// # Arguments
    /// * `admin` - Permanent administrator; must authorize the call
    /// * `data_source` - Contract implementing [`DataSource`]
    ///
    /// # Events
    /// Emits `init`
    pub fn initialize(env: Env, admin: Address, data_source: Address) -> Result<(), ContractError> {
        if access::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        access::set_admin(&env, &admin);
        access::set_data_source(&env, &data_source);
        access::set_paused(&env, false);

        events::initialized(&env, &admin, &data_source);

        Ok(())
    }

    // ---------------------------------------------------------------------
    // Oracle registry (admin only)
    // ---------------------------------------------------------------------

    /// Onboard an oracle. Re-adding a removed oracle resets its counters.
    ///
    /// # Errors
    /// * `NotAuthorized` - caller is not the admin
    /// * `InvalidOracle` - five oracles already active, or `oracle` is active
    ///
    /// # Events
    /// Emits `orc_add`
    pub fn add_oracle(env: Env, caller: Address, oracle: Address) -> Result<(), ContractError> {
        access::require_admin(&env, &caller)?;

        let record = registry::add(&env, &oracle)?;

        events::oracle_added(&env, &oracle, record.added_at);

        Ok(())
    }

    /// Deactivate an oracle. Its record is retained for audit.
    ///
    /// # Errors
    /// * `NotAuthorized` - caller is not the admin
    /// * `InvalidOracle` - `oracle` is not active
    ///
    /// # Events
    /// Emits `orc_rem`
    pub fn remove_oracle(env: Env, caller: Address, oracle: Address) -> Result<(), ContractError> {
        access::require_admin(&env, &caller)?;

        let record = registry::remove(&env, &oracle)?;

        events::oracle_removed(&env, &oracle, record.validation_count);

        Ok(())
    }

    // ---------------------------------------------------------------------
    // Access gate (admin only)
    // ---------------------------------------------------------------------

    /// Block `verify` and `invalidate`. Reads and registry administration
    /// stay available.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        access::require_admin(&env, &caller)?;
        access::set_paused(&env, true);
        events::paused(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        access::require_admin(&env, &caller)?;
        access::set_paused(&env, false);
        events::unpaused(&env, &caller);
        Ok(())
    }

    /// Rebind the data source queried by subsequent decisions.
    pub fn set_data_source(env: Env, caller: Address, data_source: Address) -> Result<(), ContractError> {
        access::require_admin(&env, &caller)?;
        access::set_data_source(&env, &data_source);
        events::data_source_set(&env, &data_source);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Decisions (active oracles only)
    // ---------------------------------------------------------------------

    /// Mark `data_id` valid with a quality score.
    ///
    /// Every precondition is checked before anything is written, so a failed
    /// call leaves no trace.
    ///
    /// # Arguments
    /// * `caller` - Active oracle authorizing the verdict
    /// * `data_id` - Identifier in the data source
    /// * `claimed_hash` - Content hash the oracle checked; must equal the stored hash
    /// * `quality_score` - 0..=100
    ///
    /// # Errors
    /// * `Paused`, `NotAuthorized`, `InvalidQuality`, `AlreadyDecided`
    /// * `InvalidData` - lookup failed or hash mismatch
    /// * `StaleTimestamp` - submission older than the freshness window
    ///
    /// # Events
    /// Emits `verified`
    pub fn verify(
        env: Env,
        caller: Address,
        data_id: u64,
        claimed_hash: BytesN<32>,
        quality_score: u32,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        access::require_not_paused(&env)?;
        Self::require_active_oracle(&env, &caller)?;

        if quality_score > MAX_QUALITY {
            log!(&env, "rejected: quality score out of range", quality_score);
            return Err(ContractError::InvalidQuality);
        }

        ledger::require_undecided(&env, data_id)?;

        let submission = Self::fetch_fresh(&env, data_id, true)?;

        if !submission.hash_matches(&claimed_hash) {
            log!(&env, "rejected: claimed hash does not match", data_id);
            return Err(ContractError::InvalidData);
        }

        Self::decide(&env, data_id, &caller, &submission.submitter, true, quality_score)?;

        events::data_verified(&env, data_id, &caller, &submission.submitter, quality_score);

        Ok(())
    }

    /// Mark `data_id` invalid. Consumes the same one-time slot as `verify`;
    /// the content hash is not consulted.
    ///
    /// # Events
    /// Emits `invalid`
    pub fn invalidate(env: Env, caller: Address, data_id: u64) -> Result<(), ContractError> {
        caller.require_auth();

        access::require_not_paused(&env)?;
        Self::require_active_oracle(&env, &caller)?;
        ledger::require_undecided(&env, data_id)?;

        let submission = Self::fetch_fresh(&env, data_id, false)?;

        Self::decide(&env, data_id, &caller, &submission.submitter, false, 0)?;

        events::data_invalidated(&env, data_id, &caller, &submission.submitter);

        Ok(())
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// True only for records verified as valid.
    pub fn is_data_valid(env: Env, data_id: u64) -> bool {
        ledger::get(&env, data_id).is_some_and(|record| record.is_valid)
    }

    /// Quality score of a decided record (0 for invalidated records).
    pub fn get_data_quality(env: Env, data_id: u64) -> Result<u32, ContractError> {
        ledger::get(&env, data_id)
            .map(|record| record.quality_score)
            .ok_or(ContractError::NotDecided)
    }

    pub fn get_validation_details(env: Env, data_id: u64) -> Option<ValidationRecord> {
        ledger::get(&env, data_id)
    }

    pub fn get_status(env: Env, data_id: u64) -> ValidationStatus {
        ledger::status(&env, data_id)
    }

    /// Data identifiers decided for `submitter`, oldest first.
    pub fn get_history(env: Env, submitter: Address) -> Vec<u64> {
        history::submitter_history(&env, &submitter)
    }

    /// Data identifiers decided by `oracle`, oldest first.
    pub fn get_oracle_history(env: Env, oracle: Address) -> Vec<u64> {
        history::oracle_history(&env, &oracle)
    }

    /// Number of decisions made during day bucket `day` (timestamp / 86400).
    pub fn get_daily_count(env: Env, day: u64) -> u32 {
        history::daily_count(&env, day)
    }

    pub fn get_current_day(env: Env) -> u64 {
        history::day_bucket(env.ledger().timestamp())
    }

    pub fn is_oracle(env: Env, oracle: Address) -> bool {
        registry::is_active(&env, &oracle)
    }

    /// Oracle record, including retained records of removed oracles.
    pub fn get_oracle(env: Env, oracle: Address) -> Option<OracleRecord> {
        registry::get_oracle(&env, &oracle)
    }

    /// Active oracles in onboarding order.
    pub fn get_oracles(env: Env) -> Vec<Address> {
        registry::active_oracles(&env)
    }

    pub fn get_oracle_count(env: Env) -> u32 {
        registry::count(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        access::get_admin(&env)
    }

    pub fn get_data_source(env: Env) -> Option<Address> {
        access::get_data_source(&env)
    }

    // Helper functions

    fn require_active_oracle(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !registry::is_active(env, caller) {
            log!(env, "rejected: caller is not an active oracle", caller.clone());
            return Err(ContractError::NotAuthorized);
        }
        Ok(())
    }

    /// Looks `data_id` up in the bound data source and rejects stale submissions.
    fn fetch_fresh(env: &Env, data_id: u64, with_hash: bool) -> Result<Submission, ContractError> {
        let source = access::get_data_source(env).ok_or(ContractError::NotInitialized)?;
        let submission = data_source::fetch_submission(env, &source, data_id, with_hash)?;

        let now = env.ledger().timestamp();
        if submission.is_stale(now) {
            log!(env, "rejected: submission is stale", data_id, submission.timestamp);
            return Err(ContractError::StaleTimestamp);
        }

        Ok(submission)
    }

    /// Commits the verdict and books it. Runs only after every precondition
    /// has passed.
    fn decide(
        env: &Env,
        data_id: u64,
        oracle: &Address,
        submitter: &Address,
        is_valid: bool,
        quality_score: u32,
    ) -> Result<(), ContractError> {
        let record = ValidationRecord {
            is_valid,
            quality_score,
            validator: oracle.clone(),
            timestamp: env.ledger().timestamp(),
        };

        ledger::commit(env, data_id, &record)?;
        history::record(env, data_id, submitter, oracle);
        registry::record_validation(env, oracle);

        Ok(())
    }
}
