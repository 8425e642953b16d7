//! Storage keys, persisted records and protocol constants.

use soroban_sdk::{contracttype, Address};

/// Maximum number of simultaneously active oracles.
pub const MAX_ORACLES: u32 = 5;

/// Highest quality score an oracle may attach to a verified record.
pub const MAX_QUALITY: u32 = 100;

pub const FRESHNESS_BUCKET_SECONDS: u64 = 600;
pub const FRESHNESS_BUCKETS: u64 = 288;

/// Oldest submission age accepted at decision time (288 x 10 minutes, two days).
pub const FRESHNESS_WINDOW_SECONDS: u64 = FRESHNESS_BUCKET_SECONDS * FRESHNESS_BUCKETS;

/// Length of one daily-counter bucket.
pub const DAY_SECONDS: u64 = 86_400;

/// Entries kept per history list. Appending beyond this drops the oldest entry.
pub const MAX_HISTORY: u32 = 100;

/// Membership record for a validator. Never deleted, only deactivated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleRecord {
    pub active: bool,
    pub added_at: u64,
    /// Decisions authorized since the oracle was (re-)onboarded
    pub validation_count: u32,
}

/// Verdict for a single data identifier. Written once, never replaced.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationRecord {
    pub is_valid: bool,
    /// 0..=100; always 0 for invalidated records
    pub quality_score: u32,
    pub validator: Address,
    /// Ledger time of the decision
    pub timestamp: u64,
}

/// Terminal state machine per data identifier.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationStatus {
    Undecided = 0,
    Valid = 1,
    Invalid = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage (registry state)
    Admin,
    Paused,
    DataSource,
    ActiveOracles,
    // Persistent storage
    Oracle(Address),
    Validation(u64),
    SubmitterHistory(Address),
    OracleHistory(Address),
    DailyCount(u64),
}
