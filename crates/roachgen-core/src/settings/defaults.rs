//! Settings known to this binary

use std::time::Duration;

use super::{Registry, SettingsOverrides};

const MIB: u64 = 1 << 20;
const HOUR: u64 = 3600;

pub(super) fn cluster_settings() -> Registry {
    let mut r = Registry::new();

    r.register_string("cluster.organization", "organization name", "");

    r.register_bool(
        "diagnostics.reporting.enabled",
        "enable reporting diagnostic metrics to cockroach labs",
        false,
    )
    .register_duration(
        "diagnostics.reporting.interval",
        "interval at which diagnostics data should be reported",
        Duration::from_secs(HOUR),
    )
    .register_bool(
        "diagnostics.reporting.send_crash_reports",
        "send crash and panic reports",
        true,
    );

    r.register_bool(
        "kv.allocator.load_based_lease_rebalancing.enabled",
        "set to enable rebalancing of range leases based on load and latency",
        true,
    )
    .register_float(
        "kv.allocator.lease_rebalancing_aggressiveness",
        "set greater than 1.0 to rebalance leases toward load more aggressively, \
         or between 0 and 1.0 to be more conservative about rebalancing leases",
        1.0,
    )
    .register_float(
        "kv.allocator.range_rebalance_threshold",
        "minimum fraction away from the mean a store's range count can be before \
         it is considered overfull or underfull",
        0.05,
    )
    .register_byte_size(
        "kv.raft.command.max_size",
        "maximum size of a raft command",
        64 * MIB,
    )
    .register_byte_size(
        "kv.snapshot_rebalance.max_rate",
        "the rate limit (bytes/sec) to use for rebalance snapshots",
        2 * MIB,
    )
    .register_byte_size(
        "kv.snapshot_recovery.max_rate",
        "the rate limit (bytes/sec) to use for recovery snapshots",
        8 * MIB,
    )
    .register_int(
        "kv.transaction.max_intents_bytes",
        "maximum number of bytes used to track write intents in transactions",
        256_000,
    );

    r.register_duration(
        "server.consistency_check.interval",
        "the time between range consistency checks; set to 0 to disable consistency checking",
        Duration::from_secs(24 * HOUR),
    )
    .register_duration(
        "server.time_until_store_dead",
        "the time after which if there is no new gossiped information about a store, \
         it is considered dead",
        Duration::from_secs(5 * 60),
    )
    .register_duration(
        "server.web_session_timeout",
        "the duration that a newly created web session will be valid",
        Duration::from_secs(7 * 24 * HOUR),
    );

    r.register_enum(
        "sql.defaults.distsql",
        "Default distributed SQL execution mode",
        1,
        &[(0, "off"), (1, "auto"), (2, "on"), (3, "always")],
    )
    .register_byte_size(
        "sql.distsql.temp_storage.workmem",
        "maximum amount of memory in bytes a processor can use before falling back to temp storage",
        64 * MIB,
    )
    .register_duration(
        "sql.metrics.statement_details.threshold",
        "minimum execution time to cause statistics to be collected",
        Duration::ZERO,
    )
    .register_bool(
        "sql.trace.log_statement_execute",
        "set to true to enable logging of executed statements",
        false,
    );

    r.register_bool(
        "trace.debug.enable",
        "if set, traces for recent requests can be seen in the /debug page",
        false,
    );

    r
}

/// Defaults that differ from a setting's registered value once a cluster
/// has been bootstrapped
pub fn default_overrides() -> SettingsOverrides {
    let mut overrides = SettingsOverrides::new();
    overrides.insert("diagnostics.reporting.enabled".to_string(), "true".to_string());
    overrides
}
