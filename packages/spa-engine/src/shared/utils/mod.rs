pub mod dedup;
pub mod reachability;
