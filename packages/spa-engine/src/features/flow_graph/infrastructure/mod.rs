//! Flow Graph infrastructure

pub mod bip;
pub mod cfg;

pub use bip::BipGraphBuilder;
pub use cfg::CfgBuilder;
