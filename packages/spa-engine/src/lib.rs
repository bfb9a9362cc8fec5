/*
 * SPA Engine - Static Program Analyzer core for SIMPLE
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (AST, StatementType, dedup insert)
 * - features/    : Vertical slices (flow_graph → pkb → query_optimizer)
 * - config/      : Analyzer configuration (presets, YAML)
 *
 * Lifecycle:
 * - Knowledge base built once from an AST, then read-only
 * - One optimizer context per query, no shared scratch state
 */

// Crate-level lint configuration
#![allow(clippy::type_complexity)] // Nested index maps are the point of the relation table
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (vertical slices)
pub mod features;

/// Analyzer configuration
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AnalyzerConfig, Preset};
pub use errors::{Result, SpaError};
pub use features::pkb::{build_knowledge_base, ProgramKnowledgeBase};
pub use features::query_optimizer::{optimise_query, AbstractQuery, Clause, GroupedClauses};
pub use shared::models::{Program, StatementNumber, StatementType};
