//! Build use case: AST -> ProgramKnowledgeBase
//!
//! Phases, in dependency order:
//! 1. semantic validation
//! 2. entities, Follows/Follows*, Parent/Parent*
//! 3. Uses/Modifies (callee-first), Calls/Calls*
//! 4. CFG: Next, Next*
//! 5. Affects, Affects* (needs Uses/Modifies and the CFG)
//! 6. Bip graph: NextBip, NextBip*, AffectsBip, AffectsBip*

use crate::config::ExtractionConfig;
use crate::errors::Result;
use crate::features::flow_graph::build_flow_graphs;
use crate::features::pkb::domain::ProgramKnowledgeBase;
use crate::features::pkb::infrastructure::{
    compute_affects, extract_calls, extract_entities, extract_follows_and_parent,
    extract_uses_modifies, load_affects, load_flow_closure, load_flow_edges, validate_program,
    CallGraph, KillPolicy,
};
use crate::shared::Program;
use tracing::{debug, info};

pub struct BuildKnowledgeBaseUseCase {
    config: ExtractionConfig,
}

impl BuildKnowledgeBaseUseCase {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, program: &Program) -> Result<ProgramKnowledgeBase> {
        validate_program(program)?;

        let mut kb = ProgramKnowledgeBase::default();
        let call_graph = CallGraph::build(program);

        extract_entities(program, &mut kb);
        extract_follows_and_parent(program, &mut kb);
        extract_uses_modifies(program, &call_graph, &mut kb)?;
        extract_calls(program, &call_graph, &mut kb);

        let graphs = build_flow_graphs(program, self.config.bip);
        let cfg = &graphs.cfg.flow;

        load_flow_edges(cfg, &kb.statements, &mut kb.next);
        if self.config.next_star {
            load_flow_closure(cfg, &kb.statements, &mut kb.next_star);
        }
        debug!(next = kb.next.len(), next_star = kb.next_star.len(), "Extracted Next");

        if self.config.affects {
            let facts = compute_affects(cfg, &kb, KillPolicy::CallsKill);
            load_affects(&facts, &mut kb.affects, Some(&mut kb.affects_star));
            debug!(
                affects = kb.affects.len(),
                affects_star = kb.affects_star.len(),
                "Extracted Affects"
            );
        }

        if let Some(bip) = &graphs.bip {
            load_flow_edges(bip, &kb.statements, &mut kb.next_bip);
            if self.config.next_star {
                load_flow_closure(bip, &kb.statements, &mut kb.next_bip_star);
            }

            if self.config.affects {
                let facts = compute_affects(bip, &kb, KillPolicy::CallsTransparent);
                load_affects(&facts, &mut kb.affects_bip, Some(&mut kb.affects_bip_star));
            }
            debug!(
                next_bip = kb.next_bip.len(),
                affects_bip = kb.affects_bip.len(),
                "Extracted Bip relations"
            );
        }

        let stats = kb.stats();
        info!(
            statements = stats.statements,
            procedures = stats.procedures,
            follows = stats.follows,
            parent = stats.parent,
            uses = stats.uses,
            modifies = stats.modifies,
            calls = stats.calls,
            next = stats.next,
            affects = stats.affects,
            "Knowledge base built"
        );

        Ok(kb)
    }
}

/// Validate `program` and extract every relation `config` enables
pub fn build_knowledge_base(
    program: &Program,
    config: &ExtractionConfig,
) -> Result<ProgramKnowledgeBase> {
    BuildKnowledgeBaseUseCase::new(config.clone()).execute(program)
}
