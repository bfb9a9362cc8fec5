//! Next / Next* and NextBip / NextBip* from flow graphs

use crate::features::flow_graph::FlowGraph;
use crate::features::pkb::domain::{StatementRelationTable, StatementTable};
use crate::shared::{StatementNumber, StatementType};

/// One fact per flow edge, in ascending statement order
pub fn load_flow_edges(flow: &FlowGraph, statements: &StatementTable, table: &mut StatementRelationTable) {
    for from in flow.statements() {
        let Some(from_ty) = statements.type_of(from) else {
            continue;
        };
        for to in flow.successors(from) {
            if let Some(to_ty) = statements.type_of(to) {
                table.add(from, from_ty, to, to_ty);
            }
        }
    }
}

/// Reachability closure of every statement
pub fn load_flow_closure(
    flow: &FlowGraph,
    statements: &StatementTable,
    table: &mut StatementRelationTable,
) {
    for from in flow.statements() {
        let Some(from_ty) = statements.type_of(from) else {
            continue;
        };
        let closure: Vec<(StatementNumber, StatementType)> = flow
            .reachable_from(from)
            .into_iter()
            .filter_map(|to| statements.type_of(to).map(|ty| (to, ty)))
            .collect();
        table.add_closure(from, from_ty, &closure);
    }
}
