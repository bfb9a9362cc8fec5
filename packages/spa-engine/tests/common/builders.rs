//! Test data builders
//!
//! Statement constructors take explicit statement numbers so fixtures read
//! like numbered SIMPLE listings.

use spa_engine::features::query_optimizer::{
    AbstractQuery, AttributeType, Clause, DesignEntityType, ExpressionSpec, PatternKind, Reference,
    RelationshipKind, Synonym,
};
use spa_engine::shared::{
    ArithmeticOp, CondExpr, Expr, Procedure, Program, RelationalOp, Statement, StatementKind,
    StatementNumber,
};

// ============================================================================
// Program builders
// ============================================================================

/// Builder for Program
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    procedures: Vec<Procedure>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a procedure
    pub fn procedure(mut self, name: &str, body: Vec<Statement>) -> Self {
        self.procedures.push(Procedure::new(name, body));
        self
    }

    pub fn build(self) -> Program {
        Program::new(self.procedures)
    }
}

pub fn read(n: StatementNumber, var: &str) -> Statement {
    Statement::new(n, StatementKind::Read(var.into()))
}

pub fn print(n: StatementNumber, var: &str) -> Statement {
    Statement::new(n, StatementKind::Print(var.into()))
}

pub fn call(n: StatementNumber, procedure: &str) -> Statement {
    Statement::new(n, StatementKind::Call(procedure.into()))
}

pub fn assign(n: StatementNumber, target: &str, expr: Expr) -> Statement {
    Statement::new(
        n,
        StatementKind::Assign {
            target: target.into(),
            expr,
        },
    )
}

/// `while (var > 0) { body }`
pub fn while_loop(n: StatementNumber, var: &str, body: Vec<Statement>) -> Statement {
    Statement::new(
        n,
        StatementKind::While {
            cond: positive(var),
            body,
        },
    )
}

/// `if (var > 0) then { then_branch } else { else_branch }`
pub fn if_else(
    n: StatementNumber,
    var: &str,
    then_branch: Vec<Statement>,
    else_branch: Vec<Statement>,
) -> Statement {
    Statement::new(
        n,
        StatementKind::If {
            cond: positive(var),
            then_branch,
            else_branch,
        },
    )
}

fn positive(var: &str) -> CondExpr {
    CondExpr::Rel(RelationalOp::Gt, Expr::var(var), Expr::Const(0))
}

pub fn var(name: &str) -> Expr {
    Expr::var(name)
}

pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(ArithmeticOp::Add, lhs, rhs)
}

pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(ArithmeticOp::Mul, lhs, rhs)
}

pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(ArithmeticOp::Div, lhs, rhs)
}

// ============================================================================
// Query builders
// ============================================================================

/// Builder for AbstractQuery
#[derive(Debug, Default)]
pub struct QueryBuilder {
    selected: Vec<Synonym>,
    clauses: Vec<Clause>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, name: &str, entity: DesignEntityType) -> Self {
        self.selected.push(Synonym::new(name, entity));
        self
    }

    pub fn such_that(mut self, kind: RelationshipKind, left: Reference, right: Reference) -> Self {
        self.clauses.push(Clause::such_that(kind, left, right));
        self
    }

    /// `pattern a(entity_ref, _)`
    pub fn assign_pattern(mut self, assign: &str, entity_ref: Reference) -> Self {
        self.clauses.push(Clause::pattern(
            PatternKind::Assign(ExpressionSpec::Any),
            Synonym::new(assign, DesignEntityType::Assign),
            entity_ref,
        ));
        self
    }

    pub fn with(mut self, left: Reference, right: Reference) -> Self {
        self.clauses.push(Clause::with(left, right));
        self
    }

    pub fn build(self) -> AbstractQuery {
        AbstractQuery::new(self.selected, self.clauses)
    }
}

pub fn syn(name: &str, entity: DesignEntityType) -> Reference {
    Reference::Synonym(Synonym::new(name, entity))
}

pub fn attr(name: &str, entity: DesignEntityType, attribute: AttributeType) -> Reference {
    Reference::Attribute(Synonym::new(name, entity), attribute)
}
