//! SIMPLE program AST
//!
//! Owned tree produced by the parser: each container statement exclusively
//! owns its nested statement lists. The knowledge base walks it once during
//! construction and never keeps a reference to it.

use super::statement::{StatementNumber, StatementType};
use super::Name;
use serde::{Deserialize, Serialize};

/// Whole program: a non-empty list of procedures
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    pub procedures: Vec<Procedure>,
}

impl Program {
    pub fn new(procedures: Vec<Procedure>) -> Self {
        Self { procedures }
    }

    pub fn procedure(&self, name: &str) -> Option<&Procedure> {
        self.procedures.iter().find(|p| p.name == name)
    }

    /// Visit every statement of every procedure in program order (pre-order)
    pub fn for_each_statement<'a>(&'a self, mut f: impl FnMut(&'a Procedure, &'a Statement)) {
        for proc in &self.procedures {
            proc.for_each_statement(|s| f(proc, s));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    pub name: Name,
    pub body: Vec<Statement>,
}

impl Procedure {
    pub fn new(name: impl Into<Name>, body: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Pre-order walk: a container is visited before its nested statements
    pub fn for_each_statement<'a>(&'a self, mut f: impl FnMut(&'a Statement)) {
        fn walk<'a>(list: &'a [Statement], f: &mut impl FnMut(&'a Statement)) {
            for stmt in list {
                f(stmt);
                for child in stmt.kind.child_lists() {
                    walk(child, f);
                }
            }
        }
        walk(&self.body, &mut f);
    }

    /// Smallest and largest statement number in the body
    pub fn line_range(&self) -> Option<(StatementNumber, StatementNumber)> {
        let mut range: Option<(StatementNumber, StatementNumber)> = None;
        self.for_each_statement(|s| {
            range = Some(match range {
                None => (s.number, s.number),
                Some((lo, hi)) => (lo.min(s.number), hi.max(s.number)),
            });
        });
        range
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub number: StatementNumber,
    pub kind: StatementKind,
}

impl Statement {
    pub fn new(number: StatementNumber, kind: StatementKind) -> Self {
        Self { number, kind }
    }

    pub fn statement_type(&self) -> StatementType {
        self.kind.statement_type()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Read(Name),
    Print(Name),
    Call(Name),
    Assign {
        target: Name,
        expr: Expr,
    },
    While {
        cond: CondExpr,
        body: Vec<Statement>,
    },
    If {
        cond: CondExpr,
        then_branch: Vec<Statement>,
        else_branch: Vec<Statement>,
    },
}

impl StatementKind {
    pub fn statement_type(&self) -> StatementType {
        match self {
            StatementKind::Read(_) => StatementType::Read,
            StatementKind::Print(_) => StatementType::Print,
            StatementKind::Call(_) => StatementType::Call,
            StatementKind::Assign { .. } => StatementType::Assign,
            StatementKind::While { .. } => StatementType::While,
            StatementKind::If { .. } => StatementType::If,
        }
    }

    /// Nested statement lists (empty for simple statements)
    pub fn child_lists(&self) -> Vec<&[Statement]> {
        match self {
            StatementKind::While { body, .. } => vec![body.as_slice()],
            StatementKind::If {
                then_branch,
                else_branch,
                ..
            } => vec![then_branch.as_slice(), else_branch.as_slice()],
            _ => Vec::new(),
        }
    }

    /// Variables this statement directly uses (nested statements excluded)
    pub fn used_variables(&self) -> Vec<&str> {
        let mut out = Vec::new();
        match self {
            StatementKind::Print(v) => out.push(v.as_str()),
            StatementKind::Assign { expr, .. } => expr.collect_variables(&mut out),
            StatementKind::While { cond, .. } | StatementKind::If { cond, .. } => {
                cond.collect_variables(&mut out)
            }
            StatementKind::Read(_) | StatementKind::Call(_) => {}
        }
        out
    }

    /// Variable this statement directly modifies, if any
    pub fn modified_variable(&self) -> Option<&str> {
        match self {
            StatementKind::Read(v) => Some(v.as_str()),
            StatementKind::Assign { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }

    /// Integer literals this statement directly mentions
    pub fn constants(&self) -> Vec<i64> {
        let mut out = Vec::new();
        match self {
            StatementKind::Assign { expr, .. } => expr.collect_constants(&mut out),
            StatementKind::While { cond, .. } | StatementKind::If { cond, .. } => {
                cond.collect_constants(&mut out)
            }
            _ => {}
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    Var(Name),
    Const(i64),
    Binary(ArithmeticOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<Name>) -> Self {
        Expr::Var(name.into())
    }

    pub fn binary(op: ArithmeticOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Variables in left-to-right order, repeats included
    pub fn collect_variables<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Var(v) => out.push(v),
            Expr::Const(_) => {}
            Expr::Binary(_, lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
        }
    }

    pub fn collect_constants(&self, out: &mut Vec<i64>) {
        match self {
            Expr::Var(_) => {}
            Expr::Const(c) => out.push(*c),
            Expr::Binary(_, lhs, rhs) => {
                lhs.collect_constants(out);
                rhs.collect_constants(out);
            }
        }
    }

    /// True if `needle` occurs as a subtree of this expression
    pub fn contains(&self, needle: &Expr) -> bool {
        if self == needle {
            return true;
        }
        match self {
            Expr::Binary(_, lhs, rhs) => lhs.contains(needle) || rhs.contains(needle),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationalOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CondExpr {
    Rel(RelationalOp, Expr, Expr),
    Not(Box<CondExpr>),
    And(Box<CondExpr>, Box<CondExpr>),
    Or(Box<CondExpr>, Box<CondExpr>),
}

impl CondExpr {
    pub fn collect_variables<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            CondExpr::Rel(_, lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
            CondExpr::Not(inner) => inner.collect_variables(out),
            CondExpr::And(lhs, rhs) | CondExpr::Or(lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
        }
    }

    pub fn collect_constants(&self, out: &mut Vec<i64>) {
        match self {
            CondExpr::Rel(_, lhs, rhs) => {
                lhs.collect_constants(out);
                rhs.collect_constants(out);
            }
            CondExpr::Not(inner) => inner.collect_constants(out),
            CondExpr::And(lhs, rhs) | CondExpr::Or(lhs, rhs) => {
                lhs.collect_constants(out);
                rhs.collect_constants(out);
            }
        }
    }
}
