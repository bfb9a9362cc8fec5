//! Shared models

pub mod ast;
mod statement;

pub use ast::{
    ArithmeticOp, CondExpr, Expr, Procedure, Program, RelationalOp, Statement, StatementKind,
};
pub use statement::{StatementNumber, StatementType};

/// Name of a variable or procedure
pub type Name = String;
