//! Entity tables: statements, variables, constants, procedures

use crate::shared::{DedupList, Name, StatementNumber, StatementType};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Statement number -> type, plus per-type listings
#[derive(Debug, Clone, Default)]
pub struct StatementTable {
    types: FxHashMap<StatementNumber, StatementType>,
    by_type: FxHashMap<StatementType, DedupList<StatementNumber>>,
    /// Callee of a call, variable of a read/print
    names: FxHashMap<StatementNumber, Name>,
}

impl StatementTable {
    /// # Panics
    /// If `ty` is the wildcard sentinel.
    pub fn add(&mut self, number: StatementNumber, ty: StatementType) {
        assert!(!ty.is_any(), "statement {} needs a concrete type", number);
        self.types.insert(number, ty);
        self.by_type.entry(ty).or_default().insert(number);
        self.by_type
            .entry(StatementType::Any)
            .or_default()
            .insert(number);
    }

    pub fn set_name(&mut self, number: StatementNumber, name: impl Into<Name>) {
        self.names.insert(number, name.into());
    }

    pub fn type_of(&self, number: StatementNumber) -> Option<StatementType> {
        self.types.get(&number).copied()
    }

    pub fn contains(&self, number: StatementNumber) -> bool {
        self.types.contains_key(&number)
    }

    /// True if `number` exists and matches `ty` (`Any` matches every statement)
    pub fn is_of_type(&self, number: StatementNumber, ty: StatementType) -> bool {
        self.type_of(number)
            .is_some_and(|actual| ty.is_any() || actual == ty)
    }

    /// Statements of a type in program order
    pub fn all(&self, ty: StatementType) -> &[StatementNumber] {
        self.by_type
            .get(&ty)
            .map(DedupList::as_slice)
            .unwrap_or(&[])
    }

    /// `call.procName`, `read.varName`, `print.varName`
    pub fn name_of(&self, number: StatementNumber) -> Option<&str> {
        self.names.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Variables in order of first appearance
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    names: DedupList<Name>,
}

impl VariableTable {
    pub fn add(&mut self, name: impl Into<Name>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_string())
    }

    pub fn all(&self) -> &[Name] {
        self.names.as_slice()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Integer literals, ascending
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    values: BTreeSet<i64>,
}

impl ConstantTable {
    pub fn add(&mut self, value: i64) -> bool {
        self.values.insert(value)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    pub fn all(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Procedure name -> [first statement, last statement]
#[derive(Debug, Clone, Default)]
pub struct ProcedureTable {
    names: DedupList<Name>,
    ranges: FxHashMap<Name, (StatementNumber, StatementNumber)>,
}

impl ProcedureTable {
    pub fn add(&mut self, name: impl Into<Name>, first: StatementNumber, last: StatementNumber) {
        let name = name.into();
        self.names.insert(name.clone());
        self.ranges.insert(name, (first, last));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ranges.contains_key(name)
    }

    pub fn range(&self, name: &str) -> Option<(StatementNumber, StatementNumber)> {
        self.ranges.get(name).copied()
    }

    /// Procedure whose line range contains `number`
    pub fn procedure_of(&self, number: StatementNumber) -> Option<&str> {
        self.names.iter().map(String::as_str).find(|name| {
            self.range(name)
                .is_some_and(|(first, last)| first <= number && number <= last)
        })
    }

    /// Names in declaration order
    pub fn all(&self) -> &[Name] {
        self.names.as_slice()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
