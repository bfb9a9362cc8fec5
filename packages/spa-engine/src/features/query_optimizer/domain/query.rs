//! Abstract query model
//!
//! What the query preprocessor hands over: declared synonyms, the selected
//! result, and typed clauses. One closed enum per concept, so an unknown
//! clause or relationship kind cannot reach the optimizer.

use crate::shared::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignEntityType {
    Stmt,
    Read,
    Print,
    Call,
    While,
    If,
    Assign,
    ProgLine,
    Variable,
    Constant,
    Procedure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    ProcName,
    VarName,
    Value,
    StmtNumber,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::ProcName => "procName",
            AttributeType::VarName => "varName",
            AttributeType::Value => "value",
            AttributeType::StmtNumber => "stmt#",
        }
    }
}

/// A name bound to a declared entity type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Synonym {
    pub name: String,
    pub entity: DesignEntityType,
}

impl Synonym {
    pub fn new(name: impl Into<String>, entity: DesignEntityType) -> Self {
        Self {
            name: name.into(),
            entity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    Synonym(Synonym),
    Attribute(Synonym, AttributeType),
    Wildcard,
    Integer(i64),
    Name(String),
}

impl Reference {
    /// Synonym behind a synonym or attribute reference
    pub fn synonym(&self) -> Option<&Synonym> {
        match self {
            Reference::Synonym(s) | Reference::Attribute(s, _) => Some(s),
            _ => None,
        }
    }

    pub fn has_synonym(&self) -> bool {
        self.synonym().is_some()
    }

    /// Integer or name literal
    pub fn is_value(&self) -> bool {
        matches!(self, Reference::Integer(_) | Reference::Name(_))
    }

    /// `read.varName`, `print.varName` and `call.procName` name something
    /// other than the statement itself, so a literal for them says nothing
    /// about the synonym's own value.
    fn is_indirect_attribute(&self) -> bool {
        matches!(
            self,
            Reference::Attribute(
                Synonym {
                    entity: DesignEntityType::Read | DesignEntityType::Print,
                    ..
                },
                AttributeType::VarName
            ) | Reference::Attribute(
                Synonym {
                    entity: DesignEntityType::Call,
                    ..
                },
                AttributeType::ProcName
            )
        )
    }

    /// May `with <self> = literal` fix this synonym everywhere?
    pub fn can_initiate_substitution(&self) -> bool {
        match self {
            Reference::Synonym(s) => s.entity == DesignEntityType::ProgLine,
            Reference::Attribute(..) => !self.is_indirect_attribute(),
            _ => false,
        }
    }

    /// May this reference be replaced by a literal fixed elsewhere?
    pub fn can_be_substituted(&self) -> bool {
        match self {
            Reference::Synonym(_) => true,
            Reference::Attribute(..) => !self.is_indirect_attribute(),
            _ => false,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Synonym(s) => write!(f, "{}", s.name),
            Reference::Attribute(s, attr) => write!(f, "{}.{}", s.name, attr.as_str()),
            Reference::Wildcard => write!(f, "_"),
            Reference::Integer(v) => write!(f, "{}", v),
            Reference::Name(n) => write!(f, "\"{}\"", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    Follows,
    FollowsStar,
    Parent,
    ParentStar,
    UsesStatement,
    UsesProcedure,
    ModifiesStatement,
    ModifiesProcedure,
    Calls,
    CallsStar,
    Next,
    NextStar,
    NextBip,
    NextBipStar,
    Affects,
    AffectsStar,
    AffectsBip,
    AffectsBipStar,
}

impl RelationshipKind {
    pub const ALL: [RelationshipKind; 18] = [
        RelationshipKind::Follows,
        RelationshipKind::FollowsStar,
        RelationshipKind::Parent,
        RelationshipKind::ParentStar,
        RelationshipKind::UsesStatement,
        RelationshipKind::UsesProcedure,
        RelationshipKind::ModifiesStatement,
        RelationshipKind::ModifiesProcedure,
        RelationshipKind::Calls,
        RelationshipKind::CallsStar,
        RelationshipKind::Next,
        RelationshipKind::NextStar,
        RelationshipKind::NextBip,
        RelationshipKind::NextBipStar,
        RelationshipKind::Affects,
        RelationshipKind::AffectsStar,
        RelationshipKind::AffectsBip,
        RelationshipKind::AffectsBipStar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Follows => "Follows",
            RelationshipKind::FollowsStar => "Follows*",
            RelationshipKind::Parent => "Parent",
            RelationshipKind::ParentStar => "Parent*",
            RelationshipKind::UsesStatement | RelationshipKind::UsesProcedure => "Uses",
            RelationshipKind::ModifiesStatement | RelationshipKind::ModifiesProcedure => "Modifies",
            RelationshipKind::Calls => "Calls",
            RelationshipKind::CallsStar => "Calls*",
            RelationshipKind::Next => "Next",
            RelationshipKind::NextStar => "Next*",
            RelationshipKind::NextBip => "NextBip",
            RelationshipKind::NextBipStar => "NextBip*",
            RelationshipKind::Affects => "Affects",
            RelationshipKind::AffectsStar => "Affects*",
            RelationshipKind::AffectsBip => "AffectsBip",
            RelationshipKind::AffectsBipStar => "AffectsBip*",
        }
    }
}

/// Right-hand side of an assign pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionSpec {
    /// `_`
    Any,
    /// `"x + 1"`
    Exact(Expr),
    /// `_"x + 1"_`
    Partial(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    Assign(ExpressionSpec),
    If,
    While,
}

/// `pattern a(entity_ref, ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternClause {
    pub kind: PatternKind,
    pub synonym: Synonym,
    pub entity_ref: Reference,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clause {
    SuchThat {
        relationship: RelationshipKind,
        left: Reference,
        right: Reference,
    },
    Pattern(PatternClause),
    With {
        left: Reference,
        right: Reference,
    },
}

impl Clause {
    pub fn such_that(relationship: RelationshipKind, left: Reference, right: Reference) -> Self {
        Clause::SuchThat {
            relationship,
            left,
            right,
        }
    }

    pub fn with(left: Reference, right: Reference) -> Self {
        Clause::With { left, right }
    }

    pub fn pattern(kind: PatternKind, synonym: Synonym, entity_ref: Reference) -> Self {
        Clause::Pattern(PatternClause {
            kind,
            synonym,
            entity_ref,
        })
    }

    /// Distinct synonym names, in order of appearance
    pub fn synonyms(&self) -> Vec<&str> {
        let refs: [Option<&Synonym>; 2] = match self {
            Clause::SuchThat { left, right, .. } | Clause::With { left, right } => {
                [left.synonym(), right.synonym()]
            }
            Clause::Pattern(p) => [Some(&p.synonym), p.entity_ref.synonym()],
        };
        let mut out: Vec<&str> = Vec::with_capacity(2);
        for s in refs.into_iter().flatten() {
            if !out.contains(&s.name.as_str()) {
                out.push(s.name.as_str());
            }
        }
        out
    }

    pub fn has_synonym(&self) -> bool {
        !self.synonyms().is_empty()
    }

    /// Synonym-carrying references (a repeated synonym counts twice)
    pub fn synonym_count(&self) -> usize {
        match self {
            Clause::SuchThat { left, right, .. } | Clause::With { left, right } => {
                usize::from(left.has_synonym()) + usize::from(right.has_synonym())
            }
            Clause::Pattern(p) => 1 + usize::from(p.entity_ref.has_synonym()),
        }
    }

    pub fn shares_synonym(&self, other: &Clause) -> bool {
        let mine = self.synonyms();
        other.synonyms().iter().any(|s| mine.contains(s))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::SuchThat {
                relationship,
                left,
                right,
            } => write!(f, "such that {}({}, {})", relationship.as_str(), left, right),
            Clause::Pattern(p) => write!(f, "pattern {}({}, ...)", p.synonym.name, p.entity_ref),
            Clause::With { left, right } => write!(f, "with {} = {}", left, right),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractQuery {
    /// Synonyms in the select clause (empty for `Select BOOLEAN`)
    pub selected: Vec<Synonym>,
    pub clauses: Vec<Clause>,
}

impl AbstractQuery {
    pub fn new(selected: Vec<Synonym>, clauses: Vec<Clause>) -> Self {
        Self { selected, clauses }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syn(name: &str, entity: DesignEntityType) -> Reference {
        Reference::Synonym(Synonym::new(name, entity))
    }

    #[test]
    fn test_synonym_extraction() {
        let clause = Clause::such_that(
            RelationshipKind::Follows,
            syn("s", DesignEntityType::Stmt),
            syn("s", DesignEntityType::Stmt),
        );
        assert_eq!(clause.synonyms(), vec!["s"]);
        assert_eq!(clause.synonym_count(), 2);

        let pattern = Clause::pattern(
            PatternKind::Assign(ExpressionSpec::Any),
            Synonym::new("a", DesignEntityType::Assign),
            syn("v", DesignEntityType::Variable),
        );
        assert_eq!(pattern.synonyms(), vec!["a", "v"]);
        assert_eq!(pattern.synonym_count(), 2);

        let literal = Clause::with(Reference::Integer(1), Reference::Integer(1));
        assert!(!literal.has_synonym());
        assert_eq!(literal.synonym_count(), 0);
    }

    #[test]
    fn test_shares_synonym() {
        let a = Clause::such_that(
            RelationshipKind::Parent,
            syn("w", DesignEntityType::While),
            syn("s", DesignEntityType::Stmt),
        );
        let b = Clause::with(
            Reference::Attribute(Synonym::new("s", DesignEntityType::Stmt), AttributeType::StmtNumber),
            Reference::Integer(3),
        );
        let c = Clause::such_that(RelationshipKind::Next, Reference::Wildcard, Reference::Integer(2));
        assert!(a.shares_synonym(&b));
        assert!(!a.shares_synonym(&c));
    }

    #[test]
    fn test_substitution_rules() {
        let prog_line = syn("n", DesignEntityType::ProgLine);
        let stmt = syn("s", DesignEntityType::Stmt);
        let stmt_no = Reference::Attribute(
            Synonym::new("s", DesignEntityType::Stmt),
            AttributeType::StmtNumber,
        );
        let call_proc = Reference::Attribute(
            Synonym::new("c", DesignEntityType::Call),
            AttributeType::ProcName,
        );
        let read_var = Reference::Attribute(
            Synonym::new("r", DesignEntityType::Read),
            AttributeType::VarName,
        );

        assert!(prog_line.can_initiate_substitution());
        assert!(!stmt.can_initiate_substitution());
        assert!(stmt_no.can_initiate_substitution());
        assert!(!call_proc.can_initiate_substitution());
        assert!(!read_var.can_initiate_substitution());

        assert!(stmt.can_be_substituted());
        assert!(stmt_no.can_be_substituted());
        assert!(!call_proc.can_be_substituted());
        assert!(!Reference::Wildcard.can_be_substituted());
    }

    #[test]
    fn test_display() {
        let clause = Clause::with(
            Reference::Attribute(Synonym::new("p", DesignEntityType::Procedure), AttributeType::ProcName),
            Reference::Name("main".into()),
        );
        assert_eq!(clause.to_string(), "with p.procName = \"main\"");
    }
}
