//! # Socionics intertype relations
//!
//! The relation between two types is a pure function of their
//! [`RelationSignature`]: which axes differ, plus the P/J status of each
//! side. Signatures resolve through a fixed rule table:
//!
//! ```text
//!  altered      condition            relation
//!  ─────────    ─────────────────    ────────────────────────────
//!  {}           -                    Identity
//!  {1}          -                    Contrary
//!  {4}          -                    Quasi-Identical
//!  {2,3}        -                    Super-Ego
//!  {2,3,4}      -                    Activity
//!  {1,2,3,4}    -                    Conflict
//!  {1,4}        -                    Mirror
//!  {1,2,3}      -                    Duality
//!  {2}          a = p | a = j        Look-a-Like | Comparative
//!  {3}          a = p | a = j        Comparative | Look-a-Like
//!  {1,2}        a = p | a = j        Semi-Duality | Illusionary
//!  {1,3}        a = p | a = j        Illusionary | Semi-Duality
//!  {1,2,4}      p→j | j→p            Supervisor | Supervisee
//!  {1,3,4}      j→p | p→j            Supervisor | Supervisee
//!  {2,4}        j→p | p→j            Benefactor | Beneficiary
//!  {3,4}        p→j | j→p            Benefactor | Beneficiary
//! ```
//!
//! Supervision and benefit are directional: `relation(a, b)` and
//! `relation(b, a)` name the two ends of the same relation.

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{AxisSet, Lifestyle, TypeCode};

// ============================================================================
// Relation names
// ============================================================================

/// The 14 classical intertype relations. Supervision and benefit each
/// have two named ends, giving 16 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    Identity,
    Contrary,
    #[serde(rename = "Quasi-Identical")]
    QuasiIdentical,
    #[serde(rename = "Super-Ego")]
    SuperEgo,
    Activity,
    Conflict,
    Mirror,
    Duality,
    #[serde(rename = "Look-a-Like")]
    LookALike,
    Comparative,
    #[serde(rename = "Semi-Duality")]
    SemiDuality,
    Illusionary,
    Supervisor,
    Supervisee,
    Benefactor,
    Beneficiary,
}

impl Relation {
    pub const ALL: [Relation; 16] = [
        Relation::Identity,
        Relation::Contrary,
        Relation::QuasiIdentical,
        Relation::SuperEgo,
        Relation::Activity,
        Relation::Conflict,
        Relation::Mirror,
        Relation::Duality,
        Relation::LookALike,
        Relation::Comparative,
        Relation::SemiDuality,
        Relation::Illusionary,
        Relation::Supervisor,
        Relation::Supervisee,
        Relation::Benefactor,
        Relation::Beneficiary,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Relation::Identity => "Identity",
            Relation::Contrary => "Contrary",
            Relation::QuasiIdentical => "Quasi-Identical",
            Relation::SuperEgo => "Super-Ego",
            Relation::Activity => "Activity",
            Relation::Conflict => "Conflict",
            Relation::Mirror => "Mirror",
            Relation::Duality => "Duality",
            Relation::LookALike => "Look-a-Like",
            Relation::Comparative => "Comparative",
            Relation::SemiDuality => "Semi-Duality",
            Relation::Illusionary => "Illusionary",
            Relation::Supervisor => "Supervisor",
            Relation::Supervisee => "Supervisee",
            Relation::Benefactor => "Benefactor",
            Relation::Beneficiary => "Beneficiary",
        }
    }

    /// The relation as seen from the other side.
    pub const fn converse(self) -> Relation {
        match self {
            Relation::Supervisor => Relation::Supervisee,
            Relation::Supervisee => Relation::Supervisor,
            Relation::Benefactor => Relation::Beneficiary,
            Relation::Beneficiary => Relation::Benefactor,
            other => other,
        }
    }

    /// True for the four relation ends whose meaning depends on direction.
    pub const fn is_directional(self) -> bool {
        matches!(
            self,
            Relation::Supervisor | Relation::Supervisee | Relation::Benefactor | Relation::Beneficiary
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Signature and rules
// ============================================================================

/// Everything the rule table looks at for an ordered pair of types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RelationSignature {
    pub altered: AxisSet,
    pub pj_a: Lifestyle,
    pub pj_b: Lifestyle,
}

impl RelationSignature {
    pub fn between(a: &TypeCode, b: &TypeCode) -> Self {
        Self {
            altered: a.altered_axes(b),
            pj_a: a.lifestyle(),
            pj_b: b.lifestyle(),
        }
    }
}

/// Extra P/J condition a rule places on a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PjCondition {
    Any,
    /// P/J of the first type only.
    First(Lifestyle),
    /// Ordered P/J pair (first, second).
    Pair(Lifestyle, Lifestyle),
}

impl PjCondition {
    pub fn matches(self, pj_a: Lifestyle, pj_b: Lifestyle) -> bool {
        match self {
            PjCondition::Any => true,
            PjCondition::First(a) => a == pj_a,
            PjCondition::Pair(a, b) => a == pj_a && b == pj_b,
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationRule {
    pub altered: AxisSet,
    pub when: PjCondition,
    pub relation: Relation,
}

impl RelationRule {
    const fn new(altered: &[u8], when: PjCondition, relation: Relation) -> Self {
        Self { altered: AxisSet::of(altered), when, relation }
    }

    pub fn matches(&self, signature: &RelationSignature) -> bool {
        self.altered == signature.altered && self.when.matches(signature.pj_a, signature.pj_b)
    }
}

use Lifestyle::{Judging as J, Perceiving as P};
use PjCondition::{Any, First, Pair};

/// The rule table. At most one rule matches any signature.
pub const RULES: [RelationRule; 24] = [
    RelationRule::new(&[], Any, Relation::Identity),
    RelationRule::new(&[1], Any, Relation::Contrary),
    RelationRule::new(&[4], Any, Relation::QuasiIdentical),
    RelationRule::new(&[2, 3], Any, Relation::SuperEgo),
    RelationRule::new(&[2, 3, 4], Any, Relation::Activity),
    RelationRule::new(&[1, 2, 3, 4], Any, Relation::Conflict),
    RelationRule::new(&[1, 4], Any, Relation::Mirror),
    RelationRule::new(&[1, 2, 3], Any, Relation::Duality),
    RelationRule::new(&[2], First(P), Relation::LookALike),
    RelationRule::new(&[2], First(J), Relation::Comparative),
    RelationRule::new(&[3], First(P), Relation::Comparative),
    RelationRule::new(&[3], First(J), Relation::LookALike),
    RelationRule::new(&[1, 2], First(P), Relation::SemiDuality),
    RelationRule::new(&[1, 2], First(J), Relation::Illusionary),
    RelationRule::new(&[1, 3], First(P), Relation::Illusionary),
    RelationRule::new(&[1, 3], First(J), Relation::SemiDuality),
    RelationRule::new(&[1, 2, 4], Pair(P, J), Relation::Supervisor),
    RelationRule::new(&[1, 2, 4], Pair(J, P), Relation::Supervisee),
    RelationRule::new(&[1, 3, 4], Pair(J, P), Relation::Supervisor),
    RelationRule::new(&[1, 3, 4], Pair(P, J), Relation::Supervisee),
    RelationRule::new(&[2, 4], Pair(J, P), Relation::Benefactor),
    RelationRule::new(&[2, 4], Pair(P, J), Relation::Beneficiary),
    RelationRule::new(&[3, 4], Pair(P, J), Relation::Benefactor),
    RelationRule::new(&[3, 4], Pair(J, P), Relation::Beneficiary),
];

/// Resolve a signature against the rule table.
pub fn resolve(signature: &RelationSignature) -> Option<Relation> {
    RULES.iter().find(|rule| rule.matches(signature)).map(|rule| rule.relation)
}

/// The relation of `a` towards `b`, or `None` when no rule applies.
pub fn relation(a: &TypeCode, b: &TypeCode) -> Option<Relation> {
    let signature = RelationSignature::between(a, b);
    let found = resolve(&signature);
    match found {
        Some(rel) => debug!(%a, %b, altered = %signature.altered, relation = %rel, "resolved relation"),
        None => warn!(%a, %b, altered = %signature.altered, "no relation rule matched"),
    }
    found
}

/// String-level entry. Anything that is not one of the 16 types yields
/// `None` rather than an error, keeping the query total.
pub fn relation_str(a: &str, b: &str) -> Option<Relation> {
    let (Ok(a), Ok(b)) = (TypeCode::parse(a), TypeCode::parse(b)) else {
        debug!(a, b, "relation requested for unknown type");
        return None;
    };
    relation(&a, &b)
}

// ============================================================================
// Materialized table
// ============================================================================

/// Every realizable signature mapped to its relation, built by walking
/// all 256 ordered type pairs. Useful for batch lookups and for
/// checking that the rule table covers the whole domain.
#[derive(Debug, Clone)]
pub struct RelationTable {
    entries: HashMap<RelationSignature, Option<Relation>>,
}

impl RelationTable {
    pub fn build() -> Self {
        let mut entries = HashMap::new();
        for a in TypeCode::ALL {
            for b in TypeCode::ALL {
                let signature = RelationSignature::between(&a, &b);
                entries.entry(signature).or_insert_with(|| resolve(&signature));
            }
        }
        debug!(signatures = entries.len(), "built relation table");
        Self { entries }
    }

    pub fn get(&self, a: &TypeCode, b: &TypeCode) -> Option<Relation> {
        self.entries
            .get(&RelationSignature::between(a, b))
            .copied()
            .flatten()
    }

    /// Number of distinct realizable signatures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RelationSignature, &Option<Relation>)> {
        self.entries.iter()
    }

    /// Signatures no rule resolves.
    pub fn unresolved(&self) -> Vec<RelationSignature> {
        self.entries
            .iter()
            .filter(|(_, rel)| rel.is_none())
            .map(|(sig, _)| *sig)
            .collect()
    }
}

// ============================================================================
// Socionics type codes
// ============================================================================

/// Socionics codes, aligned index-for-index with [`TypeCode::ALL`].
const SOCIONICS_CODES: [&str; 16] = [
    "EIE", "IEE", "LIE", "ILE", // ENFJ ENFP ENTJ ENTP
    "ESE", "SEE", "LSE", "SLE", // ESFJ ESFP ESTJ ESTP
    "IEI", "EII", "ILI", "LII", // INFJ INFP INTJ INTP
    "ESI", "SEI", "LSI", "SLI", // ISFJ ISFP ISTJ ISTP
];

/// Three-letter Socionics code of a type (INFJ → IEI).
///
/// Every valid [`TypeCode`] has a code; `None` only signals a type
/// missing from the table.
pub fn socionics_code(code: &TypeCode) -> Option<&'static str> {
    TypeCode::ALL
        .iter()
        .position(|t| t == code)
        .map(|i| SOCIONICS_CODES[i])
}

/// String-level lookup; `None` for anything outside the 16 types.
pub fn socionics_code_str(code: &str) -> Option<&'static str> {
    TypeCode::parse(code).ok().and_then(|code| socionics_code(&code))
}
