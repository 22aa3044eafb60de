//! # eidon — Cognitive Function Typology
//!
//! Cognitive-function stacks, shadow types and Socionics intertype
//! relations for the 16 four-letter (MBTI-style) types.
//!
//! ## Design Principles
//!
//! 1. **Validated values**: `TypeCode`, `CognitiveFunction` and
//!    `CognitiveStack` can only hold valid data; parsing normalizes case
//! 2. **Pure engines**: derivation, inference and relation lookup are
//!    referentially transparent functions over fixed tables
//! 3. **Tables over branches**: function roles are flip patterns, relations
//!    are rows of a rule table
//! 4. **Total where it matters**: relation queries answer `None` instead of
//!    failing; everything else rejects invalid input with an `Error`
//!
//! ## Quick Start
//!
//! ```rust
//! use eidon::{derive_stack, infer_type_str, relation_str, Relation, TypeCode};
//!
//! # fn example() -> eidon::Result<()> {
//! let infj = TypeCode::parse("infj")?;
//! assert_eq!(derive_stack(&infj).to_string(), "Ni-Fe-Ti-Se");
//!
//! let guess = infer_type_str(&["Ni", "Fe", "Se", "Ti"])?;
//! assert_eq!(guess.type_code, infj);
//! assert_eq!(guess.confidence, 70.0);
//!
//! assert_eq!(relation_str("INFJ", "ESTJ"), Some(Relation::Duality));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Engines
//!
//! | Module | Operation |
//! |--------|-----------|
//! | `cognition` | type code → dominant/auxiliary/tertiary/inferior stack |
//! | `shadow` | type code × role → related type (ego, subconscious, unconscious, superego) |
//! | `inference` | arbitrary stack → best-matching type with confidence |
//! | `socionics` | ordered type pair → intertype relation |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod cognition;
pub mod shadow;
pub mod inference;
pub mod socionics;
pub mod config;
pub mod analysis;
pub mod report;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    flip, Attitude, Axis, AxisSet, CognitiveFunction, CognitiveStack,
    FunctionKind, FunctionLetter, Lifestyle, StackPosition, TypeCode,
};

// ============================================================================
// Re-exports: Engines
// ============================================================================

pub use cognition::{canonical_table, derive_stack, derive_stack_str};
pub use shadow::{
    derive_shadow, derive_shadow_str, function_roles,
    FunctionRole, FunctionRoles, RoleStack,
};
pub use inference::{infer_type, infer_type_str, weighted_score, Inference, MAX_SCORE};
pub use socionics::{
    relation, relation_str, socionics_code, socionics_code_str,
    Relation, RelationSignature, RelationTable,
};

// ============================================================================
// Re-exports: Analysis
// ============================================================================

pub use config::{AnalysisConfig, OutputFormat};
pub use analysis::{analyze, Comparison, RoleReport, TypeAnalysis};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid type code '{code}': {reason}")]
    InvalidTypeCode { code: String, reason: String },

    #[error("Invalid function: {0}")]
    InvalidFunction(String),

    #[error("Stack must have 4 functions (got {0})")]
    InvalidStackLength(usize),

    #[error("Invalid axis letter: '{0}'")]
    InvalidAxisLetter(char),

    #[error("Unknown shadow mode: {0}")]
    UnknownShadowMode(String),

    #[error("Unknown function role: {0}")]
    UnknownRole(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
