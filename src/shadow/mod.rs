//! Function roles and shadow types.
//!
//! Every role is a flip pattern over the four axes:
//!
//! | Role         | Flipped axes | INFJ → |
//! |--------------|--------------|--------|
//! | Ego          | (none)       | INFJ   |
//! | Subconscious | 1, 2, 3, 4   | ESTP   |
//! | Unconscious  | 1, 4         | ENFP   |
//! | Superego     | 2, 3         | ISTJ   |
//!
//! The three non-ego roles are the shadow modes. Each pattern is an
//! involution: applying it twice returns the original type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cognition::derive_stack;
use crate::model::{AxisSet, CognitiveStack, TypeCode};
use crate::{Error, Result};

/// One of the four function roles of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionRole {
    Ego,
    Subconscious,
    Unconscious,
    Superego,
}

impl FunctionRole {
    pub const ALL: [FunctionRole; 4] = [
        FunctionRole::Ego,
        FunctionRole::Subconscious,
        FunctionRole::Unconscious,
        FunctionRole::Superego,
    ];

    /// The shadow modes, i.e. every role except ego.
    pub const SHADOWS: [FunctionRole; 3] = [
        FunctionRole::Subconscious,
        FunctionRole::Unconscious,
        FunctionRole::Superego,
    ];

    pub const fn flip_axes(self) -> AxisSet {
        match self {
            FunctionRole::Ego => AxisSet::EMPTY,
            FunctionRole::Subconscious => AxisSet::FULL,
            FunctionRole::Unconscious => AxisSet::of(&[1, 4]),
            FunctionRole::Superego => AxisSet::of(&[2, 3]),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FunctionRole::Ego => "ego",
            FunctionRole::Subconscious => "subconscious",
            FunctionRole::Unconscious => "unconscious",
            FunctionRole::Superego => "superego",
        }
    }

    /// Capitalized name for reports ("Subconscious").
    pub const fn title(self) -> &'static str {
        match self {
            FunctionRole::Ego => "Ego",
            FunctionRole::Subconscious => "Subconscious",
            FunctionRole::Unconscious => "Unconscious",
            FunctionRole::Superego => "Superego",
        }
    }

    pub const fn is_shadow(self) -> bool {
        !matches!(self, FunctionRole::Ego)
    }

    /// Parse a shadow mode name. Ego is a role but not a shadow mode.
    pub fn parse_shadow_mode(input: &str) -> Result<FunctionRole> {
        match input.parse::<FunctionRole>() {
            Ok(role) if role.is_shadow() => Ok(role),
            _ => Err(Error::UnknownShadowMode(input.to_string())),
        }
    }
}

impl fmt::Display for FunctionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        FunctionRole::ALL
            .into_iter()
            .find(|role| role.name() == wanted)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// The type a role resolves to.
pub fn derive_shadow(code: &TypeCode, role: FunctionRole) -> TypeCode {
    let shadow = code.flipped(role.flip_axes());
    debug!(%code, %role, %shadow, "derived role type");
    shadow
}

/// String-level entry: validates both the type code and the mode name.
pub fn derive_shadow_str(code: &str, mode: &str) -> Result<TypeCode> {
    let code = TypeCode::parse(code)?;
    let role = FunctionRole::parse_shadow_mode(mode)?;
    Ok(derive_shadow(&code, role))
}

// ============================================================================
// Function roles report
// ============================================================================

/// A role together with the type it resolves to and that type's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStack {
    pub role: FunctionRole,
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub stack: CognitiveStack,
}

/// All four role stacks of a type, in `FunctionRole::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRoles {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub roles: [RoleStack; 4],
}

impl FunctionRoles {
    pub fn get(&self, role: FunctionRole) -> &RoleStack {
        // ALL order matches the enum discriminants
        &self.roles[role as usize]
    }

    pub fn ego(&self) -> &CognitiveStack {
        &self.get(FunctionRole::Ego).stack
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleStack> {
        self.roles.iter()
    }
}

/// Derive the ego, subconscious, unconscious and superego stacks of a type.
pub fn function_roles(code: &TypeCode) -> FunctionRoles {
    let roles = FunctionRole::ALL.map(|role| {
        let type_code = derive_shadow(code, role);
        RoleStack { role, type_code, stack: derive_stack(&type_code) }
    });
    FunctionRoles { type_code: *code, roles }
}
