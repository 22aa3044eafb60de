//! # Typology Model
//!
//! Value types shared by every engine in the crate: axes, type codes,
//! function labels and stacks.
//!
//! Design rule: this module is pure data. Parsing and validation live
//! here; derivation rules live in `stack`, `shadow`, `inference` and
//! `socionics`.

pub mod axis;
pub mod type_code;
pub mod function;
pub mod stack;

pub use axis::{flip, Axis, AxisSet};
pub use type_code::{Lifestyle, TypeCode};
pub use function::{Attitude, CognitiveFunction, FunctionKind, FunctionLetter};
pub use stack::{CognitiveStack, StackPosition};
