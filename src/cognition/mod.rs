//! Cognitive stack derivation.
//!
//! Maps a type code to its dominant → inferior function stack:
//!
//! ```text
//!              J                         P
//!   I   dom = Ni/Si  aux = Te/Fe    dom = Ti/Fi  aux = Ne/Se
//!   E   dom = Te/Fe  aux = Ni/Si    dom = Ne/Se  aux = Ti/Fi
//!
//!   tertiary = complement(aux)      inferior = complement(dom)
//! ```
//!
//! where `complement` keeps the function kind and flips both the letter
//! and the attitude (Fe → Ti, Ni → Se).

use tracing::trace;

use crate::model::{Attitude, Axis, CognitiveFunction, CognitiveStack, FunctionLetter, TypeCode};

/// Derive the canonical stack of a type.
pub fn derive_stack(code: &TypeCode) -> CognitiveStack {
    let perception = perception_letter(code);
    let judgment = judgment_letter(code);

    let (dominant, auxiliary) = match (code.is_introverted(), code.is_judging()) {
        (true, true) => (
            CognitiveFunction::new(perception, Attitude::Introverted),
            CognitiveFunction::new(judgment, Attitude::Extraverted),
        ),
        (true, false) => (
            CognitiveFunction::new(judgment, Attitude::Introverted),
            CognitiveFunction::new(perception, Attitude::Extraverted),
        ),
        (false, true) => (
            CognitiveFunction::new(judgment, Attitude::Extraverted),
            CognitiveFunction::new(perception, Attitude::Introverted),
        ),
        (false, false) => (
            CognitiveFunction::new(perception, Attitude::Extraverted),
            CognitiveFunction::new(judgment, Attitude::Introverted),
        ),
    };

    let stack = CognitiveStack::new(
        dominant,
        auxiliary,
        auxiliary.complement(),
        dominant.complement(),
    );
    trace!(%code, %stack, "derived cognitive stack");
    stack
}

/// Parse a type code and derive its stack.
pub fn derive_stack_str(code: &str) -> crate::Result<CognitiveStack> {
    Ok(derive_stack(&TypeCode::parse(code)?))
}

/// The 16 canonical stacks, in `TypeCode::ALL` order.
pub fn canonical_table() -> [(TypeCode, CognitiveStack); 16] {
    TypeCode::ALL.map(|code| (code, derive_stack(&code)))
}

fn perception_letter(code: &TypeCode) -> FunctionLetter {
    if code.letter(Axis::Perception) == 'N' {
        FunctionLetter::N
    } else {
        FunctionLetter::S
    }
}

fn judgment_letter(code: &TypeCode) -> FunctionLetter {
    if code.letter(Axis::Judgment) == 'T' {
        FunctionLetter::T
    } else {
        FunctionLetter::F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(code: &str) -> String {
        derive_stack_str(code).unwrap().to_string()
    }

    #[test]
    fn test_introvert_judging() {
        assert_eq!(stack_of("INFJ"), "Ni-Fe-Ti-Se");
        assert_eq!(stack_of("ISTJ"), "Si-Te-Fi-Ne");
    }

    #[test]
    fn test_introvert_perceiving() {
        assert_eq!(stack_of("ISTP"), "Ti-Se-Ni-Fe");
        assert_eq!(stack_of("INFP"), "Fi-Ne-Si-Te");
    }

    #[test]
    fn test_extravert_judging() {
        assert_eq!(stack_of("ENTJ"), "Te-Ni-Se-Fi");
        assert_eq!(stack_of("ESFJ"), "Fe-Si-Ne-Ti");
    }

    #[test]
    fn test_extravert_perceiving() {
        assert_eq!(stack_of("ENTP"), "Ne-Ti-Fe-Si");
        assert_eq!(stack_of("ESFP"), "Se-Fi-Te-Ni");
    }

    #[test]
    fn test_case_normalized() {
        assert_eq!(stack_of("intj"), "Ni-Te-Fi-Se");
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert!(derive_stack_str("INFX").is_err());
    }

    #[test]
    fn test_canonical_table_is_bijective() {
        let table = canonical_table();
        for (i, (_, a)) in table.iter().enumerate() {
            assert!(a.is_distinct());
            for (_, b) in &table[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
