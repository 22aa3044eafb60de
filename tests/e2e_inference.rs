//! End-to-end tests for stack → type inference.

use eidon::{
    derive_stack, infer_type, infer_type_str, CognitiveFunction, CognitiveStack, Error, TypeCode,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_round_trip_for_every_type() {
    for code in TypeCode::ALL {
        let result = infer_type(&derive_stack(&code));
        assert_eq!(result.type_code, code);
        assert!(result.exact_match);
        assert_eq!(result.confidence, 100.0);
        assert!(result.differences.is_empty());
        assert_eq!(result.closest_stack, derive_stack(&code));
    }
}

#[test]
fn test_exact_scenario() {
    let result = infer_type_str(&["Ni", "Fe", "Ti", "Se"]).unwrap();
    assert_eq!(result.type_code.as_str(), "INFJ");
    assert!(result.exact_match);
    assert_eq!(result.confidence, 100.0);
}

#[test]
fn test_partial_scenario() {
    let result = infer_type_str(&["Ni", "Fe", "Se", "Ti"]).unwrap();
    assert_eq!(result.type_code.as_str(), "INFJ");
    assert!(!result.exact_match);
    assert_eq!(result.confidence, 70.0);
    assert_eq!(result.differences.to_vec(), vec![3u8, 4]);
}

#[test]
fn test_lowercase_input() {
    let result = infer_type_str(&["ne", "ti", "fe", "si"]).unwrap();
    assert_eq!(result.type_code.as_str(), "ENTP");
    assert!(result.exact_match);
}

#[test]
fn test_wrong_length_message() {
    let err = infer_type_str(&["Ni", "Fe"]).unwrap_err();
    assert!(matches!(err, Error::InvalidStackLength(2)));
    assert_eq!(err.to_string(), "Stack must have 4 functions (got 2)");
}

#[test]
fn test_invalid_label_message() {
    let err = infer_type_str(&["Ni", "Fe", "Ti", "Sx"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid function: Sx");
}

#[test]
fn test_json_shape() {
    let result = infer_type_str(&["Ti", "Ne", "Fe", "Si"]).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["type"], "INTP");
    assert_eq!(value["closest_stack"], serde_json::json!(["Ti", "Ne", "Si", "Fe"]));
    assert_eq!(value["differences"], serde_json::json!([3, 4]));
    assert_eq!(value["confidence"], 70.0);
}

fn distinct_stack() -> impl Strategy<Value = CognitiveStack> {
    prop::sample::subsequence(CognitiveFunction::ALL.to_vec(), 4)
        .prop_shuffle()
        .prop_map(|f| CognitiveStack::new(f[0], f[1], f[2], f[3]))
}

fn any_stack() -> impl Strategy<Value = CognitiveStack> {
    prop::array::uniform4(prop::sample::select(CognitiveFunction::ALL.to_vec()))
        .prop_map(CognitiveStack)
}

proptest! {
    #[test]
    fn prop_inference_is_total(stack in distinct_stack()) {
        let result = infer_type(&stack);
        prop_assert!((0.0..=100.0).contains(&result.confidence));
        prop_assert_eq!(result.closest_stack, derive_stack(&result.type_code));
        prop_assert_eq!(result.exact_match, result.differences.is_empty());
    }

    #[test]
    fn prop_differences_match_closest_stack(stack in any_stack()) {
        let result = infer_type(&stack);
        for pos in 1..=4u8 {
            let i = usize::from(pos - 1);
            let differs = stack.functions()[i] != result.closest_stack.functions()[i];
            prop_assert_eq!(differs, result.differences.contains(&pos));
        }
    }

    #[test]
    fn prop_best_score_is_maximal(stack in any_stack()) {
        let result = infer_type(&stack);
        let best = eidon::weighted_score(&stack, &result.closest_stack);
        for code in TypeCode::ALL {
            prop_assert!(eidon::weighted_score(&stack, &derive_stack(&code)) <= best);
        }
        prop_assert_eq!(result.confidence, f64::from(best) * 10.0);
    }
}
