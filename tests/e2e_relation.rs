//! End-to-end tests for Socionics intertype relations.
//!
//! Covers every ordered pair of the 16 types, direction-sensitive
//! signatures, and the string-level entry point.

use std::collections::BTreeMap;

use eidon::socionics::RULES;
use eidon::{relation, relation_str, AxisSet, Relation, RelationSignature, RelationTable, TypeCode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn code(s: &str) -> TypeCode {
    TypeCode::parse(s).unwrap()
}

#[test]
fn test_identity_for_every_type() {
    for t in TypeCode::ALL {
        assert_eq!(relation(&t, &t), Some(Relation::Identity));
    }
}

#[test]
fn test_every_ordered_pair_matches_exactly_one_rule() {
    for a in TypeCode::ALL {
        for b in TypeCode::ALL {
            let signature = RelationSignature::between(&a, &b);
            let matching: Vec<_> = RULES.iter().filter(|r| r.matches(&signature)).collect();
            assert_eq!(matching.len(), 1, "{a} → {b} matched {} rules", matching.len());
            assert_eq!(relation(&a, &b), Some(matching[0].relation));
        }
    }
}

#[test]
fn test_table_agrees_with_direct_lookup() {
    let table = RelationTable::build();
    assert!(table.unresolved().is_empty());
    for a in TypeCode::ALL {
        for b in TypeCode::ALL {
            assert_eq!(table.get(&a, &b), relation(&a, &b));
        }
    }
}

#[test]
fn test_relation_distribution() {
    // Each type has exactly one partner per symmetric relation and one per
    // directional end, so every name appears 16 times across 256 pairs.
    let mut counts: BTreeMap<Relation, usize> = BTreeMap::new();
    for a in TypeCode::ALL {
        for b in TypeCode::ALL {
            if let Some(r) = relation(&a, &b) {
                *counts.entry(r).or_default() += 1;
            }
        }
    }
    assert_eq!(counts.len(), 16);
    for (name, count) in counts {
        assert_eq!(count, 16, "{name}");
    }
}

#[test]
fn test_worked_cases() {
    // N/S, T/F and J/P differ; I stays I.
    let infj = code("INFJ");
    assert_eq!(infj.altered_axes(&code("ISTP")), AxisSet::of(&[2, 3, 4]));
    assert_eq!(relation_str("INFJ", "ISTP"), Some(Relation::Activity));

    // I/E, T/F and J/P differ: a supervision pair, not duality.
    assert_eq!(infj.altered_axes(&code("ENTP")), AxisSet::of(&[1, 3, 4]));
    assert_eq!(relation_str("INFJ", "ENTP"), Some(Relation::Supervisor));

    // {1,2,3}
    assert_eq!(relation_str("INFJ", "ESTJ"), Some(Relation::Duality));
    assert_eq!(relation_str("ENTP", "ISFP"), Some(Relation::Duality));
}

#[test]
fn test_direction_per_rule() {
    let cases = [
        // {1,2,4}
        ("ENTP", "ISTJ", Relation::Supervisor, Relation::Supervisee),
        // {1,3,4}
        ("ESTJ", "ISFP", Relation::Supervisor, Relation::Supervisee),
        // {2,4}
        ("ENTJ", "ESTP", Relation::Benefactor, Relation::Beneficiary),
        // {3,4}
        ("ENFP", "ENTJ", Relation::Benefactor, Relation::Beneficiary),
    ];
    for (a, b, forward, backward) in cases {
        assert_eq!(relation_str(a, b), Some(forward), "{a} → {b}");
        assert_eq!(relation_str(b, a), Some(backward), "{b} → {a}");
    }
}

#[test]
fn test_unknown_types_have_no_relation() {
    assert_eq!(relation_str("ABCD", "INFJ"), None);
    assert_eq!(relation_str("INFJ", "INFJJ"), None);
    assert_eq!(relation_str("", ""), None);
}

#[test]
fn test_padded_types_are_not_corrected() {
    // Only case is normalized; whitespace makes the code invalid.
    assert_eq!(relation_str("INFJ ", "\tESTJ"), None);
    assert_eq!(relation_str(" infj", "estj"), None);
    assert_eq!(relation_str("infj", "estj"), Some(Relation::Duality));
}

fn any_type() -> impl Strategy<Value = TypeCode> {
    prop::sample::select(TypeCode::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_reverse_is_converse(a in any_type(), b in any_type()) {
        let forward = relation(&a, &b).map(Relation::converse);
        prop_assert_eq!(relation(&b, &a), forward);
    }

    #[test]
    fn prop_string_entry_matches_typed(a in any_type(), b in any_type()) {
        let lower_a = a.as_str().to_lowercase();
        prop_assert_eq!(relation_str(&lower_a, b.as_str()), relation(&a, &b));
    }
}
