//! Type analysis: role stacks, their re-inferred types and, optionally,
//! Socionics information for the analysed type.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AnalysisConfig;
use crate::inference::infer_type;
use crate::model::{CognitiveStack, TypeCode};
use crate::shadow::{function_roles, FunctionRole};
use crate::socionics::{relation_str, socionics_code, Relation};

/// One role line of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleReport {
    pub role: FunctionRole,
    pub stack: CognitiveStack,
    /// Type the stack maps back to under inference.
    pub inferred: TypeCode,
}

/// Relation between the analysed type and a comparison type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Uppercased comparison code as given; may not be a valid type.
    pub other: String,
    pub relation: Option<Relation>,
}

/// Full analysis of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnalysis {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub socionics: Option<String>,
    pub roles: Vec<RoleReport>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comparison: Option<Comparison>,
}

impl TypeAnalysis {
    pub fn role(&self, role: FunctionRole) -> Option<&RoleReport> {
        self.roles.iter().find(|r| r.role == role)
    }

    pub fn shows_socionics(&self) -> bool {
        self.socionics.is_some()
    }
}

/// Analyse `code` according to `config`.
pub fn analyze(code: &TypeCode, config: &AnalysisConfig) -> TypeAnalysis {
    let all_roles = function_roles(code);

    let roles = config
        .roles
        .iter()
        .map(|role| {
            let stack = all_roles.get(*role).stack;
            RoleReport {
                role: *role,
                stack,
                inferred: infer_type(&stack).type_code,
            }
        })
        .collect();

    let socionics = config
        .show_socionics
        .then(|| socionics_code(code))
        .flatten()
        .map(str::to_string);

    let comparison = match (&config.compare_to, config.show_socionics) {
        (Some(other), true) => Some(Comparison {
            other: other.to_uppercase(),
            relation: relation_str(code.as_str(), other),
        }),
        _ => None,
    };

    info!(
        type_code = %code,
        roles = config.roles.len(),
        socionics = config.show_socionics,
        "analysed type"
    );

    TypeAnalysis { type_code: *code, socionics, roles, comparison }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn infj() -> TypeCode {
        TypeCode::parse("INFJ").unwrap()
    }

    #[test]
    fn test_default_analysis() {
        let analysis = analyze(&infj(), &AnalysisConfig::default());
        let lines: Vec<(FunctionRole, String, String)> = analysis
            .roles
            .iter()
            .map(|r| (r.role, r.stack.to_string(), r.inferred.to_string()))
            .collect();
        assert_eq!(
            lines,
            vec![
                (FunctionRole::Ego, "Ni-Fe-Ti-Se".to_string(), "INFJ".to_string()),
                (FunctionRole::Subconscious, "Se-Ti-Fe-Ni".to_string(), "ESTP".to_string()),
                (FunctionRole::Unconscious, "Ne-Fi-Te-Si".to_string(), "ENFP".to_string()),
                (FunctionRole::Superego, "Si-Te-Fi-Ne".to_string(), "ISTJ".to_string()),
            ]
        );
        assert!(analysis.socionics.is_none());
        assert!(analysis.comparison.is_none());
    }

    #[test]
    fn test_selected_roles_keep_config_order() {
        let config = AnalysisConfig::default()
            .with_roles([FunctionRole::Superego, FunctionRole::Ego]);
        let analysis = analyze(&infj(), &config);
        assert_eq!(analysis.roles.len(), 2);
        assert_eq!(analysis.roles[0].role, FunctionRole::Superego);
        assert!(analysis.role(FunctionRole::Unconscious).is_none());
    }

    #[test]
    fn test_socionics_comparison() {
        let config = AnalysisConfig::default().with_socionics(Some("estj".into()));
        let analysis = analyze(&infj(), &config);
        assert_eq!(analysis.socionics.as_deref(), Some("IEI"));
        let comparison = analysis.comparison.unwrap();
        assert_eq!(comparison.other, "ESTJ");
        assert_eq!(comparison.relation, Some(Relation::Duality));
    }

    #[test]
    fn test_compare_to_ignored_without_socionics() {
        let config = AnalysisConfig {
            compare_to: Some("ENTP".into()),
            ..AnalysisConfig::default()
        };
        assert!(analyze(&infj(), &config).comparison.is_none());
    }

    #[test]
    fn test_invalid_comparison_type_has_no_relation() {
        let config = AnalysisConfig::default().with_socionics(Some("XXXX".into()));
        let comparison = analyze(&infj(), &config).comparison.unwrap();
        assert_eq!(comparison.relation, None);
    }
}
