//! Report rendering: plain text for terminals, JSON for tooling.
//!
//! ```text
//! Analysis for INFJ (MBTI):
//! Ego: Ni-Fe-Ti-Se  (MBTI: INFJ)
//! Subconscious: Se-Ti-Fe-Ni  (MBTI: ESTP)
//!
//! Socionics Relation between INFJ and ESTJ: Duality
//! ```

use std::io::Write;

use serde::Serialize;

use crate::analysis::TypeAnalysis;
use crate::inference::Inference;
use crate::model::TypeCode;
use crate::socionics::Relation;
use crate::Result;

/// Write an analysis as text.
pub fn write_analysis(analysis: &TypeAnalysis, writer: &mut dyn Write) -> Result<()> {
    if analysis.shows_socionics() {
        writeln!(writer, "Analysis for {} (MBTI):", analysis.type_code)?;
    } else {
        writeln!(writer, "Analysis for {}:", analysis.type_code)?;
    }

    for line in &analysis.roles {
        writeln!(
            writer,
            "{}: {}  (MBTI: {})",
            line.role.title(),
            line.stack,
            line.inferred
        )?;
    }

    if let Some(comparison) = &analysis.comparison {
        writeln!(writer)?;
        writeln!(
            writer,
            "Socionics Relation between {} and {}: {}",
            analysis.type_code,
            comparison.other,
            format_relation(comparison.relation)
        )?;
    }
    Ok(())
}

/// Write an inference result as text.
pub fn write_inference(inference: &Inference, writer: &mut dyn Write) -> Result<()> {
    if inference.exact_match {
        writeln!(writer, "MBTI Type: {}", inference.type_code)?;
        return Ok(());
    }

    writeln!(
        writer,
        "Closest MBTI: {} (confidence: {:.1}%)",
        inference.type_code, inference.confidence
    )?;
    writeln!(writer, "Expected stack: {}", inference.closest_stack)?;
    let positions: Vec<String> = inference.differences.iter().map(|p| p.to_string()).collect();
    writeln!(writer, "Differences in positions: {}", positions.join(", "))?;
    Ok(())
}

/// Write a single relation line as text.
pub fn write_relation(
    a: &str,
    b: &str,
    relation: Option<Relation>,
    writer: &mut dyn Write,
) -> Result<()> {
    writeln!(
        writer,
        "Socionics Relation between {} and {}: {}",
        a.to_uppercase(),
        b.to_uppercase(),
        format_relation(relation)
    )?;
    Ok(())
}

/// Write any report value as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// JSON shape of a relation query.
#[derive(Debug, Clone, Serialize)]
pub struct RelationReport {
    pub a: String,
    pub b: String,
    pub relation: Option<Relation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socionics_a: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socionics_b: Option<&'static str>,
}

impl RelationReport {
    pub fn new(a: &str, b: &str, relation: Option<Relation>) -> Self {
        let code = |s: &str| TypeCode::parse(s).ok().and_then(|c| crate::socionics::socionics_code(&c));
        Self {
            a: a.to_uppercase(),
            b: b.to_uppercase(),
            relation,
            socionics_a: code(a),
            socionics_b: code(b),
        }
    }
}

fn format_relation(relation: Option<Relation>) -> &'static str {
    relation.map_or("None", Relation::name)
}
