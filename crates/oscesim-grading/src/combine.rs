//! Score combination.
//!
//! Merges canonical criteria, the (possibly absent) grading result, and
//! the evidence sample into the final report. Pure and deterministic:
//! identical inputs produce identical output.

use std::collections::HashSet;

use oscesim_core::models::criterion::CanonicalCriterion;
use oscesim_core::models::grading::{GradingResult, RawCriterionScore};
use oscesim_core::models::report::{CriterionReport, EvaluationReport, EvidenceExcerpt};

/// Score given to a canonical criterion the grading result did not cover,
/// and to every criterion when grading failed outright. The midpoint of
/// the 0–4 scale: "satisfactory", not zero, so an omitted criterion does
/// not read as a failed one.
pub const NEUTRAL_DEFAULT_SCORE: u32 = 2;

/// Cap on each aggregate narrative list.
pub const NARRATIVE_CAP: usize = 3;

/// Combine per-criterion grading output with canonical weights into the
/// final evaluation report.
pub fn combine(
    criteria: &[CanonicalCriterion],
    grading: Option<&GradingResult>,
    evidence: &[EvidenceExcerpt],
) -> EvaluationReport {
    // A result with an empty criteria array carries no per-criterion
    // judgment; treat it the same as a failed grading call.
    let grading = grading.filter(|g| !g.criteria.is_empty());

    let total_weight: f64 = criteria
        .iter()
        .map(CanonicalCriterion::effective_weight)
        .sum();

    let criterion_reports: Vec<CriterionReport> = criteria
        .iter()
        .map(|criterion| {
            let entry = grading.and_then(|g| match_entry(g, criterion));
            build_criterion_report(criterion, entry, total_weight, evidence)
        })
        .collect();

    let weighted_score_percent = weighted_percent(&criterion_reports, total_weight);

    let llm_score_percent = grading
        .and_then(|g| g.overall_score_percent)
        .map(|p| p.round().clamp(0.0, 100.0) as u32);

    let overall_score_percent = llm_score_percent.unwrap_or(weighted_score_percent);

    let strengths = aggregate_narratives(
        grading.map(|g| g.overall.strengths.as_slice()).unwrap_or_default(),
        criterion_reports.iter().map(|c| c.strengths.as_slice()),
    );
    let weaknesses = aggregate_narratives(
        grading.map(|g| g.overall.weaknesses.as_slice()).unwrap_or_default(),
        criterion_reports.iter().map(|c| c.weaknesses.as_slice()),
    );
    let recommendations = aggregate_narratives(
        grading
            .map(|g| g.overall.recommendations.as_slice())
            .unwrap_or_default(),
        criterion_reports.iter().map(|c| c.actions.as_slice()),
    );

    EvaluationReport {
        overall_score_percent,
        criteria: criterion_reports,
        strengths,
        weaknesses,
        recommendations,
        summary: grading.map(|g| g.overall.summary.clone()).unwrap_or_default(),
        llm_score_percent,
        weighted_score_percent,
    }
}

/// Match a grading entry to a canonical criterion: by id, else by
/// case-insensitive name.
fn match_entry<'a>(
    grading: &'a GradingResult,
    criterion: &CanonicalCriterion,
) -> Option<&'a RawCriterionScore> {
    grading
        .criteria
        .iter()
        .find(|entry| entry.id.as_deref() == Some(criterion.id.as_str()))
        .or_else(|| {
            grading.criteria.iter().find(|entry| {
                entry
                    .name
                    .as_ref()
                    .is_some_and(|name| name.to_lowercase() == criterion.name.to_lowercase())
            })
        })
}

fn build_criterion_report(
    criterion: &CanonicalCriterion,
    entry: Option<&RawCriterionScore>,
    total_weight: f64,
    evidence: &[EvidenceExcerpt],
) -> CriterionReport {
    let raw_weight = criterion.effective_weight();
    let weight = round2(raw_weight / total_weight * 100.0);

    let raw_score = match entry.and_then(|e| e.score) {
        Some(score) => clamp_score(score, criterion.max_score),
        None => NEUTRAL_DEFAULT_SCORE.min(criterion.max_score),
    };

    CriterionReport {
        id: criterion.id.clone(),
        name: criterion.name.clone(),
        description: criterion.description.clone(),
        indicators: criterion.indicators.clone(),
        weight,
        raw_weight,
        max_score: criterion.max_score,
        score: raw_score,
        raw_score,
        strengths: entry.map(|e| e.strengths.clone()).unwrap_or_default(),
        weaknesses: entry.map(|e| e.weaknesses.clone()).unwrap_or_default(),
        actions: entry.map(|e| e.actions.clone()).unwrap_or_default(),
        justification: entry.map(|e| e.justification.clone()).unwrap_or_default(),
        evidence: evidence.to_vec(),
    }
}

/// `round(Σ(score / max * weight) / Σ weight * 100)`.
fn weighted_percent(criteria: &[CriterionReport], total_weight: f64) -> u32 {
    if total_weight <= 0.0 || criteria.is_empty() {
        return 0;
    }

    let attained: f64 = criteria
        .iter()
        .map(|c| f64::from(c.score) / f64::from(c.max_score.max(1)) * c.raw_weight)
        .sum();

    (attained / total_weight * 100.0).round() as u32
}

/// Build one aggregate narrative list: the top-level field first, then the
/// per-criterion equivalents in report order, deduplicated by exact
/// trimmed match (first seen wins) and capped.
fn aggregate_narratives<'a>(
    top_level: &'a [String],
    per_criterion: impl Iterator<Item = &'a [String]>,
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    let sources = top_level.iter().chain(per_criterion.flatten());
    for item in sources {
        let trimmed = item.trim();
        if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
            continue;
        }
        out.push(trimmed.to_string());
        if out.len() == NARRATIVE_CAP {
            break;
        }
    }

    out
}

fn clamp_score(score: f64, max_score: u32) -> u32 {
    if !score.is_finite() {
        return NEUTRAL_DEFAULT_SCORE.min(max_score);
    }
    score.round().clamp(0.0, f64::from(max_score)) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
