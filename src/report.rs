// src/report.rs
//! Plain-text reports for the terminal and CSV export of rankings

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use crate::types::{Candidate, MarketData, SkillGapReport, SkillDemand};

/// Round to two decimals and drop a trailing `.0` (18.0 -> "18").
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

pub fn render_prediction(role: &str, location: &str, value: f64) -> String {
    format!(
        "Predicted salary for {} ({}): {}",
        role,
        location,
        format_amount(value)
    )
}

pub fn render_demand_mix(demand: &[SkillDemand]) -> String {
    let mut out = String::new();
    let widest = demand.iter().map(|d| d.count).max().unwrap_or(0).max(1);
    for d in demand {
        let bar = "#".repeat(((d.count * 30) / widest) as usize);
        let _ = writeln!(out, "  {:<20} {:>6}  {}", d.skill, d.count, bar);
    }
    out
}

pub fn render_market(market: &MarketData, demand_mix: &[SkillDemand]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Records analyzed: {}", market.total_records);

    let _ = writeln!(out, "\nDemand mix:");
    out.push_str(&render_demand_mix(demand_mix));

    if !market.exp_salary.is_empty() {
        let _ = writeln!(out, "\nSalary by experience:");
        for point in &market.exp_salary {
            let _ = writeln!(
                out,
                "  {:>3}y  {}",
                format_amount(point.level),
                format_amount(point.salary)
            );
        }
    }

    if !market.job_salary.is_empty() {
        let _ = writeln!(out, "\nSalary by role:");
        for role in &market.job_salary {
            let _ = writeln!(out, "  {:<30} {}", role.title, format_amount(role.salary));
        }
    }

    out
}

pub fn render_candidates(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return "No matching candidates.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<24} {:<30} {:<12} {:>6}",
        "#", "Name", "Email", "Experience", "Fit"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));

    for (idx, cand) in candidates.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<30} {:<12} {:>5}%",
            idx + 1,
            cand.name,
            cand.email,
            cand.experience_level.to_string(),
            format_amount(cand.score)
        );
    }
    out
}

pub fn render_skill_gap(role: &str, report: &SkillGapReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Match for {}: {}%",
        role,
        format_amount(report.match_percentage)
    );

    let have = if report.matched_skills.is_empty() {
        "(none yet)".to_string()
    } else {
        report.matched_skills.join(", ")
    };
    let _ = writeln!(out, "You have: {}", have);
    let _ = writeln!(out, "Required for role: {}", report.missing_skills.join(", "));
    out
}

#[derive(Serialize)]
struct CandidateRow<'a> {
    rank: usize,
    name: &'a str,
    email: &'a str,
    experience_level: String,
    score: f64,
    skills: &'a str,
}

/// Write a ranking to CSV in backend order.
pub fn export_candidates(path: &Path, candidates: &[Candidate]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for (idx, cand) in candidates.iter().enumerate() {
        writer
            .serialize(CandidateRow {
                rank: idx + 1,
                name: &cand.name,
                email: &cand.email,
                experience_level: cand.experience_level.to_string(),
                score: cand.score,
                skills: cand.skills.as_deref().unwrap_or(""),
            })
            .context("Failed to write candidate row")?;
    }

    writer.flush().context("Failed to flush CSV export")?;
    info!("Exported {} candidates to {}", candidates.len(), path.display());
    Ok(())
}
