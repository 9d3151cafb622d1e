//! Salary, skill-gap and recruiter views against an in-memory backend

mod common;

use common::{candidate, Call, StubApi};
use hr_analytics::report::render_prediction;
use hr_analytics::types::SkillGapReport;
use hr_analytics::{ApiError, RecruiterView, SalaryView, SkillGapView};
use serde_json::json;

#[tokio::test]
async fn test_salary_prediction_is_displayed_plainly() {
    let api = StubApi::new();
    api.push_salary(Ok(18.0));

    let mut view = SalaryView::default();
    view.toggle_skill("Python");
    view.submit(&api).await;

    assert_eq!(view.prediction(), Some(18.0));
    assert!(view.error().is_none());
    assert_eq!(
        render_prediction(&view.form.role, &view.form.location, 18.0),
        "Predicted salary for Data Scientist (Remote): 18"
    );

    match &api.calls()[0] {
        Call::Predict(req) => {
            assert_eq!(req.experience_years, 5);
            assert_eq!(req.skills, vec!["Python"]);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_salary_error_replaces_previous_prediction() {
    let api = StubApi::new();
    api.push_salary(Ok(95000.0));
    api.push_salary(Err(ApiError::Status {
        status: 500,
        body: Some(json!({"error": "model not trained"})),
    }));

    let mut view = SalaryView::default();
    view.submit(&api).await;
    assert_eq!(view.prediction(), Some(95000.0));

    view.submit(&api).await;
    assert!(view.prediction().is_none());
    let message = view.error().expect("error shown");
    assert!(message.starts_with("Request failed with status code 500"));
    assert!(message.contains("model not trained"));
}

#[tokio::test]
async fn test_skill_gap_report_and_role_change() {
    let api = StubApi::new();
    api.push_gap(Ok(SkillGapReport {
        match_percentage: 50.0,
        matched_skills: vec!["Python".into()],
        missing_skills: vec!["Spark".into()],
        required_skills: vec!["Python".into(), "Spark".into()],
    }));

    let mut view = SkillGapView::default();
    view.set_target_role("Data Engineer");
    view.toggle_skill("Python");
    view.analyze(&api).await;

    let report = view.report().expect("report");
    assert_eq!(report.match_percentage, 50.0);
    assert_eq!(report.missing_skills, vec!["Spark"]);

    view.set_target_role("Data Analyst");
    assert!(view.report().is_none());
    assert!(view.current_skills().is_empty());
}

#[tokio::test]
async fn test_role_skill_suggestions() {
    let api = StubApi::new();
    api.push_role_skills(Ok(vec!["Python".into(), "Airflow".into()]));

    let mut view = SkillGapView::default();
    view.set_target_role("Data Engineer");
    view.suggest_skills(&api).await;

    assert_eq!(view.suggestions(), ["Python", "Airflow"]);
    assert_eq!(api.calls(), vec![Call::RoleSkills("Data Engineer".into())]);
}

#[tokio::test]
async fn test_recruiter_sends_selection_as_is() {
    let api = StubApi::new();
    api.push_match(Ok(vec![candidate("Asha", 90.0), candidate("Ben", 60.0)]));

    let mut view = RecruiterView::default();
    view.set_top_n(20);
    view.search(&api).await;

    assert!(!view.is_loading());
    assert_eq!(view.candidates().len(), 2);
    let sent = api.match_calls();
    assert!(sent[0].skills_required.is_empty());
    assert_eq!(sent[0].top_n, 20);
}

#[tokio::test]
async fn test_recruiter_failure_clears_results() {
    let api = StubApi::new();
    api.push_match(Ok(vec![candidate("Asha", 90.0)]));
    api.push_match(Err(ApiError::transport("connection refused")));

    let mut view = RecruiterView::default();
    view.toggle_skill("Rust");
    view.search(&api).await;
    assert_eq!(view.candidates().len(), 1);

    view.search(&api).await;
    assert!(view.candidates().is_empty());
    assert_eq!(view.error(), Some("connection refused"));
    assert!(!view.is_loading());
}
