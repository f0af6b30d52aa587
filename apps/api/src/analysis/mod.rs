// Career-analysis task agents. Each agent is a prompt builder plus one
// delegated completion call — no direct endpoint access outside llm_client.
// Agent results stay untyped (`serde_json::Value`): the response schema is
// described in the prompt and trusted, never validated server-side.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::llm_client::Completer;

/// Task selectors posted in the `tasks` field of `/analyze`.
/// Missing keys mean "don't run"; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSelection {
    #[serde(default)]
    pub run_ats_analyzer: bool,
    #[serde(default)]
    pub run_ats_optimizer: bool,
    #[serde(default)]
    pub run_interview_coach: bool,
}

/// Aggregate response for `/analyze`: always exactly these three slots,
/// each the agent's mapping or null when the task was not requested or
/// its completion failed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ats_analyzer: Option<Value>,
    pub ats_optimizer: Option<Value>,
    pub interview_coach: Option<Value>,
}

/// An interview question as forwarded to the answer agent. Deserialization
/// drops every other field the client sent, which keeps the serialized
/// question list (and so the prompt) small.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRef {
    pub id: String,
    pub question: String,
}

fn fill(template: &str, resume_text: &str, job_description: &str) -> String {
    template
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

pub fn build_analyzer_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    fill(
        prompts::ATS_ANALYZER_PROMPT_TEMPLATE,
        resume_text,
        job_description.unwrap_or(prompts::NO_JOB_DESCRIPTION_INFER),
    )
}

pub fn build_optimizer_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    fill(
        prompts::ATS_OPTIMIZER_PROMPT_TEMPLATE,
        resume_text,
        job_description.unwrap_or(prompts::NO_JOB_DESCRIPTION),
    )
}

pub fn build_coach_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    fill(
        prompts::INTERVIEW_COACH_PROMPT_TEMPLATE,
        resume_text,
        job_description.unwrap_or(prompts::NO_JOB_DESCRIPTION),
    )
}

pub fn build_answer_prompt(
    resume_text: &str,
    job_description: Option<&str>,
    questions: &[QuestionRef],
) -> String {
    let questions_json =
        serde_json::to_string(questions).unwrap_or_else(|_| "[]".to_string());
    fill(
        prompts::ANSWER_GENERATOR_PROMPT_TEMPLATE,
        resume_text,
        job_description.unwrap_or(prompts::NO_JOB_DESCRIPTION),
    )
    .replace("{questions_json}", &questions_json)
}

pub async fn run_ats_analyzer(
    llm: &dyn Completer,
    resume_text: &str,
    job_description: Option<&str>,
) -> Option<Value> {
    llm.complete_json(&build_analyzer_prompt(resume_text, job_description))
        .await
}

pub async fn run_ats_optimizer(
    llm: &dyn Completer,
    resume_text: &str,
    job_description: Option<&str>,
) -> Option<Value> {
    llm.complete_json(&build_optimizer_prompt(resume_text, job_description))
        .await
}

pub async fn run_interview_coach(
    llm: &dyn Completer,
    resume_text: &str,
    job_description: Option<&str>,
) -> Option<Value> {
    llm.complete_json(&build_coach_prompt(resume_text, job_description))
        .await
}

pub async fn run_answer_generator(
    llm: &dyn Completer,
    resume_text: &str,
    job_description: Option<&str>,
    questions: &[QuestionRef],
) -> Option<Value> {
    llm.complete_json(&build_answer_prompt(resume_text, job_description, questions))
        .await
}

/// Runs the requested tasks one after another. A failed task leaves its
/// slot null and never aborts its siblings.
pub async fn run_selected_tasks(
    llm: &dyn Completer,
    resume_text: &str,
    job_description: Option<&str>,
    tasks: &TaskSelection,
) -> AnalysisReport {
    let mut report = AnalysisReport {
        ats_analyzer: None,
        ats_optimizer: None,
        interview_coach: None,
    };

    if tasks.run_ats_analyzer {
        info!("Running ATS analyzer");
        report.ats_analyzer = run_ats_analyzer(llm, resume_text, job_description).await;
        info!(succeeded = report.ats_analyzer.is_some(), "ATS analyzer done");
    }

    if tasks.run_ats_optimizer {
        info!("Running ATS optimizer");
        report.ats_optimizer = run_ats_optimizer(llm, resume_text, job_description).await;
        info!(succeeded = report.ats_optimizer.is_some(), "ATS optimizer done");
    }

    if tasks.run_interview_coach {
        info!("Running interview coach");
        report.interview_coach = run_interview_coach(llm, resume_text, job_description).await;
        info!(
            succeeded = report.interview_coach.is_some(),
            "Interview coach done"
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Test double for the completion seam: records every prompt it
    /// receives and replies with a fixed value.
    struct StubCompleter {
        reply: Option<Value>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubCompleter {
        fn replying(reply: Option<Value>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn received(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Completer for StubCompleter {
        async fn complete_json(&self, prompt: &str) -> Option<Value> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    #[test]
    fn test_task_selection_defaults_to_nothing() {
        let selection: TaskSelection = serde_json::from_str("{}").unwrap();
        assert!(!selection.run_ats_analyzer);
        assert!(!selection.run_ats_optimizer);
        assert!(!selection.run_interview_coach);
    }

    #[test]
    fn test_task_selection_ignores_unknown_keys() {
        let selection: TaskSelection =
            serde_json::from_str(r#"{"runAtsAnalyzer": true, "somethingElse": 42}"#).unwrap();
        assert!(selection.run_ats_analyzer);
        assert!(!selection.run_ats_optimizer);
    }

    #[test]
    fn test_question_ref_drops_extraneous_fields() {
        let raw = r#"{
            "id": "Q7",
            "question": "Tell me about a hard bug.",
            "difficulty": "Hard",
            "category": "Debugging",
            "followUpHint": "Ask for the root cause"
        }"#;
        let question: QuestionRef = serde_json::from_str(raw).unwrap();
        let forwarded = serde_json::to_value(&question).unwrap();
        assert_eq!(
            forwarded,
            json!({"id": "Q7", "question": "Tell me about a hard bug."})
        );
    }

    #[test]
    fn test_coach_prompt_always_requests_ten_ten_ten() {
        // Structural property of the prompt, independent of resume length.
        let long_resume = "very long resume ".repeat(500);
        for resume in ["short", long_resume.as_str()] {
            let prompt = build_coach_prompt(resume, None);
            assert!(prompt.contains("30 interview questions (10 Easy, 10 Medium, 10 Hard)"));
            assert!(prompt.contains(r#""difficultyDistribution": { "easy": 10, "medium": 10, "hard": 10 }"#));
        }
    }

    #[test]
    fn test_answer_prompt_forwards_only_id_and_question() {
        let questions = vec![
            QuestionRef {
                id: "Q1".to_string(),
                question: "Why Rust?".to_string(),
            },
            QuestionRef {
                id: "Q2".to_string(),
                question: "Describe your last project.".to_string(),
            },
        ];
        let prompt = build_answer_prompt("resume body", Some("backend role"), &questions);

        assert!(prompt.contains(r#"[{"id":"Q1","question":"Why Rust?"}"#));
        assert!(prompt.contains(r#"{"id":"Q2","question":"Describe your last project."}]"#));
        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("backend role"));
    }

    #[test]
    fn test_missing_job_description_uses_fallback_text() {
        let analyzer = build_analyzer_prompt("resume", None);
        assert!(analyzer.contains("Not provided. Infer role from resume."));

        let optimizer = build_optimizer_prompt("resume", None);
        assert!(optimizer.contains("Not provided."));
        assert!(!optimizer.contains("Infer role"));
    }

    #[tokio::test]
    async fn test_no_tasks_selected_runs_no_agents() {
        let stub = StubCompleter::replying(Some(json!({"unused": true})));
        let report =
            run_selected_tasks(&stub, "resume", None, &TaskSelection::default()).await;

        assert!(report.ats_analyzer.is_none());
        assert!(report.ats_optimizer.is_none());
        assert!(report.interview_coach.is_none());
        assert!(stub.received().is_empty());
    }

    #[tokio::test]
    async fn test_report_always_has_three_slots() {
        let stub = StubCompleter::replying(Some(json!({"atsScore": {"score": 72}})));
        let tasks = TaskSelection {
            run_ats_analyzer: true,
            ..Default::default()
        };
        let report = run_selected_tasks(&stub, "resume", None, &tasks).await;

        let value = serde_json::to_value(&report).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["atsAnalyzer", "atsOptimizer", "interviewCoach"]);
        assert_eq!(value["atsAnalyzer"]["atsScore"]["score"], 72);
        assert_eq!(value["atsOptimizer"], Value::Null);
        assert_eq!(value["interviewCoach"], Value::Null);
    }

    #[tokio::test]
    async fn test_failed_task_leaves_null_and_siblings_run() {
        // Completion failure surfaces as None for every requested slot;
        // each agent is still invoked.
        let stub = StubCompleter::replying(None);
        let tasks = TaskSelection {
            run_ats_analyzer: true,
            run_ats_optimizer: true,
            run_interview_coach: true,
        };
        let report = run_selected_tasks(&stub, "resume", Some("jd"), &tasks).await;

        assert!(report.ats_analyzer.is_none());
        assert!(report.ats_optimizer.is_none());
        assert!(report.interview_coach.is_none());
        assert_eq!(stub.received().len(), 3);
    }
}
