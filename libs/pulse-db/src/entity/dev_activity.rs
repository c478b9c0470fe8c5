use serde::Serialize;

/// GitHub activity for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevActivity {
    pub project_id: &'static str,
    pub project: &'static str,
    pub chain: &'static str,
    pub github_repo: &'static str,
    pub commits_last_week: u32,
    pub open_issues: u32,
    pub contributors: u32,
}
