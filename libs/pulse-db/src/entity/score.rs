use serde::Serialize;

/// Published score and headline flag for a project
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScore {
    pub project_id: &'static str,
    pub project: &'static str,
    pub chain: &'static str,
    pub score: f64,
    pub flag: &'static str,
}
