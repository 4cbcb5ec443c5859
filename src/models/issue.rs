use serde::{Deserialize, Serialize};

/// An issue as returned by the repository listing endpoint. Pull requests
/// come back from the same endpoint and are distinguished only by the
/// presence of the `pull_request` key.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    pub number: u64,
    pub state: String,
    pub title: String,
    pub html_url: String,
    pub node_id: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
    pub milestone: Option<Milestone>,
    pub pull_request: Option<PullRequestMarker>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Assignee {
    pub login: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Milestone {
    pub title: String,
    pub state: String,
    pub due_on: Option<String>,
}

/// Marker object present on pull requests in the issues listing. The
/// payload's fields are irrelevant; only its presence matters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub url: Option<String>,
}
