use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

// node(id:) lookup payload for the per-issue metadata query
#[derive(Debug, Deserialize)]
pub struct NodeData {
    pub node: Option<IssueProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct IssueProjectNode {
    #[serde(rename = "projectItems")]
    pub project_items: Connection<ProjectItemNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectItemNode {
    pub status: Option<SingleSelectValue>,
    pub points: Option<NumberValue>,
}

#[derive(Debug, Deserialize)]
pub struct SingleSelectValue {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NumberValue {
    pub number: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}
