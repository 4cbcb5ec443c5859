use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{
    GITHUB_API_URL, GITHUB_GRAPHQL_URL, ISSUES_PER_PAGE, PROJECT_ITEM_FIELDS,
    USER_AGENT as USER_AGENT_VALUE,
};
use crate::error::{SyncError, SyncResult};
use crate::logging::log_debug;
use crate::models::graphql::NodeData;
use crate::models::{GraphQLResponse, Issue, ProjectMetadata};

pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    graphql_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> SyncResult<Self> {
        Self::with_urls(token, GITHUB_API_URL, GITHUB_GRAPHQL_URL)
    }

    /// Build a client against explicit endpoints. Used by the integration
    /// tests to point at a local mock server.
    pub fn with_urls(token: &str, api_url: &str, graphql_url: &str) -> SyncResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| SyncError::ConfigError(format!("Invalid GitHub token: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            graphql_url: graphql_url.to_string(),
        })
    }

    /// Fetch every issue (open and closed) for the repository, in the order
    /// the API returns them. Pages until the first empty page; pull requests
    /// are included here and filtered out later.
    pub async fn fetch_all_issues(&self, owner: &str, repo: &str) -> SyncResult<Vec<Issue>> {
        let url = format!("{}/repos/{}/{}/issues", self.api_url, owner, repo);
        let mut issues = Vec::new();
        let mut page: u32 = 1;

        loop {
            let per_page = ISSUES_PER_PAGE.to_string();
            let page_number = page.to_string();
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("state", "all"),
                    ("per_page", per_page.as_str()),
                    ("page", page_number.as_str()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(SyncError::ApiError(format!(
                    "Issue listing for {}/{} page {} returned HTTP {}",
                    owner,
                    repo,
                    page,
                    response.status()
                )));
            }

            let batch: Vec<Issue> = response.json().await?;
            log_debug(&format!("Fetched page {}: {} issues", page, batch.len()));

            if batch.is_empty() {
                break;
            }

            issues.extend(batch);
            page += 1;
        }

        Ok(issues)
    }

    /// Look up board metadata for one issue by its node id. An issue with no
    /// linked project item resolves to empty metadata; transport and GraphQL
    /// errors propagate to the caller.
    pub async fn project_metadata(&self, node_id: &str) -> SyncResult<ProjectMetadata> {
        let query = format!(
            r#"
            query($id: ID!) {{
                node(id: $id) {{
                    ... on Issue {{
                        projectItems(first: 1) {{
                            nodes {{{}}}
                        }}
                    }}
                }}
            }}
            "#,
            PROJECT_ITEM_FIELDS
        );

        let variables = json!({ "id": node_id });
        let data: NodeData = self.execute_query(&query, Some(variables)).await?;

        let item = data
            .node
            .and_then(|node| node.project_items.nodes.into_iter().next());

        Ok(match item {
            Some(item) => ProjectMetadata {
                status: item.status.and_then(|s| s.name),
                story_points: item.points.and_then(|p| p.number),
            },
            None => ProjectMetadata::default(),
        })
    }

    async fn execute_query<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> SyncResult<T> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        let response = self.client.post(&self.graphql_url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::ApiError(format!(
                "GraphQL endpoint returned HTTP {}",
                response.status()
            )));
        }

        let graphql_response: GraphQLResponse<T> = response.json().await?;

        if let Some(errors) = graphql_response.errors {
            let error_messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
            return Err(SyncError::GraphQLError(error_messages.join(", ")));
        }

        graphql_response
            .data
            .ok_or_else(|| SyncError::GraphQLError("No data returned from GraphQL query".to_string()))
    }
}
