pub mod graphql;
pub mod issue;
pub mod project;

// Re-export commonly used types
pub use graphql::{Connection, GraphQLError, GraphQLResponse};
pub use issue::{Assignee, Issue, Label, Milestone, PullRequestMarker};
pub use project::ProjectMetadata;
