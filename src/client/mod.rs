pub mod github;
pub mod sheets;

pub use github::GitHubClient;
pub use sheets::SheetsClient;
