/// Board metadata for a single issue, taken from the first linked project
/// item. Both fields are absent when the issue is not on any board.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectMetadata {
    pub status: Option<String>,
    pub story_points: Option<f64>,
}
