use serde::Deserialize;

/// Body of a 2xx `GET /api/v1/search` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One retrieval hit. Ordering from the backend is preserved as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub filename: String,
    pub score: f64,
    #[serde(default)]
    pub snippet: String,
}

impl SearchResult {
    /// Display title with the score fixed to two decimal places. This is a
    /// presentation rule only; the stored score is untouched.
    pub fn title(&self) -> String {
        format!("{} (score {:.2})", self.filename, self.score)
    }
}
