use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Page<T> {
    pub page: i64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_results: i64,
}

impl<T> Page<T> {
    /// True when a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
