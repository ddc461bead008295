//! Review API wire types

use serde::{Deserialize, Serialize};

/// One published review of a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub byline: String,
    #[serde(default)]
    pub book_title: String,
    #[serde(default)]
    pub book_author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub publication_dt: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Body returned by the review API
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewEnvelope {
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub results: Vec<Review>,
}

/// Parsed review feed handed to the presentation layer
#[derive(Debug, Clone)]
pub struct ReviewFeed {
    pub copyright: String,
    pub reviews: Vec<Review>,
}

impl ReviewFeed {
    /// Whether the upstream found any reviews for the title
    pub fn has_results(&self) -> bool {
        !self.reviews.is_empty()
    }
}

impl From<ReviewEnvelope> for ReviewFeed {
    fn from(envelope: ReviewEnvelope) -> Self {
        Self {
            copyright: envelope.copyright,
            reviews: envelope.results,
        }
    }
}
