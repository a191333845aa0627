/**
 * Article Aggregation
 *
 * This module builds the article list served at GET /api/articles.
 *
 * # Sources
 *
 * Two catalogs are fetched concurrently and mapped into a common article
 * shape:
 *
 * - TheSportsDB all-sports catalog (ids 1, 2, ...)
 * - Wger exercise catalog (ids 100, 101, ...)
 *
 * A built-in study-tips article (id 999) is always appended.
 *
 * # Fallback
 *
 * If either fetch fails for any reason - network, HTTP status, or a body
 * that does not decode - the endpoint serves only the built-in article,
 * still with status 200. Missing or empty fields within an otherwise
 * valid catalog are patched per entry with placeholder text.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::content::client::ContentClient;

/// Excerpts keep this many characters of the description
const EXCERPT_CHARS: usize = 100;

const SPORT_FALLBACK_THUMBNAIL: &str = "https://via.placeholder.com/800x600";
const EXERCISE_FALLBACK_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1588776814546-0d3f282cf9e1?w=800&h=600&fit=crop";
const TIPS_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1596495577886-d920f1fb7238?w=800&h=600&fit=crop";

/// One article as served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable id within one response (1+ sports, 100+ exercises, 999 built-in)
    pub id: i64,
    /// Article title
    pub title: String,
    /// Short teaser, at most 100 characters of description plus "..."
    pub excerpt: String,
    /// Full article body as an HTML fragment
    pub content: String,
    /// Attribution label for the source catalog
    pub author: String,
    /// Display string like "5 min read"
    pub read_time: String,
    /// Serve date in month/day/year form
    pub publish_date: String,
    /// Category label ("Sports", "Fitness", "Education")
    pub category: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Category tags
    pub tags: Vec<String>,
}

/// Wire shape of the sports catalog
///
/// `sports` is required; a body without it fails to decode and triggers
/// the built-in fallback.
#[derive(Debug, Deserialize)]
pub struct SportsCatalog {
    pub sports: Vec<SportEntry>,
}

/// One sports catalog entry; every field may be absent
#[derive(Debug, Deserialize)]
pub struct SportEntry {
    #[serde(rename = "strSport")]
    pub name: Option<String>,
    #[serde(rename = "strSportDescription")]
    pub description: Option<String>,
    #[serde(rename = "strSportThumb")]
    pub thumbnail: Option<String>,
}

/// Wire shape of the exercise catalog
#[derive(Debug, Deserialize)]
pub struct ExerciseCatalog {
    pub results: Vec<ExerciseEntry>,
}

/// One exercise catalog entry; every field may be absent
#[derive(Debug, Deserialize)]
pub struct ExerciseEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<ExerciseImage>>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseImage {
    pub image: Option<String>,
}

/// Articles handler
///
/// GET /api/articles. Aggregates both catalogs and appends the built-in
/// article; on any upstream failure it serves the built-in article
/// alone. Always responds 200.
pub async fn get_articles(State(content): State<ContentClient>) -> Json<Vec<Article>> {
    Json(aggregate_articles(&content).await)
}

/// Build the combined article list
///
/// The two catalog fetches run concurrently. Order in the result is
/// fixed: sports, then exercises, then the built-in article.
pub async fn aggregate_articles(content: &ContentClient) -> Vec<Article> {
    let publish_date = today();

    match tokio::try_join!(
        content.fetch_sports_catalog(),
        content.fetch_exercise_catalog(),
    ) {
        Ok((sports, exercises)) => {
            let mut articles: Vec<Article> = sports
                .sports
                .into_iter()
                .enumerate()
                .map(|(index, entry)| map_sport(index, entry, &publish_date))
                .collect();
            articles.extend(
                exercises
                    .results
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| map_exercise(index, entry, &publish_date)),
            );
            articles.extend(tips_articles(&publish_date));
            articles
        }
        Err(e) => {
            tracing::warn!("Article catalogs unavailable, serving built-ins: {}", e);
            tips_articles(&publish_date)
        }
    }
}

/// The built-in articles appended to every response
pub fn tips_articles(publish_date: &str) -> Vec<Article> {
    vec![Article {
        id: 999,
        title: "5 Study Tips for Better Focus".to_string(),
        excerpt: "Learn how to improve your concentration with these simple study tips..."
            .to_string(),
        content: "<h3>5 Study Tips for Better Focus</h3><p>1. Find a quiet space. \
                  2. Eliminate distractions. 3. Take breaks. 4. Use active recall. \
                  5. Stay organized.</p>"
            .to_string(),
        author: "EduTips".to_string(),
        read_time: "3 min read".to_string(),
        publish_date: publish_date.to_string(),
        category: "Education".to_string(),
        thumbnail: TIPS_THUMBNAIL.to_string(),
        tags: vec!["Education".to_string(), "Focus".to_string()],
    }]
}

fn map_sport(index: usize, entry: SportEntry, publish_date: &str) -> Article {
    let title = non_empty(entry.name).unwrap_or_else(|| "Untitled Sport".to_string());
    let description = non_empty(entry.description);

    Article {
        id: index as i64 + 1,
        excerpt: excerpt_of(description.as_deref()),
        content: article_body(&title, description.as_deref()),
        title,
        author: "TheSportsDB".to_string(),
        read_time: "5 min read".to_string(),
        publish_date: publish_date.to_string(),
        category: "Sports".to_string(),
        thumbnail: non_empty(entry.thumbnail)
            .unwrap_or_else(|| SPORT_FALLBACK_THUMBNAIL.to_string()),
        tags: vec!["Sports".to_string()],
    }
}

fn map_exercise(index: usize, entry: ExerciseEntry, publish_date: &str) -> Article {
    let title = non_empty(entry.name).unwrap_or_else(|| "Untitled Exercise".to_string());
    let description = non_empty(entry.description);
    let thumbnail = entry
        .images
        .and_then(|images| images.into_iter().next())
        .and_then(|image| non_empty(image.image))
        .unwrap_or_else(|| EXERCISE_FALLBACK_THUMBNAIL.to_string());

    Article {
        id: index as i64 + 100,
        excerpt: excerpt_of(description.as_deref()),
        content: article_body(&title, description.as_deref()),
        title,
        author: "Wger API".to_string(),
        read_time: "4 min read".to_string(),
        publish_date: publish_date.to_string(),
        category: "Fitness".to_string(),
        thumbnail,
        tags: vec!["Fitness".to_string()],
    }
}

/// First 100 characters of the description plus a trailing ellipsis
///
/// Truncation counts characters, not bytes, so multibyte descriptions
/// never split a code point. The ellipsis is appended even when the
/// description is already short.
fn excerpt_of(description: Option<&str>) -> String {
    match description {
        Some(description) => {
            let head: String = description.chars().take(EXCERPT_CHARS).collect();
            format!("{head}...")
        }
        None => "No description available.".to_string(),
    }
}

/// HTML body for an article, with a placeholder paragraph when the
/// catalog had no description
fn article_body(title: &str, description: Option<&str>) -> String {
    match description {
        Some(description) => format!("<h3>{title}</h3><p>{description}</p>"),
        None => format!("<h3>{title}</h3><p>No detailed description available.</p>"),
    }
}

/// Empty strings count as absent, the same as missing fields
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Serve date formatted month/day/year without zero padding
fn today() -> String {
    chrono::Local::now().format("%-m/%-d/%Y").to_string()
}
