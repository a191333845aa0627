/**
 * Video Catalog
 *
 * This module serves the curated video list at GET /api/videos. The
 * catalog is fixed at build time; there is no upstream service and no
 * failure mode.
 */

use axum::response::Json;
use serde::{Deserialize, Serialize};

/// One curated video entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Catalog id, a numeric string
    pub id: String,
    /// Video title
    pub title: String,
    /// One-paragraph description
    pub description: String,
    /// YouTube video id, for embedding
    pub youtube_id: String,
    /// Duration as "mm:ss"
    pub duration: String,
    /// View count display string like "2.3M"
    pub views: String,
    /// Category label
    pub category: String,
}

/// Videos handler
///
/// GET /api/videos. Always responds 200 with the full catalog in fixed
/// order.
pub async fn get_videos() -> Json<Vec<Video>> {
    Json(video_catalog())
}

fn video(
    id: &str,
    title: &str,
    description: &str,
    youtube_id: &str,
    duration: &str,
    views: &str,
    category: &str,
) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        youtube_id: youtube_id.to_string(),
        duration: duration.to_string(),
        views: views.to_string(),
        category: category.to_string(),
    }
}

/// The curated catalog, in serving order
pub fn video_catalog() -> Vec<Video> {
    vec![
        video(
            "1",
            "Digital Detox: Reclaiming Your Life from Smartphone Addiction",
            "Learn practical strategies to reduce smartphone dependency and improve your \
             mental well-being. This comprehensive guide covers digital minimalism \
             principles and actionable steps.",
            "wf2VxeIm1no",
            "12:45",
            "2.3M",
            "Digital Wellness",
        ),
        video(
            "2",
            "Mindful Technology Use: Building Healthy Digital Habits",
            "Discover how to use technology mindfully and create boundaries that support \
             your goals. Perfect for students and young professionals.",
            "VpHyLG-sc4g",
            "8:32",
            "1.8M",
            "Mindfulness",
        ),
        video(
            "3",
            "What is Digital Detox - By Anupam Sir",
            "Anupam Sir explains the concept of digital detox and its importance in \
             today's digital age.",
            "5juBlNIMF-8",
            "11:46",
            "329K",
            "Digital Wellness",
        ),
        video(
            "4",
            "Digital Wellbeing Tutorial in Hindi",
            "A comprehensive tutorial on using digital wellbeing tools to maintain a \
             healthy digital lifestyle.",
            "djv4u1BJix0",
            "7:30",
            "1.1M",
            "Mindfulness",
        ),
        video(
            "5",
            "Focus & Productivity: Eliminating Digital Distractions",
            "Master the art of deep focus in the digital age. Learn techniques used by \
             top performers to maintain concentration and boost productivity.",
            "8jPQjjsBbIc",
            "15:20",
            "980K",
            "Productivity",
        ),
        video(
            "6",
            "How To Quickly Improve Focus And Concentration (in Hindi)",
            "Tips and techniques to enhance focus and concentration effectively.",
            "p86i5Y1H0DI",
            "5:50",
            "1.5M",
            "Productivity",
        ),
        video(
            "7",
            "How to Increase FOCUS and Concentration (Hindi)",
            "Strategies to improve focus and avoid distractions during work or study.",
            "0LzCBZTsRW4",
            "6:40",
            "980K",
            "Productivity",
        ),
        video(
            "8",
            "Stop Social Media Addiction With This 4 Step Plan",
            "A four-step plan to overcome social media addiction and regain control over \
             your time.",
            "AT8YmOpYRME",
            "7:20",
            "1.3M",
            "Digital Wellness",
        ),
        video(
            "9",
            "How To Break Social Media Addiction (Hindi)",
            "Guidance on breaking free from social media addiction and focusing on \
             personal growth.",
            "bWesbCOS8Mw",
            "8:00",
            "1.1M",
            "Digital Wellness",
        ),
    ]
}
