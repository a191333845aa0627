/**
 * Content Upstream Client
 *
 * HTTP client for the third-party services behind the content endpoints:
 * the sports and exercise catalogs that feed the article list, and the
 * form service that receives contact and newsletter submissions.
 */

use reqwest::Client;
use serde_json::Value;

use crate::content::articles::{ExerciseCatalog, SportsCatalog};
use crate::error::ServiceError;

/// Upstream endpoints used by the content handlers
///
/// Defaults point at the production services. Tests swap in local mock
/// servers by constructing this directly.
#[derive(Debug, Clone)]
pub struct ContentEndpoints {
    /// Sports catalog (TheSportsDB)
    pub sports_catalog: String,
    /// Exercise catalog (Wger)
    pub exercise_catalog: String,
    /// Contact form inbox (Formspree)
    pub contact_form: String,
    /// Newsletter signup inbox (Formspree)
    pub newsletter_form: String,
}

impl Default for ContentEndpoints {
    fn default() -> Self {
        Self {
            sports_catalog: "https://www.thesportsdb.com/api/v1/json/3/all_sports.php"
                .to_string(),
            exercise_catalog: "https://wger.de/api/v2/exercise/?language=2&limit=10".to_string(),
            contact_form: "https://formspree.io/f/xldbyodb".to_string(),
            newsletter_form: "https://formspree.io/f/mnndkokr".to_string(),
        }
    }
}

/// Content client state
///
/// Cheap to clone; the inner reqwest client shares its connection pool
/// across clones.
#[derive(Clone)]
pub struct ContentClient {
    endpoints: ContentEndpoints,
    http: Client,
}

impl ContentClient {
    pub fn new(endpoints: ContentEndpoints) -> Self {
        Self {
            endpoints,
            http: Client::new(),
        }
    }

    /// Fetch and decode the sports catalog
    pub async fn fetch_sports_catalog(&self) -> Result<SportsCatalog, reqwest::Error> {
        self.http
            .get(&self.endpoints.sports_catalog)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch and decode the exercise catalog
    pub async fn fetch_exercise_catalog(&self) -> Result<ExerciseCatalog, reqwest::Error> {
        self.http
            .get(&self.endpoints.exercise_catalog)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Relay a contact form submission to the form service
    pub async fn submit_contact_form(&self, payload: &Value) -> Result<(), ServiceError> {
        self.post_form(&self.endpoints.contact_form, payload).await
    }

    /// Relay a newsletter signup to the form service
    pub async fn submit_newsletter_form(&self, payload: &Value) -> Result<(), ServiceError> {
        self.post_form(&self.endpoints.newsletter_form, payload).await
    }

    /// POST a JSON payload to a form service endpoint
    ///
    /// Any failure, network or non-2xx, collapses into `FormRelay`; the
    /// caller has nothing useful to do with the distinction.
    async fn post_form(&self, endpoint: &str, payload: &Value) -> Result<(), ServiceError> {
        let response = self
            .http
            .post(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Form service unreachable: {}", e);
                ServiceError::FormRelay
            })?;

        if !response.status().is_success() {
            tracing::warn!("Form service rejected submission: {}", response.status());
            return Err(ServiceError::FormRelay);
        }

        Ok(())
    }
}
