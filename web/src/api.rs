use gloo::net::http::Request;
use jeopardy_core::{GameError, Result, TriviaSource};
use jeopardy_protocol::{CATEGORIES_PATH, CATEGORY_PATH, CategoryDetails, CategoryId, CategorySummary};
use serde::de::DeserializeOwned;

/// [`TriviaSource`] talking JSON over HTTP to the trivia API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    base_url: String,
}

impl HttpTriviaSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(path);
        log::debug!("GET {} {:?}", url, query);

        let response = Request::get(&url)
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(into_game_error)?;

        if !response.ok() {
            return Err(GameError::NetworkFailure(format!(
                "{} answered {} {}",
                url,
                response.status(),
                response.status_text()
            )));
        }

        response.json::<T>().await.map_err(into_game_error)
    }
}

impl TriviaSource for HttpTriviaSource {
    async fn category_ids(&self, count: usize) -> Result<Vec<CategoryId>> {
        let listing: Vec<CategorySummary> = self
            .get_json(CATEGORIES_PATH, &[("count", count.to_string())])
            .await?;
        Ok(listing.into_iter().map(|category| category.id).collect())
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetails> {
        self.get_json(CATEGORY_PATH, &[("id", id.to_string())])
            .await
    }
}

fn into_game_error(err: gloo::net::Error) -> GameError {
    match err {
        gloo::net::Error::SerdeError(err) => GameError::MalformedResponse(err.to_string()),
        err => GameError::NetworkFailure(err.to_string()),
    }
}
