use contracts::shared::{Collection, EntityCollection, PageQuery};
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use super::error::{classify_response, ApiError, ApiResult};
use crate::config::AppConfig;
use crate::system::auth::session::SessionManager;

/// HTTP client bound to the backend base URL and the current session.
///
/// Constructed once in `App` and provided through context.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: SessionManager,
}

/// Get the `ApiClient` provided by `App`
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided in context")
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: SessionManager) -> Self {
        Self {
            base: format!("{}{}", config.api_base(), config.api.prefix),
            session,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.authorized(Request::get(&self.url(path))).build();
        self.dispatch(request, true).await
    }

    /// Fetch one page of a list endpoint whose rows live under `data.<collection>`.
    pub async fn get_page<T>(&self, path: &str, query: &PageQuery) -> ApiResult<Collection<T>>
    where
        T: EntityCollection + DeserializeOwned,
    {
        let query_string = serde_qs::to_string(query)
            .map_err(|e| ApiError::Transport(format!("Failed to encode query: {}", e)))?;
        self.get(&format!("{}?{}", path, query_string)).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = self.authorized(Request::post(&self.url(path))).json(body);
        self.dispatch(request, true).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = self.authorized(Request::put(&self.url(path))).json(body);
        self.dispatch(request, true).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = self.authorized(Request::patch(&self.url(path))).json(body);
        self.dispatch(request, true).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.authorized(Request::delete(&self.url(path))).build();
        self.dispatch(request, true).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: FormData) -> ApiResult<T> {
        let request = self.authorized(Request::post(&self.url(path))).body(form);
        self.dispatch(request, true).await
    }

    /// POST without the bearer token (login)
    pub async fn post_public<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = Request::post(&self.url(path)).json(body);
        self.dispatch(request, false).await
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send, classify and log. A 401 on a public call is a plain rejection
    /// (wrong credentials), not an expired session.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo_net::Error>,
        authenticated: bool,
    ) -> ApiResult<T> {
        let outcome = match request {
            Ok(request) => {
                let url = request.url();
                match request.send().await {
                    Ok(response) => {
                        let status = response.status();
                        match response.text().await {
                            Ok(body) => Ok((status, body)),
                            Err(e) => Err(format!("Failed to read response from {}: {}", url, e)),
                        }
                    }
                    Err(e) => Err(format!("Failed to send request to {}: {}", url, e)),
                }
            }
            Err(e) => Err(format!("Failed to build request: {}", e)),
        };

        let result = match classify_response::<T>(outcome) {
            Err(ApiError::SessionExpired(message)) if !authenticated => Err(ApiError::Business(message)),
            other => other,
        };
        match &result {
            Err(ApiError::SessionExpired(message)) => {
                log::warn!("session expired: {}", message);
                self.session.expire();
            }
            Err(ApiError::Transport(message)) => log::warn!("transport error: {}", message),
            Err(ApiError::Business(message)) => log::debug!("backend rejected request: {}", message),
            Ok(_) => {}
        }
        result
    }
}
