//! reqwest-backed catalog client

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{Directory, UpstreamError, PERSONS, PROFESSIONS, STATUSES};
use crate::config::UpstreamConfig;
use crate::models::{Person, Profession, Status};

/// Fetches full collections from the configured catalog URLs.
///
/// Built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    http: Client,
    endpoints: UpstreamConfig,
}

impl HttpDirectory {
    pub fn new(endpoints: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .user_agent(concat!("persona-profesion/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, endpoints))
    }

    pub fn with_client(http: Client, endpoints: UpstreamConfig) -> Self {
        Self { http, endpoints }
    }

    /// GET a JSON array; transport errors, non-2xx statuses, and undecodable
    /// bodies all map to [`UpstreamError::Http`].
    async fn fetch<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
    ) -> Result<Vec<T>, UpstreamError> {
        tracing::debug!(service, url, "fetching upstream collection");

        let wrap = |error: reqwest::Error| UpstreamError::Http { service, error };

        self.http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(wrap)?
            .json::<Vec<T>>()
            .await
            .map_err(wrap)
    }
}

#[async_trait]
impl Directory for HttpDirectory {
    async fn persons(&self) -> Result<Vec<Person>, UpstreamError> {
        self.fetch(PERSONS, &self.endpoints.persons_url).await
    }

    async fn professions(&self) -> Result<Vec<Profession>, UpstreamError> {
        self.fetch(PROFESSIONS, &self.endpoints.professions_url).await
    }

    async fn statuses(&self) -> Result<Vec<Status>, UpstreamError> {
        self.fetch(STATUSES, &self.endpoints.statuses_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::fetch_snapshot;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    /// Serve fake catalogs on an ephemeral port and return the base URL.
    async fn spawn_catalogs() -> String {
        let app = Router::new()
            .route(
                "/personas",
                get(|| async {
                    Json(json!([{
                        "id_persona": "p1",
                        "nombre": "Ana",
                        "apellido_paterno": "Lopez",
                        "apellido_materno": "Diaz"
                    }]))
                }),
            )
            .route(
                "/profesiones",
                get(|| async { Json(json!([{"id_profesion": "f1", "nombre": "Ingeniero"}])) }),
            )
            .route(
                "/estatus",
                get(|| async { Json(json!([{"idStatus": "s1", "nombre": "Activo"}])) }),
            )
            .route(
                "/roto",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/no-json",
                get(|| async { "definitely not json" }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn endpoints(base: &str) -> UpstreamConfig {
        UpstreamConfig {
            persons_url: format!("{}/personas", base),
            professions_url: format!("{}/profesiones", base),
            statuses_url: format!("{}/estatus", base),
        }
    }

    #[tokio::test]
    async fn fetches_all_catalogs() {
        let base = spawn_catalogs().await;
        let directory = HttpDirectory::new(endpoints(&base)).unwrap();

        let snapshot = fetch_snapshot(&directory).await.unwrap();
        assert_eq!(snapshot.persons[0].full_name(), "Ana Lopez Diaz");
        assert_eq!(snapshot.professions[0].display_name(), "Ingeniero");
        assert_eq!(snapshot.statuses[0].display_name(), "Activo");
    }

    #[tokio::test]
    async fn server_error_is_dependency_failure() {
        let base = spawn_catalogs().await;
        let mut config = endpoints(&base);
        config.statuses_url = format!("{}/roto", base);
        let directory = HttpDirectory::new(config).unwrap();

        let err = fetch_snapshot(&directory).await.unwrap_err();
        assert_eq!(err.service(), Some(STATUSES));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn undecodable_body_is_dependency_failure() {
        let base = spawn_catalogs().await;
        let mut config = endpoints(&base);
        config.professions_url = format!("{}/no-json", base);
        let directory = HttpDirectory::new(config).unwrap();

        let err = directory.professions().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Http { service: PROFESSIONS, .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_dependency_failure() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let directory = HttpDirectory::new(endpoints(&format!("http://{}", addr))).unwrap();
        let err = directory.persons().await.unwrap_err();
        assert_eq!(err.service(), Some(PERSONS));
    }
}
