//! JSON REST handlers for main types.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use oncotree_app::ports::MainTypeRepository;
use oncotree_domain::error::OncoTreeError;
use oncotree_domain::id::MainTypeId;
use oncotree_domain::main_type::MainType;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters shared by the main type endpoints.
///
/// `callback` is the legacy JSONP function name. It is accepted so old
/// clients don't break, but responses are always plain JSON.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub callback: Option<String>,
}

impl CallbackParams {
    /// Unwrap the query extraction, treating an unparsable query string as
    /// if no parameters were sent.
    fn or_ignored(params: Result<Query<Self>, QueryRejection>) -> Self {
        match params {
            Ok(Query(params)) => params,
            Err(rejection) => {
                tracing::debug!(%rejection, "ignoring unparsable query string");
                Self::default()
            }
        }
    }

    fn log_ignored(&self) {
        if let Some(callback) = &self.callback {
            tracing::debug!(%callback, "ignoring JSONP callback parameter");
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Envelope<Vec<MainType>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Envelope<MainType>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/mainTypes`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: MainTypeRepository + Send + Sync + 'static,
{
    CallbackParams::or_ignored(params).log_ignored();
    let main_types = state.main_type_service.list_main_types().await?;
    Ok(ListResponse::Ok(Json(Envelope::ok(main_types))))
}

/// `GET /api/mainTypes/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<GetResponse, ApiError>
where
    R: MainTypeRepository + Send + Sync + 'static,
{
    CallbackParams::or_ignored(params).log_ignored();
    let Path(id) = id?;
    let main_type_id: MainTypeId = id.parse().map_err(OncoTreeError::from)?;
    let main_type = state.main_type_service.get_main_type(main_type_id).await?;
    Ok(GetResponse::Ok(Json(Envelope::ok(main_type))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use oncotree_app::services::main_type_service::MainTypeService;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct VecRepo(Vec<MainType>);

    impl MainTypeRepository for VecRepo {
        async fn get_by_id(&self, id: MainTypeId) -> Result<Option<MainType>, OncoTreeError> {
            Ok(self.0.iter().find(|m| m.id == id).cloned())
        }
        async fn get_all(&self) -> Result<Vec<MainType>, OncoTreeError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("catalog unavailable")]
    struct Unavailable;

    struct BrokenRepo;

    impl MainTypeRepository for BrokenRepo {
        async fn get_by_id(&self, _id: MainTypeId) -> Result<Option<MainType>, OncoTreeError> {
            Err(OncoTreeError::Storage(Box::new(Unavailable)))
        }
        async fn get_all(&self) -> Result<Vec<MainType>, OncoTreeError> {
            Err(OncoTreeError::Storage(Box::new(Unavailable)))
        }
    }

    fn app_with<R>(repo: R) -> Router
    where
        R: MainTypeRepository + Send + Sync + 'static,
    {
        crate::router::build(AppState::new(MainTypeService::new(repo)))
    }

    fn sample_app() -> Router {
        app_with(VecRepo(vec![
            MainType::builder().id(1).name("Leukemia").build().unwrap(),
            MainType::builder().id(2).name("Lymphoma").build().unwrap(),
        ]))
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_list_all_main_types_in_envelope() {
        let (status, body) = call(sample_app(), "/api/mainTypes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "meta": {"code": 200},
                "data": [
                    {"id": 1, "name": "Leukemia"},
                    {"id": 2, "name": "Lymphoma"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn should_list_empty_array_when_catalog_empty() {
        let (status, body) = call(app_with(VecRepo(vec![])), "/api/mainTypes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn should_get_main_type_by_id() {
        let (status, body) = call(sample_app(), "/api/mainTypes/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"meta": {"code": 200}, "data": {"id": 2, "name": "Lymphoma"}})
        );
    }

    #[tokio::test]
    async fn should_ignore_jsonp_callback() {
        let (status, body) = call(sample_app(), "/api/mainTypes/1?callback=handle").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Leukemia");

        let (status, body) = call(sample_app(), "/api/mainTypes?callback=handle").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn should_return_not_found_envelope_for_absent_id() {
        let (status, body) = call(sample_app(), "/api/mainTypes/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["meta"]["code"], 404);
        assert_eq!(body["meta"]["error_type"], "NotFound");
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn should_return_bad_request_for_non_integer_id() {
        for uri in ["/api/mainTypes/xyz", "/api/mainTypes/1.5", "/api/mainTypes/99999999999"] {
            let (status, body) = call(sample_app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["meta"]["code"], 400);
            assert_eq!(body["meta"]["error_type"], "BadRequest");
        }
    }

    #[tokio::test]
    async fn should_ignore_repeated_callback_parameter() {
        for uri in [
            "/api/mainTypes?callback=a&callback=b",
            "/api/mainTypes/1?callback=a&callback=b",
        ] {
            let (status, body) = call(sample_app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["meta"]["code"], 200);
        }
    }

    #[tokio::test]
    async fn should_wrap_non_utf8_id_in_bad_request_envelope() {
        let (status, body) = call(sample_app(), "/api/mainTypes/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["meta"]["code"], 400);
        assert_eq!(body["meta"]["error_type"], "BadRequest");
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn should_hide_storage_details_behind_internal_error() {
        let (status, body) = call(app_with(BrokenRepo), "/api/mainTypes").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["meta"]["code"], 500);
        assert_eq!(body["meta"]["error_message"], "internal server error");

        let (status, _) = call(app_with(BrokenRepo), "/api/mainTypes/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
