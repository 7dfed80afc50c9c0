//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use hpkeeper_shared::{
    CharacterData, DealDamageRequest, HealRequest, TemporaryHpRequest, CHARACTER_DEAD_MESSAGE,
};

use crate::app::App;
use crate::use_cases::hit_points::HitPointsError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/characters/deal-damage", post(deal_damage))
        .route("/api/characters/heal", post(heal))
        .route("/api/characters/add-temporary-hp", post(add_temporary_hp))
        .route("/api/characters/{name}", get(get_character))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Characters
// =============================================================================

async fn get_character(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<CharacterData>, ApiError> {
    let character = app
        .use_cases
        .hit_points
        .get
        .execute(&name)
        .await
        .map_err(|e| match e {
            HitPointsError::CharacterNotFound(_) => ApiError::NotFound(e.to_string()),
            HitPointsError::Repo(ref repo) => {
                tracing::error!(error = %repo, "Character lookup failed");
                ApiError::Internal(e.to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        })?;
    Ok(Json(CharacterData::from(&character)))
}

/// Deal damage. A lethal hit answers with the plain-text death message
/// instead of the character body.
async fn deal_damage(
    State(app): State<Arc<App>>,
    body: Result<Json<DealDamageRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    let result = app
        .use_cases
        .hit_points
        .deal_damage
        .execute(&request.name, request.damage_amount, &request.damage_type)
        .await?;

    if result.is_dead() {
        return Ok(CHARACTER_DEAD_MESSAGE.into_response());
    }
    Ok(Json(CharacterData::from(&result.character)).into_response())
}

async fn heal(
    State(app): State<Arc<App>>,
    body: Result<Json<HealRequest>, JsonRejection>,
) -> Result<Json<CharacterData>, ApiError> {
    let Json(request) = body?;
    let character = app
        .use_cases
        .hit_points
        .heal
        .execute(&request.name, request.heal_amount)
        .await?;
    Ok(Json(CharacterData::from(&character)))
}

async fn add_temporary_hp(
    State(app): State<Arc<App>>,
    body: Result<Json<TemporaryHpRequest>, JsonRejection>,
) -> Result<Json<CharacterData>, ApiError> {
    let Json(request) = body?;
    let character = app
        .use_cases
        .hit_points
        .temporary_hit_points
        .execute(&request.name, request.temp_hp_amount)
        .await?;
    Ok(Json(CharacterData::from(&character)))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

/// Every mutation failure is a bad request carrying the error message.
impl From<HitPointsError> for ApiError {
    fn from(e: HitPointsError) -> Self {
        if let HitPointsError::Repo(ref repo) = e {
            tracing::error!(error = %repo, "Character store failure");
        }
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::memory::InMemoryCharacterRepo;
    use crate::infrastructure::ports::{CharacterRepo, MockCharacterRepo, RepoError};
    use crate::use_cases::hit_points::test_support::rob;

    async fn app_with_rob() -> Router {
        let repo = Arc::new(InMemoryCharacterRepo::new());
        repo.create(&rob()).await.unwrap();
        routes().with_state(Arc::new(App::new(repo)))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn deal_damage_returns_character_json() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(post_json(
                "/api/characters/deal-damage",
                json!({ "name": "Rob", "damageAmount": 10, "damageType": "Fire" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "name": "Rob",
                "hitPoints": 20,
                "tempHP": 5,
                "defenses": [
                    { "type": "fire", "defense": "resistance" },
                    { "type": "force", "defense": "immunity" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn lethal_damage_returns_death_message_and_persists() {
        let repo = Arc::new(InMemoryCharacterRepo::new());
        repo.create(&rob()).await.unwrap();
        let app = routes().with_state(Arc::new(App::new(repo.clone())));

        let response = app
            .oneshot(post_json(
                "/api/characters/deal-damage",
                json!({ "name": "Rob", "damageAmount": 30, "damageType": "thunder" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Your character is dead!");
        let stored = repo.get_by_name("Rob").await.unwrap().unwrap();
        assert_eq!(stored.hit_points(), 0);
    }

    #[tokio::test]
    async fn unknown_damage_type_is_bad_request() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(post_json(
                "/api/characters/deal-damage",
                json!({ "name": "Rob", "damageAmount": 5, "damageType": "plasma" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid damage type: plasma");
    }

    #[tokio::test]
    async fn unknown_character_is_bad_request_on_mutation() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(post_json(
                "/api/characters/heal",
                json!({ "name": "Briv", "healAmount": 5 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "Character with Name Briv not found."
        );
    }

    #[tokio::test]
    async fn heal_returns_updated_character() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(post_json(
                "/api/characters/heal",
                json!({ "name": "Rob", "healAmount": 10 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["hitPoints"], 30);
        assert_eq!(body["tempHP"], 10);
    }

    #[tokio::test]
    async fn add_temporary_hp_keeps_higher_value() {
        let app = app_with_rob().await;
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/characters/add-temporary-hp",
                json!({ "name": "Rob", "tempHPAmount": 15 }),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["tempHP"], 15);

        let response = app
            .oneshot(post_json(
                "/api/characters/add-temporary-hp",
                json!({ "name": "Rob", "tempHPAmount": 5 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["tempHP"], 15);
    }

    #[tokio::test]
    async fn negative_amount_is_bad_request() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(post_json(
                "/api/characters/heal",
                json!({ "name": "Rob", "healAmount": -5 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(post_json(
                "/api/characters/deal-damage",
                json!({ "name": "Rob", "damageAmount": "lots" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_character_returns_state() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(
                Request::get("/api/characters/Rob")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Rob");
        assert_eq!(body["hitPoints"], 20);
    }

    #[tokio::test]
    async fn get_missing_character_is_not_found() {
        let app = app_with_rob().await;
        let response = app
            .oneshot(
                Request::get("/api/characters/Briv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_failure_on_get_is_internal_error() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get_by_name()
            .returning(|_| Err(RepoError::database("get_by_name", "unavailable")));
        let app = routes().with_state(Arc::new(App::new(Arc::new(repo))));

        let response = app
            .oneshot(
                Request::get("/api/characters/Rob")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal error");
    }
}
