//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    http::HeaderValue,
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CategoryService, DestinationService, IdentityService, ItineraryService};
use crate::config::{AppConfig, CorsConfig};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::interfaces::http::common::{ErrorResponse, FieldErrorsResponse, MessageResponse};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, categories, destinations, health, itineraries, metrics, request_id,
};

/// Unified router state. Each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: Arc<IdentityService>,
    pub categories: Arc<CategoryService>,
    pub destinations: Arc<DestinationService>,
    pub itineraries: Arc<ItineraryService>,
    pub prometheus: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

impl AppState {
    /// Wire repositories and services over one connection pool.
    pub fn new(db: DatabaseConnection, config: &AppConfig, prometheus: PrometheusHandle) -> Self {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        Self {
            identity: Arc::new(IdentityService::new(
                repos.clone(),
                JwtConfig::from(&config.security),
                config.security.bcrypt_cost,
            )),
            categories: Arc::new(CategoryService::new(repos.clone())),
            destinations: Arc::new(DestinationService::new(repos.clone())),
            itineraries: Arc::new(ItineraryService::new(repos)),
            db,
            prometheus,
            started_at: Arc::new(Instant::now()),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        AuthState {
            identity: Arc::clone(&s.identity),
        }
    }
}

impl FromRef<AppState> for auth::AuthHandlerState {
    fn from_ref(s: &AppState) -> Self {
        auth::AuthHandlerState {
            identity: Arc::clone(&s.identity),
        }
    }
}

impl FromRef<AppState> for categories::CategoryHandlerState {
    fn from_ref(s: &AppState) -> Self {
        categories::CategoryHandlerState {
            service: Arc::clone(&s.categories),
        }
    }
}

impl FromRef<AppState> for destinations::DestinationHandlerState {
    fn from_ref(s: &AppState) -> Self {
        destinations::DestinationHandlerState {
            service: Arc::clone(&s.destinations),
        }
    }
}

impl FromRef<AppState> for itineraries::ItineraryHandlerState {
    fn from_ref(s: &AppState) -> Self {
        itineraries::ItineraryHandlerState {
            service: Arc::clone(&s.itineraries),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for metrics::MetricsState {
    fn from_ref(s: &AppState) -> Self {
        metrics::MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /register or /login"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::current_user,
        auth::logout,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Destinations
        destinations::list_destinations,
        destinations::get_destination,
        destinations::create_destination,
        // Itineraries
        itineraries::list_itineraries,
        itineraries::get_itinerary,
        itineraries::itineraries_by_category,
        itineraries::search_itineraries,
        itineraries::my_itineraries,
        itineraries::to_visit,
        itineraries::create_itinerary,
        itineraries::update_itinerary,
        itineraries::delete_itinerary,
        itineraries::add_to_visit,
        itineraries::remove_to_visit,
        itineraries::top_itineraries,
        itineraries::count_by_category,
    ),
    components(
        schemas(
            // Common
            ErrorResponse,
            FieldErrorsResponse,
            MessageResponse,
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::UserDto,
            auth::RegisterResponse,
            auth::TokenResponse,
            auth::UserResponse,
            // Categories
            categories::CategoryRequest,
            categories::CategoryDto,
            categories::CategoryListResponse,
            categories::CategoryResponse,
            categories::CategoryMutationResponse,
            // Destinations
            destinations::CreateDestinationRequest,
            destinations::DestinationDto,
            destinations::DestinationListResponse,
            destinations::DestinationResponse,
            destinations::DestinationCreatedResponse,
            // Itineraries
            itineraries::DestinationEntry,
            itineraries::ItineraryRequest,
            itineraries::ItineraryDto,
            itineraries::ItineraryMutationResponse,
            itineraries::DestinationSummaryDto,
            itineraries::ItinerarySummaryDto,
            itineraries::ItinerarySummaryResponse,
            itineraries::GroupedItinerariesResponse,
            itineraries::PopularItineraryDto,
            itineraries::TopItinerariesResponse,
            itineraries::CategoryCountDto,
            itineraries::CategoryCountsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Registration, JWT login, profile and logout"),
        (name = "Categories", description = "Itinerary categories"),
        (name = "Destinations", description = "Reusable destinations"),
        (name = "Itineraries", description = "Itineraries, to-visit list and reports"),
    ),
    info(
        title = "Itinerary API",
        version = "1.0.0",
        description = "REST API for sharing travel itineraries"
    )
)]
pub struct ApiDoc;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Create the API router with all routes
pub fn create_api_router(state: AppState, cors: &CorsConfig) -> Router {
    let auth_state = AuthState::from_ref(&state);

    // ── Public ─────────────────────────────────────────────────
    let public_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/categories", get(categories::list_categories))
        .route("/categories/{id}", get(categories::get_category))
        .route("/destinations", get(destinations::list_destinations))
        .route("/destinations/{id}", get(destinations::get_destination))
        .route("/itineraires", get(itineraries::list_itineraries))
        .route("/itineraires/top", get(itineraries::top_itineraries))
        .route(
            "/itineraires/categorie/count",
            get(itineraries::count_by_category),
        )
        .route(
            "/itineraires/categorie/{id}",
            get(itineraries::itineraries_by_category),
        )
        .route(
            "/itineraires/search/{term}",
            get(itineraries::search_itineraries),
        )
        .route("/itineraires/{id}", get(itineraries::get_itinerary));

    // ── Bearer token required ──────────────────────────────────
    let protected_routes = Router::new()
        .route("/user", get(auth::current_user))
        .route("/logout", get(auth::logout).post(auth::logout))
        .route("/categories", post(categories::create_category))
        .route("/categorie/add", post(categories::create_category))
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/destinations", post(destinations::create_destination))
        .route("/my-itineraires", get(itineraries::my_itineraries))
        .route("/itineraires/avisiter", get(itineraries::to_visit))
        .route("/itineraires/add", post(itineraries::create_itinerary))
        .route(
            "/itineraires/{id}",
            put(itineraries::update_itinerary).delete(itineraries::delete_itinerary),
        )
        .route(
            "/itineraires/{id}/visiter",
            get(itineraries::add_to_visit)
                .post(itineraries::add_to_visit)
                .delete(itineraries::remove_to_visit),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    // ── Operations ─────────────────────────────────────────────
    let ops_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(ops_routes)
        .with_state(state)
        .merge(swagger_routes)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_support::{test_db, TEST_BCRYPT_COST};

    async fn app() -> Router {
        let mut config = AppConfig::default();
        config.security.bcrypt_cost = TEST_BCRYPT_COST;
        let prometheus = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState::new(test_db().await, &config, prometheus);
        create_api_router(state, &config.cors)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn register(app: &Router, name: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/register",
            None,
            Some(json!({
                "name": name,
                "email": format!("{}@example.com", name),
                "password": "secret123"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["token"].as_str().unwrap().to_string()
    }

    async fn create_category(app: &Router, token: &str, titre: &str) -> i64 {
        let (status, body) = send(
            app,
            Method::POST,
            "/categorie/add",
            Some(token),
            Some(json!({ "titre": titre })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["categorie"]["id"].as_i64().unwrap()
    }

    fn itinerary_payload(titre: &str, category_id: i64, stops: &[&str]) -> Value {
        let destinations: Vec<Value> = stops
            .iter()
            .map(|nom| {
                json!({
                    "logement": format!("{} Hotel", nom),
                    "nom": nom,
                    "activite": "phosphate",
                    "plats": "tanjia"
                })
            })
            .collect();
        json!({
            "titre": titre,
            "duree": "5 days",
            "image": "youssoufia.png",
            "categorie_id": category_id,
            "destinations": destinations
        })
    }

    async fn create_itinerary(app: &Router, token: &str, payload: Value) -> i64 {
        let (status, body) =
            send(app, Method::POST, "/itineraires/add", Some(token), Some(payload)).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["message"], "Itinéraire created");
        body["itineraire"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn register_returns_user_and_token() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/register",
            None,
            Some(json!({"name": "hamza", "email": "hamza@example.com", "password": "secret123"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["email"], "hamza@example.com");
        assert!(body["user"].get("password_hash").is_none());
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_reported_on_the_email_field() {
        let app = app().await;
        register(&app, "hamza").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/register",
            None,
            Some(json!({"name": "other", "email": "hamza@example.com", "password": "secret123"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
    }

    #[tokio::test]
    async fn login_answers_203_with_token() {
        let app = app().await;
        register(&app, "hamza").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({"email": "hamza@example.com", "password": "secret123"})),
        )
        .await;
        assert_eq!(status, StatusCode::NON_AUTHORITATIVE_INFORMATION);
        assert!(body["token"].is_string());

        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({"email": "hamza@example.com", "password": "wrong-password"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn protected_routes_require_a_bearer_token() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/my-itineraires", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Missing authentication token");

        let (status, _) = send(&app, Method::GET, "/user", Some("not-a-jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logout_revokes_the_token() {
        let app = app().await;
        let token = register(&app, "hamza").await;

        let (status, body) = send(&app, Method::GET, "/user", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "hamza");

        let (status, body) = send(&app, Method::POST, "/logout", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully logged out");

        let (status, _) = send(&app, Method::GET, "/user", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn itinerary_is_created_and_read_back_grouped() {
        let app = app().await;
        let token = register(&app, "hamza").await;
        let category_id = create_category(&app, &token, "Monument").await;

        let id = create_itinerary(
            &app,
            &token,
            itinerary_payload(
                "Tour to Youssoufia",
                category_id,
                &["Youssoufia", "Safi", "Marrakech"],
            ),
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/itineraires", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let record = &body["itineraires"][id.to_string()];
        assert_eq!(record["titre"], "Tour to Youssoufia");
        assert_eq!(record["user_name"], "hamza");
        assert_eq!(record["category_name"], "Monument");
        assert_eq!(record["destinations"].as_array().unwrap().len(), 3);
        assert_eq!(record["destinations"][1]["nom"], "Safi");

        let (status, body) =
            send(&app, Method::GET, &format!("/itineraires/{}", id), None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["itineraire"]["itineraire_id"], id);

        let (_, body) = send(&app, Method::GET, "/itineraires/search/youssou", None, None).await;
        assert_eq!(body["itineraires"].as_object().unwrap().len(), 1);

        let (_, body) = send(&app, Method::GET, "/itineraires/search/agadir", None, None).await;
        assert!(body["itineraires"].as_object().unwrap().is_empty());

        let (_, body) = send(&app, Method::GET, "/my-itineraires", Some(&token), None).await;
        assert_eq!(body["itineraires"].as_object().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_itinerary_reports_every_field() {
        let app = app().await;
        let token = register(&app, "hamza").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/itineraires/add",
            Some(&token),
            Some(json!({
                "titre": "",
                "duree": "2 days",
                "image": "x.png",
                "categorie_id": 999,
                "destinations": [{"nom": "Safi"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let errors = body["errors"].as_object().unwrap();
        assert!(errors.contains_key("titre"));
        assert!(errors.contains_key("categorie_id"));
        assert!(errors.contains_key("destinations"));
        assert!(errors.contains_key("destinations.0.logement"));

        let (_, body) = send(&app, Method::GET, "/itineraires", None, None).await;
        assert!(body["itineraires"].as_object().unwrap().is_empty());
    }

    #[tokio::test]
    async fn only_the_owner_may_modify_an_itinerary() {
        let app = app().await;
        let owner = register(&app, "owner").await;
        let intruder = register(&app, "intruder").await;
        let category_id = create_category(&app, &owner, "Plage").await;
        let id = create_itinerary(
            &app,
            &owner,
            itinerary_payload("Coast", category_id, &["Safi", "Oualidia"]),
        )
        .await;
        let uri = format!("/itineraires/{}", id);

        let (status, _) = send(
            &app,
            Method::PUT,
            &uri,
            Some(&intruder),
            Some(itinerary_payload("Hijacked", category_id, &["A", "B"])),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, Method::DELETE, &uri, Some(&intruder), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(body["itineraire"]["titre"], "Coast");
        assert_eq!(body["itineraire"]["destinations"].as_array().unwrap().len(), 2);

        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(&owner),
            Some(itinerary_payload("Coast road", category_id, &["Essaouira", "Agadir", "Tiznit"])),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Itinéraire updated");

        let (_, body) = send(&app, Method::GET, &uri, None, None).await;
        let names: Vec<&str> = body["itineraire"]["destinations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["nom"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Essaouira", "Agadir", "Tiznit"]);

        let (status, _) = send(&app, Method::DELETE, &uri, Some(&owner), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn to_visit_list_and_reports() {
        let app = app().await;
        let token = register(&app, "hamza").await;
        let category_id = create_category(&app, &token, "Monument").await;
        create_category(&app, &token, "Empty").await;
        let id = create_itinerary(
            &app,
            &token,
            itinerary_payload("Tour to Youssoufia", category_id, &["Youssoufia", "Safi"]),
        )
        .await;
        let visit = format!("/itineraires/{}/visiter", id);

        let (status, body) = send(&app, Method::POST, &visit, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "itineraires avisiter created");

        // second bookmark is a no-op
        let (status, _) = send(&app, Method::GET, &visit, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/itineraires/avisiter", Some(&token), None).await;
        assert_eq!(body["itineraires"].as_object().unwrap().len(), 1);

        let (_, body) = send(&app, Method::GET, "/itineraires/top", None, None).await;
        assert_eq!(body["itineraires"][0]["id"], id);
        assert_eq!(body["itineraires"][0]["favoris_count"], 1);

        let (_, body) = send(&app, Method::GET, "/itineraires/categorie/count", None, None).await;
        let counts = body["itineraires"].as_array().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0]["titre"], "Monument");
        assert_eq!(counts[0]["itineraire_count"], 1);

        let (status, _) = send(&app, Method::DELETE, &visit, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::DELETE, &visit, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            send(&app, Method::POST, "/itineraires/999/visiter", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn category_in_use_cannot_be_deleted() {
        let app = app().await;
        let token = register(&app, "hamza").await;
        let category_id = create_category(&app, &token, "Monument").await;
        create_itinerary(
            &app,
            &token,
            itinerary_payload("Trip", category_id, &["Safi", "Rabat"]),
        )
        .await;

        let uri = format!("/categories/{}", category_id);
        let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categorie"]["titre"], "Monument");
    }

    #[tokio::test]
    async fn operational_endpoints_are_public() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let response = app
            .clone()
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/itineraires/add"].is_object());
        assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let app = app().await;
        let response = app
            .clone()
            .oneshot(
                Request::get("/categories")
                    .header(request_id::REQUEST_ID_HEADER, "trace-me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[request_id::REQUEST_ID_HEADER], "trace-me");
    }
}
