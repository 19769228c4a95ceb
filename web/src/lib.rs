use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod state;

pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::login,
        features::auth::handlers::user_login,
        features::players::handlers::create_player,
        features::players::handlers::list_players,
        features::players::handlers::update_player,
        features::players::handlers::player_dashboard,
        features::partners::handlers::create_registration,
        features::partners::handlers::available_partners,
        features::partners::handlers::update_relationship,
        features::partners::handlers::register_events,
        features::partners::handlers::update_ranking,
        features::partners::handlers::delete_all,
        features::events::handlers::list_events,
        features::events::handlers::create_event,
        features::admin::handlers::list_registrations,
        features::admin::handlers::event_statistics,
        features::health::handlers::health_check,
    ),
    components(
        schemas(
            features::auth::handlers::AdminLoginRequest,
            features::auth::handlers::AdminUser,
            features::auth::handlers::LoginResponse,
            features::auth::handlers::UserLoginRequest,
            features::auth::handlers::UserLoginResponse,
            features::health::handlers::HealthResponse,
            storage::dto::player::CreatePlayerRequest,
            storage::dto::player::UpdatePlayerRequest,
            storage::dto::player::PlayerResponse,
            storage::dto::player::PlayerEventRow,
            storage::dto::player::DashboardResponse,
            storage::dto::partner::CreateRegistrationRequest,
            storage::dto::partner::UpdateRelationshipRequest,
            storage::dto::partner::RegisterEventsRequest,
            storage::dto::partner::UpdateRankingRequest,
            storage::dto::partner::AvailablePartner,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::admin::RegistrationRecord,
            storage::dto::common::MessageResponse,
            storage::dto::common::CreatedResponse,
            storage::dto::common::DeletedResponse,
            storage::models::Player,
            storage::models::Event,
            storage::models::Registration,
            storage::models::EventStatistics,
        )
    ),
    tags(
        (name = "auth", description = "Admin and player login"),
        (name = "players", description = "Player registration and dashboards"),
        (name = "partners", description = "Event registrations, pairings and rankings"),
        (name = "events", description = "Event catalogue"),
        (name = "admin", description = "Token-protected admin views"),
        (name = "health", description = "Liveness probe"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let auth = state.auth.clone();

    let api = Router::new()
        .nest("/auth", features::auth::routes::routes())
        .nest("/players", features::players::routes::routes(auth.clone()))
        .nest("/partners", features::partners::routes::routes())
        .nest("/events", features::events::routes::routes(auth.clone()))
        .nest("/admin", features::admin::routes::routes(auth))
        .merge(features::health::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(cors)
        .with_state(state)
}
