use crate::card::{GenerateRequest, GenerateResponse, ProxyCard, RerollRequest};
use crate::decklist::extract_identifiers;
use crate::error::{AppError, MISSING_REROLL_INPUT};
use crate::generator::ThematicGenerator;
use crate::scryfall::ScryfallClient;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const DEFAULT_THEME: &str = "default_theme";

/// Everything a request needs; built once in `main`, shared read-only.
pub struct AppState {
    pub lookup: ScryfallClient,
    pub generator: ThematicGenerator,
}

impl AppState {
    pub fn new(lookup: ScryfallClient) -> Self {
        AppState {
            lookup,
            generator: ThematicGenerator::default(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/deck/generate", post(generate_deck))
        .route("/api/card/reroll", post(reroll_card))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e.body_text())))
}

async fn generate_deck(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = parse_body(body)?;
    let decklist = request.decklist.unwrap_or_default();
    let theme = request.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());

    let identifiers = extract_identifiers(&decklist)?;
    tracing::info!(
        "Generating {} card(s) with theme {:?}",
        identifiers.len(),
        theme
    );

    let collection = state.lookup.fetch_collection(&identifiers).await?;
    if !collection.not_found.is_empty() {
        tracing::info!("{} card(s) not found", collection.not_found.len());
    }

    Ok(Json(GenerateResponse {
        generated_cards: state.generator.generate(&collection.data, &theme),
        not_found: collection.not_found,
    }))
}

async fn reroll_card(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RerollRequest>, JsonRejection>,
) -> Result<Json<ProxyCard>, AppError> {
    let request = parse_body(body)?;
    let original = request.card.and_then(|card| card.original_card);
    let theme = request.theme.filter(|theme| !theme.is_empty());

    let (original, theme) = match (original, theme) {
        (Some(original), Some(theme)) => (original, theme),
        _ => return Err(AppError::validation(MISSING_REROLL_INPUT)),
    };

    tracing::debug!("Rerolling {:?} with theme {:?}", original.name, theme);

    state
        .generator
        .generate(&[original], &theme)
        .into_iter()
        .next()
        .map(Json)
        .ok_or(AppError::GenerationFailed)
}
