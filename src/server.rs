use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{
    ApiLoginResponse, ApiPredictRequest, ApiPredictResponse, ApiSplitRequest, ApiSplitResponse,
};
use tweetcast::banding::compare;
use tweetcast::config::{AppConfig, AuthConfig};
use tweetcast::predict_client::{PredictClient, PredictError};
use tweetcast::{auth, band_counts};

#[derive(Clone)]
struct AppState {
    client: PredictClient,
    auth: AuthConfig,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = AppConfig::load(None)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::info!(path = %path.display(), "loaded config");
    }

    let client = PredictClient::from_config(&config).map_err(|err| err.to_string())?;
    let state = AppState {
        client,
        auth: config.auth,
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login-url", get(login_url_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/predict/split", post(split_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "tweetcast server listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn login_url_handler(State(state): State<AppState>) -> Json<ApiLoginResponse> {
    let challenge = auth::login_challenge(&state.auth);
    Json(ApiLoginResponse {
        url: challenge.url,
        verifier: challenge.verifier,
        state: challenge.state,
    })
}

async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPredictRequest>,
) -> Result<Json<ApiPredictResponse>, (StatusCode, String)> {
    let features = request
        .into_features(Utc::now())
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let counts = state
        .client
        .predict(&features)
        .await
        .map_err(upstream_error)?;

    Ok(Json(ApiPredictResponse::from_card(band_counts(&counts))))
}

async fn split_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiSplitRequest>,
) -> Result<Json<ApiSplitResponse>, (StatusCode, String)> {
    // Both drafts must be valid before either upstream call goes out.
    let now = Utc::now();
    let features_a = request
        .tweet_a
        .into_features(now)
        .map_err(|err| (StatusCode::BAD_REQUEST, format!("tweet_a: {}", err)))?;
    let features_b = request
        .tweet_b
        .into_features(now)
        .map_err(|err| (StatusCode::BAD_REQUEST, format!("tweet_b: {}", err)))?;

    // Two independent predictions with no ordering dependency.
    let (counts_a, counts_b) = tokio::join!(
        state.client.predict(&features_a),
        state.client.predict(&features_b)
    );
    let counts_a = counts_a.map_err(upstream_error)?;
    let counts_b = counts_b.map_err(upstream_error)?;

    Ok(Json(ApiSplitResponse::from_outcome(compare(
        &counts_a, &counts_b,
    ))))
}

fn upstream_error(err: PredictError) -> (StatusCode, String) {
    tracing::warn!(error = %err, "prediction call failed");
    (StatusCode::BAD_GATEWAY, err.to_string())
}
