use crate::errors::AppError;
use crate::models::{StatsResponse, VisitSnapshot};
use crate::state::AppState;
use crate::ui::{render_blog_archive, render_home};
use axum::{
    Extension, Json,
    extract::{Query, Request, State},
    middleware::Next,
    response::{Html, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

// Registered once on the page router; fires for every tracked navigation.
pub async fn track_visits(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let snapshot = {
        let mut counter = state.counter.lock().await;
        counter.record_visit(&path, today()).await
    };
    request.extensions_mut().insert(snapshot);
    next.run(request).await
}

pub async fn home(
    State(state): State<AppState>,
    Extension(snapshot): Extension<VisitSnapshot>,
) -> Html<String> {
    Html(render_home(&state.config, snapshot))
}

pub async fn blog_archive(
    State(state): State<AppState>,
    Extension(snapshot): Extension<VisitSnapshot>,
) -> Html<String> {
    Html(render_blog_archive(&state.config, snapshot))
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub path: Option<String>,
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let path = query.path.unwrap_or_else(|| "/".to_string());
    if !path.starts_with('/') {
        return Err(AppError::bad_request("path must start with '/'"));
    }

    let day = today();
    let snapshot = state.counter.lock().await.snapshot(&path, day).await;

    Ok(Json(StatsResponse {
        date: day.to_string(),
        path,
        page_views: snapshot.page_views,
        total_views: snapshot.total_views,
    }))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
