use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_video_handler, delete_video_handler, get_video_handler, health_handler,
    update_video_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/video/{id}",
                get(get_video_handler)
                    .put(create_video_handler)
                    .patch(update_video_handler)
                    .delete(delete_video_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
