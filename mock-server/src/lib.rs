use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

pub type Db = Arc<Vec<Comment>>;

/// Body served by `/malformed/comments`: truncated mid-array.
pub const MALFORMED_BODY: &str = r#"[{"postId":1,"id":1,"name":"cut off""#;

/// The list served by `app()`, shaped like the first jsonplaceholder entries.
pub fn fixture() -> Vec<Comment> {
    vec![
        Comment {
            post_id: 1,
            id: 1,
            name: "id labore ex et quam laborum".to_string(),
            email: "Eliseo@gardner.biz".to_string(),
            body: "laudantium enim quasi est quidem magnam voluptate ipsam eos".to_string(),
        },
        Comment {
            post_id: 1,
            id: 2,
            name: "quo vero reiciendis velit similique earum".to_string(),
            email: "Jayne_Kuhic@sydney.com".to_string(),
            body: "est natus enim nihil est dolore omnis voluptatem numquam".to_string(),
        },
        Comment {
            post_id: 1,
            id: 3,
            name: "odio adipisci rerum aut animi".to_string(),
            email: "Nikita@garfield.biz".to_string(),
            body: "quia molestiae reprehenderit quasi aspernatur aut expedita".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(fixture())
}

pub fn app_with(comments: Vec<Comment>) -> Router {
    let db: Db = Arc::new(comments);
    Router::new()
        .route("/comments", get(list_comments))
        .route("/malformed/comments", get(malformed_comments))
        .route("/unavailable/comments", get(unavailable_comments))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    tracing::debug!(count = db.len(), "serving comments");
    Json(db.as_ref().clone())
}

async fn malformed_comments() -> (StatusCode, &'static str) {
    (StatusCode::OK, MALFORMED_BODY)
}

async fn unavailable_comments() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "service unavailable")
}
