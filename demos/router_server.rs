//! A small API served by the microroute-rs router.
//!
//! Run with `RUST_LOG=debug cargo run --example router_server` and try:
//!
//! ```text
//! curl http://127.0.0.1:8080/users/42
//! curl http://127.0.0.1:8080/users/7/posts/99
//! curl -X POST -H 'Content-Type: application/json' -d '{"name":"ada"}' http://127.0.0.1:8080/users
//! curl http://127.0.0.1:8080/nowhere
//! ```

use serde::{Deserialize, Serialize};
use microroute_rs::{HttpResponse, HttpServer, Router, ServerConfig, ServerError, StatusCode};

#[derive(Deserialize)]
struct NewUser {
    name: String,
}

#[derive(Serialize)]
struct User {
    id: u64,
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut router = Router::new();

    router.get("/", |_ctx| async {
        Ok(HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/html")
            .with_body_string("<html><body><h1>microroute-rs</h1></body></html>"))
    });

    // Registered before "/users/:id" so it takes precedence.
    router.get("/users/me", |_ctx| async {
        HttpResponse::new(StatusCode::Ok).with_json(&User { id: 0, name: "you".to_string() })
    });

    router.get("/users/:id", |ctx| async move {
        let id = ctx.param("id").unwrap_or_default();
        match id.parse::<u64>() {
            Ok(id) => HttpResponse::new(StatusCode::Ok).with_json(&User { id, name: format!("user-{id}") }),
            Err(_) => Ok(HttpResponse::text(StatusCode::BadRequest, format!("Invalid user id: {id}"))),
        }
    });

    // Echo every captured parameter back as JSON.
    router.get("/users/:uid/posts/:pid", |ctx| async move {
        HttpResponse::new(StatusCode::Ok).with_json(&ctx.params)
    });

    router.post("/users", |ctx| async move {
        let new_user: NewUser = match ctx.request.json() {
            Ok(user) => user,
            Err(e) => return Ok(HttpResponse::text(StatusCode::BadRequest, format!("Invalid user: {e}"))),
        };
        HttpResponse::new(StatusCode::Created).with_json(&User { id: 1, name: new_user.name })
    });

    router.delete("/users/:id", |_ctx| async { Ok(HttpResponse::new(StatusCode::NoContent)) });

    let server = HttpServer::new(ServerConfig::default(), router);
    server.start().await
}
