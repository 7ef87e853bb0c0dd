use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

/// Starts a pricing backend on an ephemeral port that answers every
/// `POST /quote` with `status` and `body`. Returns the quote URL.
pub fn spawn_backend(status: StatusCode, body: &'static str) -> String {
    let server = HttpServer::new(move || {
        App::new().route(
            "/quote",
            web::post().to(move || async move {
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/quote")
}

/// Starts a backend answering with an empty flat result whose note is the
/// JSON body it received.
#[allow(dead_code)]
pub fn spawn_echo_backend() -> String {
    let server = HttpServer::new(|| {
        App::new().route(
            "/quote",
            web::post().to(|body: web::Json<Value>| async move {
                HttpResponse::Ok().json(json!({"options": [], "note": body.0.to_string()}))
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/quote")
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn unreachable_backend() -> String {
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/quote")
}
