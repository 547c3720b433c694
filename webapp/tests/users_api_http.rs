//! Exercises the reqwest users adapter against a stub backend on loopback.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use url::Url;
use webapp::domain::ports::{UserDirectory, UserDirectoryError};
use webapp::domain::{UserDraft, UserId};
use webapp::outbound::users_api::HttpUserDirectory;

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    method: String,
    path: String,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct Journal(Arc<Mutex<Vec<Recorded>>>);

impl Journal {
    fn record(&self, req: &HttpRequest, body: &web::Bytes) {
        let body = serde_json::from_slice(body).ok();
        self.0.lock().expect("journal lock").push(Recorded {
            method: req.method().to_string(),
            path: req.path().to_owned(),
            body,
        });
    }

    fn entries(&self) -> Vec<Recorded> {
        self.0.lock().expect("journal lock").clone()
    }
}

async fn handle(req: HttpRequest, body: web::Bytes, journal: web::Data<Journal>) -> HttpResponse {
    journal.record(&req, &body);
    let id = req.match_info().get("id").unwrap_or_default().to_owned();
    match (req.method().as_str(), id.as_str()) {
        ("GET", "") => HttpResponse::Ok().json(json!([
            {"id": 1, "name": "Alice", "email": "a@x.com"},
            {"id": "b2", "name": "Bob", "email": "bob@y.org"},
        ])),
        ("GET", "1") => {
            HttpResponse::Ok().json(json!({"id": 1, "name": "Alice", "email": "a@x.com"}))
        }
        ("GET", "gone") => HttpResponse::NotFound().json(json!({})),
        ("GET", _) => HttpResponse::Ok().json(json!({})),
        ("POST", "") => HttpResponse::Created().json(json!({"id": 3})),
        ("PUT", _) => HttpResponse::Ok().finish(),
        ("DELETE", "500") => HttpResponse::InternalServerError().body("kaput"),
        ("DELETE", _) => HttpResponse::Ok().finish(),
        _ => HttpResponse::MethodNotAllowed().finish(),
    }
}

async fn start_backend(prefix: &'static str) -> (SocketAddr, Journal) {
    let journal = Journal::default();
    let data = web::Data::new(journal.clone());
    let server = HttpServer::new(move || {
        App::new().app_data(data.clone()).service(
            web::scope(prefix)
                .route("/users", web::to(handle))
                .route("/users/{id}", web::to(handle)),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub backend");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (addr, journal)
}

fn client(addr: SocketAddr, prefix: &str) -> HttpUserDirectory {
    let base = Url::parse(&format!("http://{addr}{prefix}")).expect("base url");
    HttpUserDirectory::new(base, Duration::from_secs(5)).expect("client")
}

#[actix_web::test]
async fn lists_users_in_backend_order() {
    let (addr, journal) = start_backend("").await;
    let users = client(addr, "").list_users().await.expect("list");

    let ids: Vec<_> = users.iter().map(|user| user.id().clone()).collect();
    assert_eq!(ids, vec![UserId::Number(1), UserId::Text("b2".into())]);
    assert_eq!(journal.entries().len(), 1);
}

#[actix_web::test]
async fn get_user_treats_empty_object_and_404_as_absent() {
    let (addr, journal) = start_backend("").await;
    let directory = client(addr, "");

    let found = directory.get_user(&UserId::Number(1)).await.expect("get");
    assert_eq!(found.map(|user| user.name().to_owned()), Some("Alice".into()));
    assert_eq!(
        directory.get_user(&UserId::Number(7)).await.expect("get"),
        None
    );
    assert_eq!(
        directory
            .get_user(&UserId::Text("gone".into()))
            .await
            .expect("get"),
        None
    );
    assert_eq!(journal.entries().len(), 3);
}

#[actix_web::test]
async fn create_posts_name_and_email_only() {
    let (addr, journal) = start_backend("/api").await;
    client(addr, "/api/")
        .create_user(&UserDraft::new("Ann", "ann@x.io"))
        .await
        .expect("create");

    assert_eq!(
        journal.entries(),
        vec![Recorded {
            method: "POST".into(),
            path: "/api/users".into(),
            body: Some(json!({"name": "Ann", "email": "ann@x.io"})),
        }]
    );
}

#[actix_web::test]
async fn update_puts_full_record_to_its_id() {
    let (addr, journal) = start_backend("").await;
    let draft = webapp::domain::User::new(UserId::Number(4), "Old", "old@x.io")
        .revise("New", "new@x.io");
    client(addr, "").update_user(&draft).await.expect("update");

    assert_eq!(
        journal.entries(),
        vec![Recorded {
            method: "PUT".into(),
            path: "/users/4".into(),
            body: Some(json!({"id": 4, "name": "New", "email": "new@x.io"})),
        }]
    );
}

#[actix_web::test]
async fn update_without_id_sends_nothing() {
    let (addr, journal) = start_backend("").await;
    let error = client(addr, "")
        .update_user(&UserDraft::new("Ann", "ann@x.io"))
        .await
        .expect_err("missing id");

    assert!(matches!(error, UserDirectoryError::InvalidRequest { .. }));
    assert!(journal.entries().is_empty());
}

#[actix_web::test]
async fn delete_failure_reports_status_once() {
    let (addr, journal) = start_backend("").await;
    let error = client(addr, "")
        .delete_user(&UserId::Number(500))
        .await
        .expect_err("backend failure");

    assert_eq!(
        error,
        UserDirectoryError::status(500_u16, "kaput")
    );
    assert_eq!(journal.entries().len(), 1, "failed calls are not retried");
}

#[actix_web::test]
async fn unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let error = client(addr, "").list_users().await.expect_err("nothing listening");
    assert!(matches!(error, UserDirectoryError::Transport { .. }));
}
