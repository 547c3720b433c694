//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use webapp::Trace;
use webapp::inbound::http::health::{HealthState, live, ready};
use webapp::inbound::http::state::HttpState;
use webapp::inbound::http::user_forms::{
    add_user, add_user_page, edit_user, edit_user_page, view_user_page,
};
use webapp::inbound::http::users::{confirm_delete, delete_user, list_users};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(list_users)
        .service(add_user_page)
        .service(add_user)
        .service(edit_user_page)
        .service(edit_user)
        .service(view_user_page)
        .service(confirm_delete)
        .service(delete_user)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        users,
        redirect_after_save,
    } = config;
    let http_state = web::Data::new(
        HttpState::new(users, Arc::new(DefaultClock)).with_redirect_after_save(redirect_after_save),
    );

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "page server listening");
    health_state.mark_ready();
    Ok(server)
}
