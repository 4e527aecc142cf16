//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use lectern::Trace;
#[cfg(debug_assertions)]
use lectern::doc::ApiDoc;
use lectern::inbound::http::health::{HealthState, live, ready};
use lectern::inbound::http::pages::PageRenderer;
use lectern::inbound::http::session_config::SessionSettings;
use lectern::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    pages: web::Data<PageRenderer>,
    session: SessionSettings,
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
        pages,
        session,
    } = deps;

    let site = web::scope("")
        .wrap(session.middleware())
        .configure(lectern::inbound::http::configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(pages)
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.service(site)
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when the templates fail to compile or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(config.data_dir()));
    let pages = web::Data::new(PageRenderer::new().map_err(|err| {
        std::io::Error::other(format!("failed to compile templates: {err}"))
    })?);
    let ServerConfig {
        session,
        bind_addr,
        data_dir,
    } = config;
    let server_health_state = health_state.clone();

    info!(host = %bind_addr.0, port = bind_addr.1, data_dir = %data_dir.display(), "starting server");
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            pages: pages.clone(),
            session: session.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
