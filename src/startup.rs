use crate::configuration::{Configuration, DatabaseConfigs};
use crate::repository::{CommentStore, PgCommentStore};
use crate::routes::{comment_routes, health_check};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&config.database);
        let store = PgCommentStore::new(connection_pool);

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();
        let server = run(listener, store).context("Failed to run Actix web server")?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        self.server.await.context("Server stopped with an error")
    }
}

// Connections are opened on first use; waiting for one is bounded by `acquire_timeout`
pub fn get_connection_pool(config: &DatabaseConfigs) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(config.connect_options())
}

/// Starts serving on `tcp_listener` with `store` behind the comment routes.
pub fn run<S: CommentStore>(tcp_listener: TcpListener, store: S) -> Result<Server, anyhow::Error> {
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_routes::<S>)
            .app_data(store.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes<S: CommentStore>(cfg: &mut web::ServiceConfig) {
    // Registered before `/{id}` so it is not read as a groomer id
    cfg.route("/health_check", web::get().to(health_check))
        .configure(comment_routes::<S>);
}
