use actix_web::{web, App, HttpServer};
use league_backend::config::db::{db_kind_from_env, DbKind, RuntimeEnv};
use league_backend::infra::state::build_state;
use league_backend::middleware::cors::cors_middleware;
use league_backend::middleware::request_trace::RequestTrace;
use league_backend::middleware::structured_logger::StructuredLogger;
use league_backend::middleware::trace_span::TraceSpan;
use league_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables are provided by the runtime (docker env_file,
    // or sourced manually in local development).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let db_kind = match db_kind_from_env("LEAGUE_DB_KIND", DbKind::Postgres) {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "invalid LEAGUE_DB_KIND");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, db_kind = db_kind.as_str(), "starting league backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
