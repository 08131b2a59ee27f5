use actix_web::web;

pub mod health;
pub mod weekly;

/// Register every route on the given config. Shared by `main.rs` and the
/// integration tests so both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root and health check: /, /health
    cfg.configure(health::configure_routes);

    // Weekly scoring: /api/tournaments/{tournament_id}/**
    cfg.service(web::scope("/api/tournaments/{tournament_id}").configure(weekly::configure_routes));
}
