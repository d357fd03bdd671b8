//! Service entry-point: wires the Diesel store, domain service, and REST
//! endpoints.

use std::env;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use fruit_service::Trace;
use fruit_service::domain::FruitService;
use fruit_service::inbound::http::fruits::{
    create_fruit, delete_fruit, get_fruit, list_fruits, update_fruit,
};
use fruit_service::inbound::http::state::HttpState;
use fruit_service::outbound::persistence::{DbPool, DieselFruitRepository, PoolConfig};

fn pool_config_from_env() -> std::io::Result<PoolConfig> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    let mut config = PoolConfig::new(database_url);

    if let Ok(raw) = env::var("FRUITS_POOL_MAX") {
        match raw.parse::<u32>() {
            Ok(max_size) => config = config.with_max_size(max_size),
            Err(e) => warn!(value = %raw, error = %e, "ignoring invalid FRUITS_POOL_MAX"),
        }
    }

    Ok(config)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("FRUITS_BIND").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let pool = DbPool::new(pool_config_from_env()?)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let service = Arc::new(FruitService::new(Arc::new(DieselFruitRepository::new(pool))));
    let state = HttpState::new(service.clone(), service);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Trace)
            .service(list_fruits)
            .service(get_fruit)
            .service(create_fruit)
            .service(update_fruit)
            .service(delete_fruit)
    })
    .bind(bind_addr)?
    .run()
    .await
}
