use dotenvy::dotenv;
use order_service::config::Settings;
use order_service::{build_server, create_pool, run_migrations};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    let pool = create_pool(&settings.database_url).map_err(std::io::Error::other)?;
    if settings.auto_migrate {
        run_migrations(&pool).map_err(std::io::Error::other)?;
    }

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(pool, &settings.host, settings.port)?.await?;

    log::info!("Server stopped, database pool closed");
    Ok(())
}
