use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use celebs_booking::db::{establish_connection_pool, run_migrations};
use celebs_booking::models::config::ServerConfig;
use celebs_booking::notifier::{EnquiryNotifier, LogNotifier, SmtpNotifier};
use celebs_booking::repository::DieselRepository;
use celebs_booking::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());
    let server_config = match ServerConfig::load(&app_env) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = run_migrations(&mut conn) {
                log::error!("Failed to run database migrations: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            std::process::exit(1);
        }
    }

    let notifier: Arc<dyn EnquiryNotifier> = match &server_config.smtp {
        Some(smtp) => match SmtpNotifier::from_config(smtp) {
            Ok(notifier) => {
                log::info!("Email notifications go to {}", smtp.notification_email);
                Arc::new(notifier)
            }
            Err(e) => {
                log::error!("Email service disabled, invalid SMTP settings: {e}");
                Arc::new(LogNotifier)
            }
        },
        None => {
            log::warn!("Email service not configured: missing smtp section");
            Arc::new(LogNotifier)
        }
    };

    if server_config.operator_token.is_empty() {
        log::warn!("No operator token configured; back-office endpoints are disabled");
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    let assets_dir = server_config.assets_dir.clone();
    let server_config = web::Data::new(server_config);
    let notifier = web::Data::from(notifier);

    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &assets_dir))
            .app_data(web::Data::new(repo.clone()))
            .app_data(server_config.clone())
            .app_data(notifier.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
