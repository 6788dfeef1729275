//! 판매 관리 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 설정을 한 번 로드한 뒤
//! 사용자 저장소와 등록 서비스를 만들어 라우트에 주입합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use sales_manager_backend::config::{AppConfig, CorsConfig, StorageBackend};
use sales_manager_backend::db::Database;
use sales_manager_backend::domain::validation::RegistrationValidator;
use sales_manager_backend::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use sales_manager_backend::routes::configure_all_routes;
use sales_manager_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 판매 관리 백엔드 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("실행 환경: {:?}", config.environment);

    let user_repo = initialize_user_repository(&config).await?;

    let user_service = web::Data::new(UserService::new(
        user_repo,
        RegistrationValidator::from_policy(&config.registration),
        config.password.bcrypt_cost,
    ));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    user_service: web::Data<UserService>,
) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(config.server.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소 종류에 맞는 사용자 저장소를 만듭니다
///
/// MongoDB를 사용하는 경우 연결 확인 후 유일 인덱스를 생성합니다.
async fn initialize_user_repository(config: &AppConfig) -> io::Result<Arc<dyn UserRepository>> {
    match config.database.backend {
        StorageBackend::Memory => {
            info!("💾 메모리 저장소 사용");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&config.database).await.map_err(|e| {
                error!("MongoDB 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            let repo = MongoUserRepository::new(&database);
            repo.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(repo))
        }
    }
}

/// CORS 설정을 구성합니다
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .max_age(3600)
}
