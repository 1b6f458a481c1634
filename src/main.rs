//! 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 인메모리 사용자 저장소를 생성해
//! 서비스에 주입하고, 사용자 CRUD REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use user_service_backend::config::AppConfig;
use user_service_backend::middlewares::RecoveryMiddleware;
use user_service_backend::repositories::users::{InMemoryUserRepository, UserRepository};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // RUST_LOG도 .env에서 올 수 있으므로 파일을 먼저 읽고 결과는 로거 초기화 후 기록
    let env_status = load_env_file();
    init_logging();
    info!("{}", env_status);

    info!("🚀 사용자 서비스 시작중...");

    let config = AppConfig::from_env();
    info!("설정 로드됨: {:?}", config);
    info!(
        "💾 인메모리 저장소 사용 (DB_MAX_CONNECTIONS={}는 영속 백엔드용)",
        config.database.max_connections
    );

    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let user_service = web::Data::new(UserService::new(user_repo));

    start_http_server(config, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 요청 로깅, 패닉 복구, 경로 정규화 미들웨어를 포함합니다.
/// SIGINT/SIGTERM을 받으면 `SERVER_SHUTDOWN_TIMEOUT` 동안 진행 중인 요청을 마무리합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    user_service: web::Data<UserService>,
) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/v1/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", config.rate_limit),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let cors_config = config.cors.clone();
    let server = &config.server;

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            // Logger 안쪽에 두어야 패닉으로 만든 500 응답도 기록됨
            .wrap(RecoveryMiddleware::new())
            .wrap(cors_config.build())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .client_request_timeout(server.read_timeout)
    .client_disconnect_timeout(server.write_timeout)
    .keep_alive(server.idle_timeout)
    .shutdown_timeout(shutdown_secs(server.shutdown_timeout))
    .workers(server.workers.max(1))
    .bind(&bind_address)?
    .run()
    .await?;

    info!("👋 서버가 정상적으로 종료되었습니다");
    Ok(())
}

/// 종료 대기 시간을 초 단위로 올림합니다
///
/// actix는 초 단위만 받으므로 `500ms`가 0초(즉시 종료)가 되지 않도록 합니다.
fn shutdown_secs(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드하고, 결과 메시지를 반환합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            return match dotenv() {
                Ok(_) => format!("Current profile: {} (기본 .env 파일 로드)", profile),
                Err(_) => format!("Current profile: {} (.env 파일 없음, 환경 변수만 사용)", profile),
            };
        }
    };

    match dotenv::from_filename(filename) {
        Ok(_) => format!("Current profile: {} ({} 파일 로드 됨)", profile, filename),
        Err(e) => format!("Current profile: {} ({} 파일 로드 실패: {})", profile, filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// ```bash
/// RUST_LOG=user_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
