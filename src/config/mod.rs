//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 [`AppConfig`] 하나로 모아 시작 시 한 번 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 비밀번호 해싱 설정
//! - [`app_config`] - Rate Limiting, CORS, 회원가입 검증 정책 및 전체 설정 묶음
//!
//! ## 설계 원칙
//!
//! - 전역 싱글톤 없이 `AppConfig`를 명시적으로 전달
//! - 숫자형 값의 파싱 실패는 로그를 남기고 기본값 사용
//! - 검증 정책(국가 코드, 출력 형식)의 잘못된 값은 [`ConfigError`]로 시작 실패
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경
//! export ENVIRONMENT="production"        # development, test, staging, production
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8000"
//! export WORKERS="4"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"         # mongo, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="sales_manager_dev"
//!
//! # 보안
//! export BCRYPT_COST="12"                # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//!
//! # 회원가입 검증 정책
//! export PHONE_DEFAULT_REGION="BR"
//! export PHONE_OUTPUT_FORMAT="echo"      # echo, e164
//! export MINIMUM_AGE="14"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct AppConfig` |
//! | `@Value("${property}")` | `lookup("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod app_config;
pub mod data_config;

pub use app_config::*;
pub use data_config::*;
