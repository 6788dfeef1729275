//! 애플리케이션 전체 설정
//!
//! 시작 시 한 번 [`AppConfig`]를 만들고, 필요한 하위 설정을 각 구성 요소에 넘깁니다.

use phonenumber::country;
use thiserror::Error;

use super::data_config::{
    parse_or, DatabaseConfig, EnvLookup, Environment, PasswordConfig, ServerConfig,
};
use crate::domain::validation::birthdate::DEFAULT_MINIMUM_AGE;
use crate::domain::validation::PhoneFormat;

/// 설정 로드 오류
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("잘못된 설정값 {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND`(기본값 100), `RATE_LIMIT_BURST_SIZE`(기본값 200)
    pub fn from_source(lookup: EnvLookup<'_>) -> Self {
        Self {
            per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 허용 Origin 목록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8000",
        "http://127.0.0.1:8000",
    ];

    /// `CORS_ALLOWED_ORIGINS`는 쉼표로 구분합니다.
    pub fn from_source(lookup: EnvLookup<'_>) -> Self {
        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Self { allowed_origins }
    }
}

/// 회원가입 검증 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// 국가 코드 없이 입력된 전화번호를 해석할 기본 국가
    pub phone_region: country::Id,
    pub phone_format: PhoneFormat,
    pub minimum_age: u32,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            phone_region: country::Id::BR,
            phone_format: PhoneFormat::Echo,
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }
}

impl RegistrationPolicy {
    /// `PHONE_DEFAULT_REGION`(기본값 BR), `PHONE_OUTPUT_FORMAT`(echo|e164), `MINIMUM_AGE`(기본값 14)
    pub fn from_source(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let phone_region = match lookup("PHONE_DEFAULT_REGION") {
            Some(raw) => raw
                .trim()
                .to_uppercase()
                .parse::<country::Id>()
                .map_err(|_| ConfigError::Invalid {
                    key: "PHONE_DEFAULT_REGION",
                    reason: format!("알 수 없는 국가 코드: {}", raw),
                })?,
            None => defaults.phone_region,
        };

        let phone_format = match lookup("PHONE_OUTPUT_FORMAT") {
            Some(raw) => raw.parse::<PhoneFormat>().map_err(|reason| ConfigError::Invalid {
                key: "PHONE_OUTPUT_FORMAT",
                reason,
            })?,
            None => defaults.phone_format,
        };

        Ok(Self {
            phone_region,
            phone_format,
            minimum_age: parse_or(lookup, "MINIMUM_AGE", defaults.minimum_age),
        })
    }
}

/// 애플리케이션 설정 묶음
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub registration: RegistrationPolicy,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 읽습니다.
    pub fn from_source(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_source(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_source(lookup),
            database: DatabaseConfig::from_source(lookup).map_err(|reason| {
                ConfigError::Invalid {
                    key: "STORAGE_BACKEND",
                    reason,
                }
            })?,
            password: PasswordConfig::from_source(lookup, environment),
            rate_limit: RateLimitConfig::from_source(lookup),
            cors: CorsConfig::from_source(lookup),
            registration: RegistrationPolicy::from_source(lookup)?,
        })
    }
}
