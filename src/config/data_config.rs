//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 실행 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::str::FromStr;

use log::error;

/// 환경 변수 조회 함수 타입
///
/// 테스트에서는 `HashMap` 기반 조회 함수를, 실행 시에는 `std::env::var`를 사용합니다.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 숫자형 환경 변수를 읽고, 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn parse_or<T>(lookup: EnvLookup<'_>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    /// 알 수 없는 값은 `Production`으로 취급합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        })
    }
}

impl Environment {
    /// `ENVIRONMENT` 값을 읽습니다. 설정되지 않은 경우 `Production`입니다.
    pub fn from_source(lookup: EnvLookup<'_>) -> Self {
        lookup("ENVIRONMENT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 4-15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn from_source(lookup: EnvLookup<'_>, env: Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// `HOST`(기본값 0.0.0.0), `PORT`(기본값 8000), `WORKERS`(기본값 4)
    pub fn from_source(lookup: EnvLookup<'_>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 8000),
            workers: parse_or(lookup, "WORKERS", 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB `users` 컬렉션
    Mongo,
    /// 프로세스 메모리 (개발/테스트용)
    Memory,
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub uri: String,
    pub name: String,
}

impl DatabaseConfig {
    /// `STORAGE_BACKEND`(mongo|memory), `MONGODB_URI`, `DATABASE_NAME`
    pub fn from_source(lookup: EnvLookup<'_>) -> Result<Self, String> {
        let backend = match lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "mongo".to_string())
            .to_lowercase()
            .as_str()
        {
            "mongo" | "mongodb" => StorageBackend::Mongo,
            "memory" | "in-memory" => StorageBackend::Memory,
            other => return Err(format!("알 수 없는 STORAGE_BACKEND 값: {}", other)),
        };

        Ok(Self {
            backend,
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            name: lookup("DATABASE_NAME").unwrap_or_else(|| "sales_manager_dev".to_string()),
        })
    }
}
