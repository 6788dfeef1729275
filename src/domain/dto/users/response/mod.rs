//! # 사용자 관련 응답 DTO 모듈
//!
//! 도메인 엔티티를 HTTP 응답용 JSON 구조로 변환합니다.
//! 비밀번호 해시 같은 민감한 필드는 응답 타입에 존재하지 않습니다.

pub mod user_response;

pub use user_response::UserResponse;
