//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! | 타입 | 역할 |
//! |------|------|
//! | `CreateUserRequest` | 회원가입 요청 본문 |
//! | `UserResponse` | 비밀번호 해시를 제외한 사용자 정보 |
//!
//! ## 요청/응답 예제
//!
//! ```text
//! POST /users
//! Content-Type: application/json
//!
//! {
//!   "email": "lucas@example.com",
//!   "cpf_cnpj": "88877936037",
//!   "whatsapp": "14991396707",
//!   "name": "Lucas Camargo",
//!   "password": "159753Lucas$",
//!   "sex": "M",
//!   "date_birthday": "1990-01-01"
//! }
//!
//! HTTP/1.1 201 Created
//!
//! {
//!   "id": "5f0c6d1e-...",
//!   "email": "lucas@example.com",
//!   "cpf_cnpj": "88877936037",
//!   "whatsapp": "14991396707",
//!   "name": "Lucas Camargo",
//!   "sex": "M",
//!   "date_birthday": "1990-01-01",
//!   "date_created": "2025-06-15T12:00:00Z",
//!   "status": 1,
//!   "profile_photo": null,
//!   "date_login": null
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
