//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티를 정의합니다.
//!
//! ```text
//! entities/
//! └── users/
//!     └── user.rs     ← User 엔티티, UserStatus
//! ```
//!
//! 엔티티는 검증을 통과한 데이터로만 생성합니다
//! ([`User::from_registration`](users::user::User::from_registration)).

pub mod users;
