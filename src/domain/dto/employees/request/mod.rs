//! # 직원 관련 요청 DTO 모듈
//!
//! 이 모듈은 직원 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@RequestBody`와 유사한 역할을 하며, 클라이언트로부터 받은 JSON 데이터를
//! 구조화된 Rust 타입으로 변환하는 역할을 담당합니다.
//!
//! ## 주요 기능
//!
//! - **타입 안전성**: 컴파일 타임에 데이터 구조 검증
//! - **자동 역직렬화**: `serde`를 통한 JSON ↔ Rust 타입 변환
//! - **기본값 채움**: 누락된 필드는 `#[serde(default)]`로 타입 기본값 적용
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, Result};
//! use crate::domain::dto::employees::request::EmployeeRequest;
//!
//! #[actix_web::post("")]
//! async fn create_employee(
//!     req: web::Json<EmployeeRequest>
//! ) -> Result<HttpResponse> {
//!     // 자동으로 JSON → EmployeeRequest 변환 수행
//!     let payload = req.into_inner();
//!
//!     // 비즈니스 로직 처리...
//!     Ok(HttpResponse::Created().json("직원이 등록되었습니다"))
//! }
//! ```
//!
//! ## 에러 핸들링
//!
//! 본문이 JSON으로 파싱되지 않으면 프레임워크가 HTTP 400 Bad Request 응답을 반환합니다.
//! 파싱에 성공한 경우 필드 누락은 에러가 아니며 기본값으로 채워집니다.

pub mod employee_request;

pub use employee_request::EmployeeRequest;
