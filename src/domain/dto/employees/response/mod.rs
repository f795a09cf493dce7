//! # 직원 관련 응답 DTO 모듈
//!
//! 이 모듈은 직원 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@ResponseBody`와 유사한 역할을 하며, 비즈니스 로직 처리 결과를
//! 클라이언트에게 일관된 형태로 전달하는 역할을 담당합니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: MongoDB 내부 표현(`_id`, ObjectId)은 문자열 `id`로 변환 후 노출
//! - **일관성**: 단건 조회와 목록 조회가 동일한 구조 사용
//! - **타입 안전성**: 컴파일 타임에 응답 구조 검증
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, Result};
//! use crate::domain::dto::employees::response::EmployeeResponse;
//!
//! #[actix_web::get("/{employee_id}")]
//! async fn get_employee(path: web::Path<String>) -> Result<HttpResponse> {
//!     let employee = employee_service.get_employee_by_id(&path).await?;
//!     let response = EmployeeResponse::from(employee);
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "665f1f77bcf86cd799439011",
//!   "name": "김철수",
//!   "salary": 52000.0,
//!   "age": 31.0
//! }
//! ```
//!
//! `id`가 빈 문자열이면 직렬화 시 필드 자체가 생략됩니다.

pub mod employee_response;

pub use employee_response::EmployeeResponse;
