//! # Employee Data Transfer Objects Module
//!
//! 직원 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! Spring Framework의 Employee 관련 DTO와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 직원 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody EmployeeDto` | `EmployeeRequest` | 생성/수정 요청 |
//! | `@ResponseBody EmployeeDto` | `EmployeeResponse` | 직원 정보 응답 |
//! | `List<EmployeeDto>` | `Vec<EmployeeResponse>` | 직원 목록 응답 |
//!
//! ## 모듈 구조
//!
//! ```text
//! employees/
//! ├── request/                   # 클라이언트 → 서버 요청 DTO
//! │   └── employee_request.rs    # 직원 생성/수정 요청
//! └── response/                  # 서버 → 클라이언트 응답 DTO
//!     └── employee_response.rs   # 직원 정보 응답
//! ```
//!
//! ## 요청/응답 형태
//!
//! ### 생성 요청
//! ```json
//! POST /employees
//! {
//!   "name": "김철수",
//!   "salary": 52000,
//!   "age": 31
//! }
//! ```
//!
//! ### 성공 응답 (201 Created)
//! ```json
//! {
//!   "id": "665f1f77bcf86cd799439011",
//!   "name": "김철수",
//!   "salary": 52000.0,
//!   "age": 31.0
//! }
//! ```
//!
//! 동일한 `EmployeeRequest`가 `PUT /employees/{id}` 수정 요청에도 사용되며,
//! 누락된 필드는 타입 기본값(빈 문자열, 0.0)으로 채워집니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
