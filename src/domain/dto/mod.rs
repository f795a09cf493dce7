//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `@JsonInclude(NON_EMPTY)` | `skip_serializing_if` | 빈 필드 생략 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선 (API Contract First)
//! - **명시적 인터페이스**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **버전 호환성**: API 변경 시 하위 호환성 유지
//! - **문서화**: 자동 생성되는 API 문서의 기반
//!
//! ### 2. 관대한 역직렬화 (Lenient Deserialization)
//! - **타입 안전성**: 컴파일 타임 타입 검증
//! - **기본값 채움**: `#[serde(default)]`로 누락 필드를 타입 기본값으로 처리
//! - **알 수 없는 필드 무시**: 클라이언트가 보낸 여분의 필드는 버림
//!
//! ### 3. 도메인 분리 (Domain Separation)
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **ID 변환**: MongoDB `ObjectId`는 응답에서 16진수 문자열로 노출
//! - **진화 가능성**: 내부 구조 변경이 API에 미치는 영향 최소화
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── employees/              # 직원 관련 DTO
//!     ├── request/            # 요청 DTO (클라이언트 → 서버)
//!     │   └── employee_request.rs
//!     └── response/           # 응답 DTO (서버 → 클라이언트)
//!         └── employee_response.rs
//! ```
//!
//! ## Spring Boot Controller와의 비교
//!
//! ### Spring Boot 예제
//! ```java
//! @RestController
//! @RequestMapping("/employees")
//! public class EmployeeController {
//!
//!     @PostMapping
//!     public ResponseEntity<EmployeeResponse> createEmployee(
//!         @RequestBody EmployeeRequest request
//!     ) {
//!         Employee employee = employeeService.createEmployee(request);
//!         EmployeeResponse response = EmployeeResponse.from(employee);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//!
//!     @PutMapping("/{id}")
//!     public ResponseEntity<EmployeeResponse> updateEmployee(
//!         @PathVariable String id,
//!         @RequestBody EmployeeRequest request
//!     ) {
//!         Employee employee = employeeService.updateEmployee(id, request);
//!         return ResponseEntity.ok(EmployeeResponse.from(employee));
//!     }
//! }
//! ```
//!
//! ### 이 시스템 예제
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::domain::dto::employees::{EmployeeRequest, EmployeeResponse};
//! use crate::core::errors::AppError;
//!
//! // Handler (Controller 역할)
//! pub async fn create_employee(
//!     request: web::Json<EmployeeRequest>  // @RequestBody와 동일
//! ) -> Result<HttpResponse, AppError> {
//!     // 서비스 호출
//!     let response = employee_service
//!         .create_employee(request.into_inner()).await?;
//!
//!     // JSON 응답 (ResponseEntity와 동일)
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## DTO 작성 가이드
//!
//! ### 1. Request DTO 작성
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//!
//! /// 직원 생성/수정 요청 DTO
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct EmployeeRequest {
//!     /// 직원 이름 (누락 시 빈 문자열)
//!     #[serde(default)]
//!     pub name: String,
//!
//!     /// 급여 (누락 시 0.0)
//!     #[serde(default)]
//!     pub salary: f64,
//!
//!     /// 나이 (누락 시 0.0)
//!     #[serde(default)]
//!     pub age: f64,
//! }
//! ```
//!
//! ### 2. Response DTO 작성
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//!
//! /// 직원 응답 DTO
//! ///
//! /// 내부 ObjectId 대신 16진수 문자열 ID를 노출
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct EmployeeResponse {
//!     /// 직원 공개 ID (MongoDB ObjectId를 문자열로 변환)
//!     #[serde(default, skip_serializing_if = "String::is_empty")]
//!     pub id: String,
//!
//!     pub name: String,
//!     pub salary: f64,
//!     pub age: f64,
//! }
//!
//! impl From<Employee> for EmployeeResponse {
//!     /// 도메인 엔티티를 응답 DTO로 변환
//!     fn from(employee: Employee) -> Self {
//!         Self {
//!             id: employee.id.map(|id| id.to_hex()).unwrap_or_default(),
//!             name: employee.name,
//!             salary: employee.salary,
//!             age: employee.age,
//!         }
//!     }
//! }
//! ```
//!
//! ## 베스트 프랙티스
//!
//! ### 1. 명명 규칙
//! - **Request DTO**: `{Entity}Request` (예: `EmployeeRequest`)
//! - **Response DTO**: `{Entity}Response` (예: `EmployeeResponse`)
//!
//! ### 2. 필드 설계
//! - **필수 필드**: 기본 타입 사용 (`String`, `f64` 등)
//! - **선택적 직렬화**: 빈 값은 `skip_serializing_if`로 생략
//! - **내부 정보**: `_id` 같은 저장소 세부사항은 Response DTO에서 변환 후 노출
//!
//! ### 3. 변환 패턴
//! - **Request → Entity**: `Employee::new(...)` 팩토리 메서드
//! - **Entity → Response**: `impl From<Entity> for Response`

pub mod employees;

// 향후 확장을 위한 모듈 선언
// pub mod departments;
// pub mod common;

// 공통 re-exports
pub use employees::*;
