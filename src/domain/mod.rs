//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 직원 디렉토리의 비즈니스 데이터 구조를 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행하며,
//! Domain-Driven Design (DDD) 원칙에 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (JPA Entity와 유사)
//! └── DTOs         - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `@Embeddable` | Struct 컴포지션 | 값 객체 표현 |
//! | `@Valid` | `serde` 검증 | 데이터 유효성 검사 |
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 비즈니스의 핵심 개념을 나타내는 영속 가능한 객체들입니다.
//! Spring JPA의 `@Entity` 클래스와 동일한 역할을 수행합니다.
//!
//! #### 특징:
//! - **영속성**: MongoDB에 저장되는 도메인 객체
//! - **식별성**: `_id`(ObjectId)를 통한 객체 식별
//! - **직렬화**: BSON 문서와 1:1 매핑
//!
//! #### 예제:
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use mongodb::bson::oid::ObjectId;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Employee {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub id: Option<ObjectId>,
//!     pub name: String,
//!     pub salary: f64,
//!     pub age: f64,
//! }
//!
//! impl Employee {
//!     /// 새 직원 생성 (팩토리 메서드)
//!     pub fn new(name: String, salary: f64, age: f64) -> Self {
//!         Self { id: None, name, salary, age }
//!     }
//! }
//! ```
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! Spring의 `@RequestBody`/`@ResponseBody`와 동일한 역할을 수행합니다.
//!
//! #### 설계 원칙:
//! - **API 계약**: 외부 시스템과의 명확한 인터페이스 정의
//! - **내부 표현 분리**: Entity의 `ObjectId`는 응답에서 16진수 문자열로 변환
//! - **관대한 파싱**: 누락된 요청 필드는 기본값으로 채움
//!
//! #### 구조:
//! ```text
//! dto/
//! └── employees/
//!     ├── request/     - 직원 관련 요청 DTO
//!     │   └── employee_request.rs
//!     └── response/    - 직원 관련 응답 DTO
//!         └── employee_response.rs
//! ```
//!
//! ## 실제 사용 예제
//!
//! ### 직원 등록 플로우
//!
//! ```rust,ignore
//! use crate::domain::{entities::Employee, dto::EmployeeRequest, dto::EmployeeResponse};
//!
//! // 1. DTO로 입력 받기
//! let request = EmployeeRequest {
//!     name: "김철수".to_string(),
//!     salary: 52000.0,
//!     age: 31.0,
//! };
//!
//! // 2. 도메인 엔티티 생성
//! let employee = Employee::new(request.name, request.salary, request.age);
//!
//! // 3. 리포지토리를 통한 영속화
//! let saved = employee_repository.create(employee).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response = EmployeeResponse::from(saved);
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **크기 제한**: MongoDB 문서 크기 제한(16MB) 고려
//! - **데이터 일관성**: 각 요청은 단일 문서 연산으로 처리

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
