//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: JSON ↔ Rust 구조체 변환 지원
//!
//! ## 아키텍처 특징
//!
//! ### DDD(Domain Driven Design) 적용
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (핵심 비즈니스 엔티티)
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! ### MongoDB 통합
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **스키마 검증**: Rust 타입 시스템을 통한 데이터 무결성 보장
//!
//! ### 싱글톤 레지스트리 연동
//! 이 엔티티들은 `ServiceLocator` 기반의 리포지토리와 함께 사용됩니다:
//! ```rust,ignore
//! use crate::domain::entities::employees::Employee;
//! use crate::repositories::employees::employee_repo::EmployeeRepository;
//!
//! let employee_repo = EmployeeRepository::instance();
//! let employee = employee_repo.find_by_id("665f1f77bcf86cd799439011").await?;
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! ### 1. 저장 전 ID 생략
//! ```rust,ignore
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Employee {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub id: Option<ObjectId>,  // insert 전에는 None, MongoDB가 발급
//!     pub name: String,
//!     // ...
//! }
//! ```
//!
//! ### 2. 비즈니스 규칙 캡슐화
//! ```rust,ignore
//! impl Employee {
//!     pub fn new(name: String, salary: f64, age: f64) -> Self {
//!         Self { id: None, name, salary, age }
//!     }
//! }
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@Column` | `#[serde(rename = "field_name")]` |
//! | `@GeneratedValue` | MongoDB ObjectId 자동 발급 |
//! | Bean Validation | Rust 타입 시스템 + 커스텀 검증 |
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일 (전체 엔티티 모듈 문서)
//! └── employees/      ← 직원 관련 엔티티
//!     ├── mod.rs
//!     └── employee.rs ← Employee 엔티티
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **크기 제한**: MongoDB 문서 크기 제한(16MB) 고려
//! - **숫자 타입**: `salary`와 `age`는 BSON `Double`로 저장됨

pub mod employees;
