//! 직원 관리 서비스 백엔드
//!
//! Rust 기반의 현대적인 직원 디렉토리 관리 서비스입니다.
//! MongoDB 영구 저장소 위에서 직원 레코드의 CRUD API를 제공하며,
//! 싱글톤 레지스트리를 활용한 의존성 주입을 사용합니다.
//!
//! # Features
//!
//! - **직원 관리**: 등록, 목록/단건 조회, 수정, 삭제
//! - **RESTful API**: 컬렉션/단건 경로 분리, 표준 상태 코드
//! - **싱글톤 DI**: 레지스트리 기반 자동 의존성 주입
//! - **MongoDB**: 직원 데이터 영구 저장
//! - **관대한 파싱**: 누락 필드를 기본값으로 채우는 요청 역직렬화
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use employee_service_backend::services::employees::employee_service::EmployeeService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let employee_service = EmployeeService::instance();
//!
//! // 직원 등록 및 목록 조회
//! let created = employee_service.create_employee(request).await?;
//! let employees = employee_service.list_employees().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
