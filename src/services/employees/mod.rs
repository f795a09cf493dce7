//! 직원 관리 서비스 모듈
//!
//! 직원 레코드와 관련된 비즈니스 로직을 담당하는 서비스들을 제공합니다.
//! 직원 등록, 조회, 수정, 삭제의 핵심 기능을 구현합니다.
//!
//! # Features
//!
//! - 직원 등록 및 저장 정본 반환
//! - ID 기반 단건 조회와 전체 목록 조회
//! - 필드 교체 방식의 수정
//! - 존재 확인 후 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::employees::employee_service::EmployeeService;
//! use crate::domain::dto::employees::request::EmployeeRequest;
//!
//! let employee_service = EmployeeService::instance();
//! let request = EmployeeRequest { /* ... */ };
//! let response = employee_service.create_employee(request).await?;
//! ```

pub mod employee_service;
