//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 등록 블록을 통해 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 직원 디렉토리 관리를 담당합니다.
//!
//! # Features
//!
//! - 직원 생명주기 관리 (등록, 조회, 수정, 삭제)
//! - 엔티티 ↔ DTO 변환
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::employees::employee_service::EmployeeService;
//!
//! let employee_service = EmployeeService::instance();
//! ```

pub mod employees;
