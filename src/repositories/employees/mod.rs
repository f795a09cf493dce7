//! 직원 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`EmployeeRepository`](employee_repo::EmployeeRepository)를 통해 MongoDB 기반
//! 직원 데이터 관리를 제공합니다. 등록 블록을 사용하여 싱글톤으로 관리됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::employees::employee_repo::EmployeeRepository;
//!
//! let employee_repo = EmployeeRepository::instance();
//! let employee = employee_repo.find_by_id("665f1f77bcf86cd799439011").await?;
//! ```

pub mod employee_repo;
