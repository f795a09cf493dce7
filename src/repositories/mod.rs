//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 등록 블록을 통해 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용합니다.
//!
//! # Features
//!
//! - 싱글톤 패턴을 통한 메모리 효율적인 인스턴스 관리
//! - 자동 의존성 주입을 통한 간편한 설정
//! - ObjectId 기반 점 조회와 전체 컬렉션 순회 지원
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::employees::employee_repo::EmployeeRepository;
//!
//! let employee_repo = EmployeeRepository::instance();
//! let employees = employee_repo.find_all().await?;
//! ```

pub mod employees;
