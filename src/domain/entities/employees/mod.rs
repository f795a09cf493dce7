//! Employees Entity Module
//!
//! 직원 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! MongoDB `employees` 컬렉션 문서와 1:1로 매핑되는 Employee 엔티티를 포함합니다.
//!
//! # 주요 구성 요소
//!
//! ### Employee Entity
//! - **영속성**: `_id`는 저장 시점에 MongoDB가 발급
//! - **직렬화**: BSON ↔ 구조체 자동 변환
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::employees::Employee;
//!
//! // 신규 직원 생성 (아직 저장 전이므로 id는 None)
//! let employee = Employee::new(
//!     "김철수".to_string(),
//!     52000.0,
//!     31.0,
//! );
//! ```

pub mod employee;
