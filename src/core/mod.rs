//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! Spring Framework의 핵심 컨테이너 기능을 Rust 생태계에 맞게 구현하여,
//! 타입 안전성과 성능을 모두 만족하는 의존성 주입 시스템을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext + BeanFactory 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록 정보 수집
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: Arc<T> 필드의 생성자 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **계층화된 에러**: 도메인별 세분화된 에러 분류
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Component` | `inventory::submit!` 등록 블록 |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | 생성자 안의 `ServiceLocator::get::<T>()` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | Bean 생명주기 | Singleton + Lazy 초기화 |
//!
//! ## 핵심 설계 원칙
//!
//! ### 1. Thread Safety by Design
//! - `Arc<T>` + `RwLock`을 통한 동시성 안전성
//! - 불변성 우선 설계로 데이터 레이스 방지
//!
//! ### 2. Fail-Fast Philosophy
//! - 명시적 에러 처리로 런타임 안정성 보장
//! - 순환 참조 등 설계 문제의 조기 발견
//!
//! ## 사용 패턴
//!
//! ### 기본 컴포넌트 정의
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::{RepositoryRegistration, ServiceLocator};
//!
//! pub struct EmployeeRepository {
//!     db: Arc<Database>,
//! }
//!
//! fn new_boxed() -> Box<dyn Any + Send + Sync> {
//!     Box::new(Arc::new(EmployeeRepository {
//!         db: ServiceLocator::get::<Database>(),
//!     }))
//! }
//!
//! inventory::submit! {
//!     RepositoryRegistration { name: "employee_repository", constructor: new_boxed }
//! }
//!
//! // 사용
//! let repo = EmployeeRepository::instance();
//! ```
//!
//! ### 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     // 1. 인프라 컴포넌트 등록
//!     let database = Database::new().await.expect("DB 연결 실패");
//!     ServiceLocator::set(Arc::new(database));
//!
//!     // 2. 모든 서비스/리포지토리 초기화
//!     ServiceLocator::initialize_all().await.expect("초기화 실패");
//!
//!     // 3. 웹 서버 시작
//!     HttpServer::new(|| App::new().configure(configure_all_routes))
//!         .bind("0.0.0.0:3000")?
//!         .run()
//!         .await
//! }
//! ```
//!
//! ### 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_employee(id: &str) -> Result<Employee, AppError> {
//!     let employee = self.employee_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))?;
//!
//!     Ok(employee)
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: EmployeeService
//! panic: Circular dependency detected: EmployeeService is already being initialized
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Component not found: MailService. Make sure it's registered...
//! ```
//! **해결**: `inventory::submit!` 등록 블록 추가 또는 `ServiceLocator::set()` 으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
