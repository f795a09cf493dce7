//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 계층화된 에러 분류
//! - **도메인별 분류**: 각 계층(데이터, 비즈니스, 프레젠테이션)별 에러 타입
//! - **의미론적 분류**: HTTP 상태 코드와 직접 매핑되는 의미있는 에러
//! - **컨텍스트 보존**: 원본 에러 정보를 손실 없이 전달
//!
//! ### 2. 자동 HTTP 응답 변환
//! - **ResponseError 구현**: Actix-Web과 완전 통합
//! - **일관된 응답 형식**: 모든 에러에 대한 표준화된 JSON 응답
//! - **적절한 상태 코드**: 에러 타입에 따른 자동 HTTP 상태 코드 매핑
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `ResponseEntity<ErrorResponse>` | `HttpResponse::build().json()` |
//! | `@ResponseStatus` | 자동 상태 코드 매핑 |
//! | Global Exception Handler | `AppError` 전역 구현 |
//! | Custom Exception | `AppError` 열거형 변형 |
//!
//! ## 사용 패턴
//!
//! ### 서비스 계층에서의 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! impl EmployeeService {
//!     async fn get_employee_by_id(&self, id: &str) -> Result<EmployeeResponse, AppError> {
//!         let employee = self.employee_repo.find_by_id(id).await?
//!             .ok_or_else(|| AppError::NotFound(
//!                 "직원을 찾을 수 없습니다".to_string()
//!             ))?;
//!
//!         Ok(EmployeeResponse::from(employee))
//!     }
//! }
//! ```
//!
//! ### 핸들러에서의 에러 처리
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, Result};
//! use crate::core::errors::AppError;
//!
//! async fn get_employee_handler(
//!     employee_id: web::Path<String>
//! ) -> Result<HttpResponse, AppError> {
//!     let service = EmployeeService::instance();
//!     let employee = service.get_employee_by_id(&employee_id).await?;
//!
//!     // 에러는 자동으로 적절한 HTTP 응답으로 변환됨
//!     Ok(HttpResponse::Ok().json(employee))
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 요청 본문, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 연산 중 발생하는 오류
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패 (본문 파싱, ID 형식)
/// - `NotFound`: 요청된 리소스가 존재하지 않음
///
/// ### 3. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 연결 타임아웃
    /// - 쿼리 실행 실패
    /// - 커서 순회 중 네트워크 오류
    ///
    /// # 예제
    /// ```rust,ignore
    /// // MongoDB 삽입 실패
    /// collection.insert_one(&employee).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 형식 요구사항을 만족하지 않을 때
    /// 발생합니다. 400 Bad Request로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - JSON 본문 파싱 실패
    /// - ObjectId 형식에 맞지 않는 경로 ID
    ///
    /// # 예제
    /// ```rust,ignore
    /// // 경로 ID 검증
    /// let object_id = ObjectId::parse_str(id)
    ///     .map_err(|_| AppError::ValidationError(
    ///         "유효하지 않은 ID 형식입니다".to_string()
    ///     ))?;
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 클라이언트가 요청한 리소스가 존재하지 않을 때 발생합니다.
    /// 조회, 수정, 삭제 경로 모두 동일하게 404 Not Found로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 존재하지 않는 직원 ID로 조회
    /// - 이미 삭제된 직원의 수정/삭제 시도
    ///
    /// # 예제
    /// ```rust,ignore
    /// // 직원 조회 실패
    /// let employee = employee_repo.find_by_id(&employee_id).await?
    ///     .ok_or_else(|| AppError::NotFound(
    ///         "직원을 찾을 수 없습니다".to_string()
    ///     ))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류나 프로그래밍 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 삽입 결과에서 ID를 복원할 수 없음
    /// - 의존성 주입 실패
    /// - 설정 손상
    ///
    /// # 예제
    /// ```rust,ignore
    /// // 컨텍스트와 함께 변환
    /// let config = std::fs::read_to_string("config.toml")
    ///     .context("Failed to read config")?;
    /// ```
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// Spring의 `@ExceptionHandler`와 동일한 역할을 수행하여 일관된 에러 응답을 보장합니다.
    ///
    /// # 응답 형식
    ///
    /// 모든 에러 응답은 다음과 같은 표준 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    ///
    /// # 상태 코드 매핑
    ///
    /// - `ValidationError` → 400 Bad Request
    /// - `NotFound` → 404 Not Found
    /// - 나머지 모든 에러 → 500 Internal Server Error
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// 애플리케이션 전체에서 자주 사용되는 `Result<T, AppError>` 패턴을
/// 간소화하기 위한 타입 별칭입니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// use crate::core::errors::AppResult;
///
/// // Before: Result<Employee, AppError>
/// // After: AppResult<Employee>
/// async fn find_employee(id: &str) -> AppResult<Employee> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 다양한 외부 라이브러리의 에러 타입을 `AppError`로 쉽게 변환할 수 있도록
/// 도와주는 확장 trait입니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::{AppError, ErrorContext};
///
/// let parsed: u16 = port_str.parse()
///     .context("Failed to parse server port")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Invalid id format".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Employee not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message_format() {
        let error = AppError::NotFound("record does not exist".to_string());

        assert_eq!(error.to_string(), "Not found: record does not exist");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
