//! # 직원 생성/수정 요청 DTO
//!
//! 이 모듈은 직원 등록과 수정을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! Spring Boot의 `@RequestBody` 패턴을 Rust로 구현한 것으로,
//! 클라이언트 입력 데이터의 타입 안전성을 보장합니다.
//!
//! ## 파싱 규칙
//!
//! - 본문이 JSON으로 파싱되지 않으면 프레임워크가 400 Bad Request 반환
//! - 파싱에 성공하면 누락된 필드는 타입 기본값으로 채워짐
//!   (`name` → 빈 문자열, `salary`/`age` → 0.0)
//! - 구조체에 없는 필드(예: 클라이언트가 보낸 `id`)는 무시됨
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, Result};
//! use crate::domain::dto::employees::request::EmployeeRequest;
//!
//! #[actix_web::post("")]
//! async fn create_employee_endpoint(
//!     req: web::Json<EmployeeRequest>
//! ) -> Result<HttpResponse> {
//!     let employee_service = EmployeeService::instance();
//!     let created = employee_service.create_employee(req.into_inner()).await?;
//!
//!     Ok(HttpResponse::Created().json(created))
//! }
//! ```

use serde::{Deserialize, Serialize};

/// 직원 등록/수정을 위한 요청 DTO
///
/// 이 구조체는 클라이언트로부터 받은 직원 데이터를 표현하며,
/// `POST /employees`와 `PUT /employees/{id}` 양쪽에서 사용됩니다.
/// 저장소가 발급하는 `id`는 클라이언트 입력으로 받지 않습니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "김철수",
///   "salary": 52000,
///   "age": 31
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// 직원 이름
    ///
    /// 누락 시 빈 문자열로 채워짐
    #[serde(default)]
    pub name: String,

    /// 급여
    ///
    /// 정수로 보내도 BSON `Double`로 저장됨
    #[serde(default)]
    pub salary: f64,

    /// 나이
    #[serde(default)]
    pub age: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_fills_defaults() {
        let request: EmployeeRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.name, "");
        assert_eq!(request.salary, 0.0);
        assert_eq!(request.age, 0.0);
    }

    #[test]
    fn test_partial_body_fills_missing_fields() {
        let request: EmployeeRequest =
            serde_json::from_str(r#"{"name": "김철수"}"#).unwrap();

        assert_eq!(request.name, "김철수");
        assert_eq!(request.salary, 0.0);
        assert_eq!(request.age, 0.0);
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let request: EmployeeRequest = serde_json::from_str(
            r#"{"id": "665f1f77bcf86cd799439011", "name": "박영희", "salary": 61000, "age": 28}"#,
        )
        .unwrap();

        assert_eq!(request.name, "박영희");
        assert_eq!(request.salary, 61000.0);
        assert_eq!(request.age, 28.0);
    }

    #[test]
    fn test_integer_numbers_parse_as_doubles() {
        let request: EmployeeRequest =
            serde_json::from_str(r#"{"name": "이민수", "salary": 48000, "age": 45}"#).unwrap();

        assert_eq!(request.salary, 48000.0);
        assert_eq!(request.age, 45.0);
    }
}
