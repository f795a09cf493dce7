//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 직원 관리 라우트와 루트 인사말, 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 직원 CRUD API 엔드포인트
//! - 루트 인사말 엔드포인트 (텍스트 응답)
//! - 헬스체크 엔드포인트
//!
//! # Route Layout
//!
//! 컬렉션 작업과 단건 조회는 서로 다른 스코프에 등록됩니다:
//!
//! ```text
//! /                      ← 인사말 (GET)
//! /health                ← 헬스체크 (GET)
//! /employees             ← 목록 조회 (GET), 등록 (POST)
//! /employees/{id}        ← 수정 (PUT), 삭제 (DELETE)
//! /employee/{id}         ← 단건 조회 (GET)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Root greeting and health check endpoints
    cfg.service(greeting);
    cfg.service(health_check);

    // Feature-specific routes
    configure_employee_routes(cfg);
}

/// 직원 관련 라우트를 설정합니다
///
/// 직원 목록 조회, 등록, 수정, 삭제, 단건 조회 API 엔드포인트를 등록합니다.
///
/// # Route Groups
///
/// ## 컬렉션 라우트 (`/employees`)
/// - `GET /employees` - 전체 직원 목록 조회
/// - `POST /employees` - 직원 등록
/// - `PUT /employees/{id}` - 직원 정보 수정
/// - `DELETE /employees/{id}` - 직원 삭제
///
/// ## 단건 조회 라우트 (`/employee`)
/// - `GET /employee/{id}` - 직원 단건 조회
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// # 전체 목록 조회
/// curl -X GET http://localhost:3000/employees
///
/// # 직원 등록
/// curl -X POST http://localhost:3000/employees \
///   -H "Content-Type: application/json" \
///   -d '{"name":"김철수","salary":52000,"age":31}'
///
/// # 단건 조회
/// curl -X GET http://localhost:3000/employee/665f1f77bcf86cd799439011
/// ```
fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    // Collection routes
    cfg.service(
        web::scope("/employees")
            .service(handlers::employees::list_employees)
            .service(handlers::employees::create_employee)
            .service(handlers::employees::update_employee)
            .service(handlers::employees::delete_employee)
    );

    // Single-record lookup은 단수형 경로를 사용
    cfg.service(
        web::scope("/employee")
            .service(handlers::employees::get_employee)
    );
}

/// 루트 인사말 엔드포인트
///
/// 서비스가 살아있는지 빠르게 확인할 수 있는 고정 텍스트를 반환합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/
/// ```
///
/// Response:
/// ```text
/// Hello, World 👋!
/// ```
#[actix_web::get("/")]
async fn greeting() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().body("Hello, World 👋!")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "employee_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "dependency_injection": "Singleton Registry"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "employee_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "Singleton Registry"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_greeting_returns_fixed_text() {
        let app = test::init_service(App::new().service(greeting)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(body, "Hello, World 👋!");
    }

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "employee_service_backend");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_unknown_route_returns_not_found() {
        let app = test::init_service(App::new().service(greeting).service(health_check)).await;

        let req = test::TestRequest::get().uri("/departments").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
