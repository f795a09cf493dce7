//! # Employee Management HTTP Handlers
//!
//! 직원 디렉토리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## RESTful API 설계
//!
//! ### 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/employees` | 전체 직원 목록 조회 | 200 OK |
//! | `POST` | `/employees` | 새 직원 등록 | 201 Created |
//! | `PUT` | `/employees/{id}` | 직원 정보 수정 | 200 OK |
//! | `DELETE` | `/employees/{id}` | 직원 삭제 | 204 No Content |
//! | `GET` | `/employee/{id}` | 단건 조회 | 200 OK |
//!
//! ## Spring Boot와의 비교
//!
//! ### Spring Boot Controller
//! ```java
//! @RestController
//! @RequestMapping("/employees")
//! public class EmployeeController {
//!
//!     @Autowired
//!     private EmployeeService employeeService;
//!
//!     @GetMapping
//!     public ResponseEntity<List<EmployeeResponse>> listEmployees() {
//!         return ResponseEntity.ok(employeeService.listEmployees());
//!     }
//!
//!     @PostMapping
//!     public ResponseEntity<EmployeeResponse> createEmployee(
//!         @RequestBody EmployeeRequest request
//!     ) {
//!         EmployeeResponse response = employeeService.createEmployee(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//!
//!     @DeleteMapping("/{id}")
//!     public ResponseEntity<Void> deleteEmployee(@PathVariable String id) {
//!         employeeService.deleteEmployee(id);
//!         return ResponseEntity.noContent().build();
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, get, post};
//! use crate::services::employees::employee_service::EmployeeService;
//!
//! #[post("")]
//! pub async fn create_employee(
//!     payload: web::Json<EmployeeRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let service = EmployeeService::instance(); // 싱글톤 패턴
//!     let response = service.create_employee(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 에러 처리 패턴
//!
//! ### HTTP 상태 코드 매핑
//!
//! 핸들러는 서비스가 반환한 `AppError`를 `?`로 전파하며,
//! `ResponseError` 구현이 상태 코드로 변환합니다:
//!
//! | 에러 | 상태 코드 | 발생 상황 |
//! |------|-----------|-----------|
//! | `ValidationError` | 400 | ObjectId 형식이 아닌 경로 ID |
//! | `NotFound` | 404 | 존재하지 않는 직원 |
//! | `DatabaseError` | 500 | 저장소 통신 오류 |
//!
//! ### 표준화된 에러 응답
//! ```json
//! {
//!   "error": "Not found: 직원을 찾을 수 없습니다"
//! }
//! ```

use actix_web::{web, HttpResponse, get, post, put, delete};
use crate::core::errors::AppError;
use crate::domain::dto::employees::request::EmployeeRequest;
use crate::services::employees::employee_service::EmployeeService;

/// 전체 직원 목록 조회 핸들러
///
/// 컬렉션의 모든 직원을 저장소 순회 순서대로 반환합니다.
/// 컬렉션이 비어 있으면 빈 배열을 반환합니다 (에러 아님).
///
/// # 엔드포인트
///
/// `GET /employees`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   {
///     "id": "665f1f77bcf86cd799439011",
///     "name": "김철수",
///     "salary": 52000.0,
///     "age": 31.0
///   }
/// ]
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X GET http://localhost:3000/employees
/// ```
#[get("")]
pub async fn list_employees() -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    let employees = service.list_employees().await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// 직원 등록 핸들러
///
/// 새로운 직원 레코드를 등록합니다. 본문의 `id` 필드는 무시되며,
/// 저장소가 발급한 새 ID가 응답에 포함됩니다.
///
/// # 엔드포인트
///
/// `POST /employees`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "김철수",
///   "salary": 52000,
///   "age": 31
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "665f1f77bcf86cd799439011",
///   "name": "김철수",
///   "salary": 52000.0,
///   "age": 31.0
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 파싱 불가능한 본문 (400 Bad Request)
///
/// JSON 구문 오류는 핸들러 진입 전에 프레임워크가 거부합니다.
/// 파싱 가능한 본문의 누락 필드는 기본값으로 채워집니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:3000/employees \
///   -H "Content-Type: application/json" \
///   -d '{"name": "김철수", "salary": 52000, "age": 31}'
/// ```
#[post("")]
pub async fn create_employee(
    payload: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    let response = service.create_employee(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 직원 정보 수정 핸들러
///
/// 지정된 ID 직원의 `name`, `salary`, `age`를 요청 본문 값으로 교체하고
/// 수정된 문서의 최신 상태를 반환합니다. 본문의 `id`는 무시됩니다.
///
/// # 엔드포인트
///
/// `PUT /employees/{employee_id}`
///
/// # 경로 파라미터
///
/// - `employee_id`: 수정할 직원의 고유 ID (MongoDB ObjectId)
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "665f1f77bcf86cd799439011",
///   "name": "김철수",
///   "salary": 55000.0,
///   "age": 32.0
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 잘못된 ID 형식 (400 Bad Request)
/// ```json
/// {
///   "error": "Validation error: 유효하지 않은 ID 형식입니다"
/// }
/// ```
///
/// ### 직원 없음 (404 Not Found)
/// ```json
/// {
///   "error": "Not found: 직원을 찾을 수 없습니다"
/// }
/// ```
///
/// # 비즈니스 규칙
///
/// - ID는 불변이며 수정 대상이 아님
/// - 존재하지 않는 ID에 대해 새 레코드를 생성하지 않음 (upsert 없음)
///
/// # 사용 예제
///
/// ```bash
/// curl -X PUT http://localhost:3000/employees/665f1f77bcf86cd799439011 \
///   -H "Content-Type: application/json" \
///   -d '{"name": "김철수", "salary": 55000, "age": 32}'
/// ```
#[put("/{employee_id}")]
pub async fn update_employee(
    employee_id: web::Path<String>,
    payload: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    let response = service.update_employee(&employee_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 직원 삭제 핸들러
///
/// 지정된 ID의 직원을 시스템에서 완전히 삭제합니다.
/// 이는 물리적 삭제(Hard Delete)이며, 복구가 불가능합니다.
///
/// # 엔드포인트
///
/// `DELETE /employees/{employee_id}`
///
/// # 경로 파라미터
///
/// - `employee_id`: 삭제할 직원의 고유 ID (MongoDB ObjectId)
///
/// # 응답
///
/// ## 성공 (204 No Content)
/// ```bash,ignore
/// HTTP/1.1 204 No Content
/// Content-Length: 0
/// ```
///
/// ## 실패 사례
///
/// ### 직원 없음 (404 Not Found)
/// ```json
/// {
///   "error": "Not found: 직원을 찾을 수 없습니다"
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X DELETE http://localhost:3000/employees/665f1f77bcf86cd799439011
/// ```
#[delete("/{employee_id}")]
pub async fn delete_employee(
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    service.delete_employee(&employee_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 직원 단건 조회 핸들러
///
/// 지정된 ID의 직원 정보를 조회합니다.
///
/// # 엔드포인트
///
/// `GET /employee/{employee_id}`
///
/// # 경로 파라미터
///
/// - `employee_id`: 조회할 직원의 고유 ID (MongoDB ObjectId)
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "665f1f77bcf86cd799439011",
///   "name": "김철수",
///   "salary": 52000.0,
///   "age": 31.0
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 직원 없음 (404 Not Found)
/// ```json
/// {
///   "error": "Not found: 직원을 찾을 수 없습니다"
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X GET http://localhost:3000/employee/665f1f77bcf86cd799439011
/// ```
#[get("/{employee_id}")]
pub async fn get_employee(
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    let employee = service.get_employee_by_id(&employee_id).await?;

    Ok(HttpResponse::Ok().json(employee))
}
