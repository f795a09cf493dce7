//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
//! ```java
//! @RestController
//! @RequestMapping("/employees")
//! public class EmployeeController {
//!
//!     @Autowired
//!     private EmployeeService employeeService;
//!
//!     @PostMapping
//!     public ResponseEntity<EmployeeResponse> createEmployee(@RequestBody EmployeeRequest request) {
//!         EmployeeResponse response = employeeService.createEmployee(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//!
//!     @GetMapping("/{id}")
//!     public ResponseEntity<EmployeeResponse> getEmployee(@PathVariable String id) {
//!         EmployeeResponse employee = employeeService.getEmployeeById(id);
//!         return ResponseEntity.ok(employee);
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
//!
//! #[get("/{employee_id}")]
//! pub async fn get_employee(
//!     employee_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let service = EmployeeService::instance();
//!     let employee = service.get_employee_by_id(&employee_id).await?;
//!     Ok(HttpResponse::Ok().json(employee))
//! }
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 데이터베이스 호출 시 블로킹 없음
//! - **높은 처리량**: 적은 스레드로 많은 동시 요청 처리
//!
//! ```rust,ignore
//! // 논블로킹 데이터베이스 호출
//! let employee = employee_service.get_employee_by_id(&employee_id).await?;
//! ```
//!
//! ### 2. 타입 안전성
//! - **컴파일 타임 검증**: 요청/응답 타입 검증
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **관대한 파싱**: serde `default`로 누락 필드 기본값 처리
//!
//! ```rust,ignore
//! #[derive(Deserialize)]
//! pub struct EmployeeRequest {
//!     #[serde(default)]
//!     pub name: String,
//!
//!     #[serde(default)]
//!     pub salary: f64,
//! }
//!
//! // 컴파일 타임에 타입 안전성 보장
//! #[post("")]
//! pub async fn create_employee(
//!     payload: web::Json<EmployeeRequest>, // 자동 JSON 파싱
//! ) -> Result<HttpResponse, AppError> {
//!     // ...
//! }
//! ```
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: Rust의 에러 처리 관용구 활용
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError로 모든 에러 통합 처리
//!
//! ## 모듈 구성
//!
//! ### 현재 구현된 핸들러
//! - **`employees`**: 직원 관리 엔드포인트
//!   - 전체 목록 조회 (`GET /employees`)
//!   - 직원 등록 (`POST /employees`)
//!   - 직원 수정 (`PUT /employees/{id}`)
//!   - 직원 삭제 (`DELETE /employees/{id}`)
//!   - 단건 조회 (`GET /employee/{id}`)
//!
//! ### 향후 확장 예정
//! ```text
//! handlers/
//! ├── mod.rs              ← 이 파일
//! ├── employees.rs        ← 직원 관리
//! ├── departments.rs      ← 부서 관리 (향후)
//! ├── payroll.rs          ← 급여 정산 (향후)
//! └── admin.rs            ← 관리자 기능 (향후)
//! ```
//!
//! ## 라우팅 설정
//!
//! ### main.rs에서의 설정 예제
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use crate::handlers::employees;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new()
//!             .service(
//!                 web::scope("/employees")
//!                     .service(employees::list_employees)
//!                     .service(employees::create_employee)
//!                     .service(employees::update_employee)
//!                     .service(employees::delete_employee)
//!             )
//!             .service(
//!                 web::scope("/employee")
//!                     .service(employees::get_employee)
//!             )
//!     })
//!     .bind("127.0.0.1:3000")?
//!     .run()
//!     .await
//! }
//! ```
//!
//! ## 미들웨어 통합
//!
//! ### CORS 설정
//! ```rust,ignore
//! use actix_cors::Cors;
//! use actix_web::http;
//!
//! let cors = Cors::default()
//!     .allowed_origin("http://localhost:3000") // 프론트엔드 도메인
//!     .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
//!     .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
//!     .allowed_header(http::header::CONTENT_TYPE)
//!     .max_age(3600);
//! ```
//!
//! ### Rate Limiting
//! ```rust,ignore
//! use actix_governor::{Governor, GovernorConfigBuilder};
//!
//! let governor_conf = GovernorConfigBuilder::default()
//!     .seconds_per_request(1)
//!     .burst_size(10)
//!     .finish()
//!     .unwrap();
//!
//! App::new()
//!     .wrap(Governor::new(&governor_conf))
//!     .service(employees_scope)
//! ```
//!
//! ## 성능 최적화
//!
//! ### 요청 처리 최적화
//! ```rust,ignore
//! // 응답 압축
//! use actix_web::middleware::Compress;
//!
//! App::new()
//!     .wrap(Compress::default()) // 자동 gzip 압축
//!     .service(employees_scope)
//! ```
//!
//! ### 캐싱 전략
//! ```rust,ignore
//! // HTTP 캐시 헤더 설정
//! #[get("/{employee_id}")]
//! pub async fn get_employee(
//!     employee_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let employee = employee_service.get_employee_by_id(&employee_id).await?;
//!
//!     Ok(HttpResponse::Ok()
//!         .insert_header(("Cache-Control", "public, max-age=300")) // 5분 캐시
//!         .json(employee))
//! }
//! ```
//!
//! ## 보안 고려사항
//!
//! ### 입력 검증
//! - **NoSQL 인젝션 방지**: MongoDB의 타입 안전한 쿼리 (`doc!` 매크로)
//! - **XSS 방지**: 자동 JSON 이스케이프
//! - **ID 형식 검증**: 경로 파라미터를 ObjectId로 파싱 후 저장소 호출
//!
//! ### 요청 제한
//! - **Rate Limiting**: actix-governor를 통한 요청 빈도 제한
//! - **CORS**: 허용된 오리진만 접근 가능
//!
//! ## 모니터링 및 로깅
//!
//! ### 요청 로깅
//! ```rust,ignore
//! use actix_web::middleware::Logger;
//!
//! App::new()
//!     .wrap(Logger::default()) // 모든 요청/응답 로깅
//!     .service(employees_scope)
//! ```
//!
//! ### 처리 시간 측정
//! ```rust,ignore
//! use std::time::Instant;
//!
//! let start_time = Instant::now();
//! let result = employee_service.create_employee(request).await;
//! log::info!("Total employee creation took: {:?}", start_time.elapsed());
//! ```

pub mod employees;
