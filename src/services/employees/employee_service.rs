//! # 직원 관리 서비스 구현
//!
//! 직원 레코드의 전체 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! Spring Framework의 `@Service` 패턴을 참고하여 설계되었으며,
//! 직원 목록 조회, 등록, 수정, 삭제, 단건 조회 기능을 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       EmployeeService                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │    Creation     │  │  Query / List   │  │  Update/Delete  │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Entity Create │  │ • By ID         │  │ • Field $set    │  │
//! │  │ • Id Assignment │  │ • Full Scan     │  │ • Exist Check   │  │
//! │  │ • Canonical Read│  │ • Entity to DTO │  │ • Entity to DTO │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     EmployeeRepository                          │
//! │ • MongoDB CRUD Operations                                       │
//! │ • ObjectId Validation                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::doc;
use crate::{
    core::errors::AppError,
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::{
        dto::employees::{request::EmployeeRequest, response::EmployeeResponse},
        entities::employees::employee::Employee,
    },
    repositories::employees::employee_repo::EmployeeRepository,
};

/// 직원 관리 비즈니스 로직 서비스
///
/// 이 서비스는 직원 레코드의 전체 생명주기를 관리하며,
/// Spring Framework의 `@Service` 어노테이션이 적용된 EmployeeService와
/// 유사한 역할을 수행합니다.
///
/// ## 주요 책임 (Responsibilities)
///
/// 1. **직원 등록**: 요청 DTO를 엔티티로 변환하여 저장하고 정본을 반환
/// 2. **직원 조회**: ID 기반 단건 조회와 전체 목록 조회
/// 3. **직원 수정**: `name`/`salary`/`age` 필드 교체 후 최신 상태 반환
/// 4. **직원 삭제**: 존재하지 않는 ID에 대한 일관된 에러 처리
///
/// ## 싱글톤 패턴 및 의존성 주입
///
/// 등록 블록을 통해 싱글톤으로 관리되며,
/// EmployeeRepository가 생성자에서 주입됩니다:
///
/// ```rust,ignore
/// let employee_service = EmployeeService::instance(); // 항상 동일한 인스턴스
/// ```
///
/// ## 에러 처리 전략
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다:
///
/// - **ValidationError**: 잘못된 ObjectId 형식 (400)
/// - **NotFound**: 리소스 존재하지 않음 (404)
/// - **DatabaseError**: 저장소 레벨 오류 (500)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::services::employees::employee_service::EmployeeService;
/// use crate::domain::dto::employees::request::EmployeeRequest;
///
/// async fn example_usage() -> Result<(), AppError> {
///     let employee_service = EmployeeService::instance();
///
///     let request = EmployeeRequest {
///         name: "김철수".to_string(),
///         salary: 52000.0,
///         age: 31.0,
///     };
///
///     let created = employee_service.create_employee(request).await?;
///     println!("직원 생성: {}", created.id);
///
///     let all = employee_service.list_employees().await?;
///     println!("전체 직원 수: {}", all.len());
///
///     Ok(())
/// }
/// ```
pub struct EmployeeService {
    /// 직원 데이터 액세스 리포지토리
    ///
    /// 생성자 주입을 통해 EmployeeRepository 싱글톤이 주입됩니다.
    /// 모든 데이터베이스 작업은 이 리포지토리를 통해 수행됩니다.
    employee_repo: Arc<EmployeeRepository>,
}

fn new_boxed() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(EmployeeService {
        employee_repo: ServiceLocator::get::<EmployeeRepository>(),
    }))
}

inventory::submit! {
    ServiceRegistration {
        name: "employee_service",
        constructor: new_boxed,
    }
}

impl EmployeeService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 전체 직원 목록 조회
    ///
    /// 컬렉션의 모든 직원을 조회하여 응답 DTO 목록으로 변환합니다.
    /// 컬렉션이 비어 있으면 에러가 아닌 빈 목록을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<EmployeeResponse>)` - 전체 직원 목록
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 조회 오류
    pub async fn list_employees(&self) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = self.employee_repo.find_all().await?;

        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// 새 직원 등록
    ///
    /// 요청 DTO를 엔티티로 변환하여 저장합니다. 클라이언트가 보낸 `id`는
    /// 역직렬화 단계에서 이미 버려지므로 저장소가 항상 새 ID를 발급합니다.
    ///
    /// # 인자
    ///
    /// * `request` - 직원 생성 요청 데이터 (이름, 급여, 나이)
    ///
    /// # 반환값
    ///
    /// * `Ok(EmployeeResponse)` - 저장된 직원 (발급된 ID 포함)
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 저장 오류
    ///
    /// # 처리 과정
    ///
    /// 1. **엔티티 생성**: Employee::new()를 통한 ID 없는 엔티티 생성
    /// 2. **영구 저장**: Repository를 통한 저장 및 정본 재조회
    /// 3. **응답 생성**: ObjectId를 16진수 문자열로 변환한 DTO 반환
    /// 4. **성능 로깅**: 처리 시간 기록
    pub async fn create_employee(&self, request: EmployeeRequest) -> Result<EmployeeResponse, AppError> {
        let start_time = std::time::Instant::now();

        let employee = Employee::new(request.name, request.salary, request.age);

        let created_employee = self.employee_repo.create(employee).await?;

        let total_duration = start_time.elapsed();
        log::info!("Total employee creation took: {:?}", total_duration);

        Ok(EmployeeResponse::from(created_employee))
    }

    /// ID로 직원 조회
    ///
    /// MongoDB ObjectId를 사용하여 특정 직원을 조회하고,
    /// 응답 DTO 형태로 변환하여 반환합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 직원의 MongoDB ObjectId (16진수 문자열)
    ///
    /// # 반환값
    ///
    /// * `Ok(EmployeeResponse)` - 직원 정보 DTO
    /// * `Err(AppError::NotFound)` - 해당 ID의 직원이 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 조회 오류
    pub async fn get_employee_by_id(&self, id: &str) -> Result<EmployeeResponse, AppError> {
        let employee = self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))?;

        Ok(EmployeeResponse::from(employee))
    }

    /// 직원 정보 수정
    ///
    /// 지정된 ID 직원의 `name`, `salary`, `age` 필드를 요청 값으로 교체합니다.
    /// ID는 불변이며, 수정 후 저장된 문서의 최신 상태를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 수정할 직원의 MongoDB ObjectId (16진수 문자열)
    /// * `request` - 교체할 필드 값들
    ///
    /// # 반환값
    ///
    /// * `Ok(EmployeeResponse)` - 수정된 직원의 최신 상태
    /// * `Err(AppError::NotFound)` - 해당 ID의 직원이 존재하지 않음 (upsert 없음)
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 수정 오류
    pub async fn update_employee(&self, id: &str, request: EmployeeRequest) -> Result<EmployeeResponse, AppError> {
        let EmployeeRequest { name, salary, age } = request;

        let update_doc = doc! {
            "name": name,
            "salary": salary,
            "age": age,
        };

        let updated_employee = self.employee_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))?;

        Ok(EmployeeResponse::from(updated_employee))
    }

    /// 직원 삭제
    ///
    /// 지정된 ID의 직원을 시스템에서 영구적으로 삭제합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 삭제할 직원의 MongoDB ObjectId (16진수 문자열)
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 성공
    /// * `Err(AppError::NotFound)` - 해당 ID의 직원이 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 삭제 오류
    pub async fn delete_employee(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.employee_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("직원을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl Service for EmployeeService {
    fn name(&self) -> &str {
        "employee_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
