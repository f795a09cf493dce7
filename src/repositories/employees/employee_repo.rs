//! # 직원 리포지토리 구현
//!
//! 직원 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `employees` 컬렉션에 대한 모든 CRUD 연산을 제공합니다.
//!
//! ## 특징
//!
//! - **자동 의존성 주입**: 등록 블록을 통한 싱글톤 관리
//! - **선검증 후실행**: ObjectId 파싱 실패 시 데이터베이스 호출 없이 즉시 반환
//! - **원자적 수정**: `find_one_and_update`로 조회와 수정을 단일 연산으로 처리

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::{
    core::errors::AppError,
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::employees::employee::Employee,
};

/// 직원 데이터 액세스 리포지토리
///
/// 이 리포지토리는 직원 엔티티의 CRUD 연산을 담당하며,
/// MongoDB `employees` 컬렉션에 대한 단일 진입점을 제공합니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
/// 다음과 같은 에러 상황을 처리합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::employees::employee_repo::EmployeeRepository;
/// use crate::domain::entities::employees::employee::Employee;
///
/// async fn employee_operations() -> Result<(), AppError> {
///     let repo = EmployeeRepository::instance();
///
///     // 직원 생성
///     let created = repo.create(Employee::new("김철수".to_string(), 52000.0, 31.0)).await?;
///     let employee_id = created.id.unwrap().to_hex();
///
///     // ID로 조회
///     let found = repo.find_by_id(&employee_id).await?;
///
///     // 전체 조회
///     let all = repo.find_all().await?;
///
///     // 업데이트
///     let update_doc = doc! { "salary": 55000.0 };
///     let updated = repo.update(&employee_id, update_doc).await?;
///
///     // 삭제
///     let deleted = repo.delete(&employee_id).await?;
///
///     Ok(())
/// }
/// ```
pub struct EmployeeRepository {
    /// MongoDB 데이터베이스 연결
    ///
    /// 생성자에서 주입되는 데이터베이스 컴포넌트입니다.
    /// `employees` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
    db: Arc<Database>,
}

fn new_boxed() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(EmployeeRepository {
        db: ServiceLocator::get::<Database>(),
    }))
}

inventory::submit! {
    RepositoryRegistration {
        name: "employee_repository",
        constructor: new_boxed,
    }
}

impl EmployeeRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `employees` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<Employee> {
        self.db.get_database().collection("employees")
    }

    /// 전체 직원 조회
    ///
    /// 컬렉션의 모든 직원 문서를 저장소 순회 순서대로 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<Employee>)` - 전체 직원 목록 (비어 있으면 빈 벡터)
    /// * `Err(AppError::DatabaseError)` - 쿼리 또는 커서 순회 오류
    pub async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let mut cursor = self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        use futures_util::StreamExt;
        let mut employees = Vec::new();

        while let Some(employee) = cursor.next().await {
            match employee {
                Ok(employee) => employees.push(employee),
                Err(e) => return Err(AppError::DatabaseError(e.to_string())),
            }
        }

        Ok(employees)
    }

    /// ID로 직원 조회
    ///
    /// MongoDB ObjectId를 사용하여 직원을 조회합니다.
    /// ID 형식이 잘못된 경우 데이터베이스 호출 없이 즉시 에러를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 24자리 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Employee))` - 직원을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 직원이 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 직원 생성
    ///
    /// 새로운 직원을 데이터베이스에 저장하고, 저장소가 발급한 ID로
    /// 다시 조회하여 저장된 정본 문서를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `employee` - 생성할 직원 정보 (ID는 자동 할당됨)
    ///
    /// # 반환값
    ///
    /// * `Ok(Employee)` - 저장된 직원 (ID 포함)
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, employee: Employee) -> Result<Employee, AppError> {
        let result = self.collection()
            .insert_one(&employee)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 문서의 ID를 확인할 수 없습니다".to_string()))?;

        // 저장된 정본을 재조회
        let stored = self.collection()
            .find_one(doc! { "_id": inserted_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        stored.ok_or_else(|| {
            AppError::DatabaseError("방금 저장한 문서를 조회할 수 없습니다".to_string())
        })
    }

    /// 직원 정보 업데이트
    ///
    /// 기존 직원의 필드를 부분적으로 업데이트합니다.
    /// 업데이트 후 문서의 최신 상태를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 업데이트할 직원의 ID (ObjectId 문자열)
    /// * `update_doc` - 업데이트할 필드들을 포함한 MongoDB Document
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Employee))` - 업데이트된 직원 정보
    /// * `Ok(None)` - 해당 ID의 직원이 존재하지 않음 (upsert 없음)
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///
    /// # 업데이트 연산
    ///
    /// - **MongoDB `$set` 연산자 사용**: 지정된 필드만 변경
    /// - **원자적 연산**: find_one_and_update로 조회와 업데이트를 동시에
    /// - **최신 데이터 반환**: ReturnDocument::After 옵션 사용
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Employee>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 직원 삭제
    ///
    /// 지정된 ID의 직원을 데이터베이스에서 영구적으로 삭제합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 삭제할 직원의 ID (ObjectId 문자열)
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 직원이 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 직원이 존재하지 않음 (삭제할 것이 없음)
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for EmployeeRepository {
    fn name(&self) -> &str {
        "employee_repository"
    }

    fn collection_name(&self) -> &str {
        "employees"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
