//! Employee Entity Implementation
//!
//! 직원 엔티티의 핵심 구현체입니다.
//! MongoDB `employees` 컬렉션에 저장되는 문서 구조와 일대일로 대응합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 직원 엔티티
///
/// 시스템이 관리하는 유일한 도메인 엔티티입니다.
/// `id`는 저장 시 MongoDB가 할당하며, 이후 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 직원 이름
    pub name: String,
    /// 급여
    pub salary: f64,
    /// 나이
    pub age: f64,
}

impl Employee {
    /// 새 직원 엔티티 생성
    ///
    /// 저장 전 상태이므로 `id`는 비어 있으며, 삽입 시 데이터베이스가 할당합니다.
    pub fn new(name: String, salary: f64, age: f64) -> Self {
        Self {
            id: None,
            name,
            salary,
            age,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_employee_has_no_id() {
        let employee = Employee::new("Ann".to_string(), 1000.0, 30.0);

        assert!(employee.id.is_none());
        assert!(employee.id_string().is_none());
    }

    #[test]
    fn test_unsaved_employee_serializes_without_id_field() {
        let employee = Employee::new("Ann".to_string(), 1000.0, 30.0);
        let doc = bson::to_document(&employee).unwrap();

        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "Ann");
        assert_eq!(doc.get_f64("salary").unwrap(), 1000.0);
        assert_eq!(doc.get_f64("age").unwrap(), 30.0);
    }

    #[test]
    fn test_id_round_trips_through_bson() {
        let object_id = ObjectId::new();
        let employee = Employee {
            id: Some(object_id),
            name: "Ann".to_string(),
            salary: 1000.0,
            age: 30.0,
        };

        let doc = bson::to_document(&employee).unwrap();
        let restored: Employee = bson::from_document(doc).unwrap();

        assert_eq!(restored.id, Some(object_id));
        assert_eq!(restored.id_string(), Some(object_id.to_hex()));
    }
}
