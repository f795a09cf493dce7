use serde::{Deserialize, Serialize};
use crate::domain::entities::employees::employee::Employee;

/// 직원 응답 DTO
///
/// MongoDB ObjectId를 16진수 문자열로 변환해 노출합니다.
/// 저장 전 엔티티처럼 ID가 없는 경우 `id` 필드는 직렬화에서 생략됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let Employee {
            id,
            name,
            salary,
            age,
        } = employee;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            salary,
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_from_entity_maps_object_id_to_hex() {
        let object_id = ObjectId::new();
        let employee = Employee {
            id: Some(object_id),
            name: "김철수".to_string(),
            salary: 52000.0,
            age: 31.0,
        };

        let response = EmployeeResponse::from(employee);

        assert_eq!(response.id, object_id.to_hex());
        assert_eq!(response.name, "김철수");
        assert_eq!(response.salary, 52000.0);
        assert_eq!(response.age, 31.0);
    }

    #[test]
    fn test_unsaved_entity_serializes_without_id_field() {
        let response = EmployeeResponse::from(Employee::new("박영희".to_string(), 61000.0, 28.0));

        assert!(response.id.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert_eq!(object.get("name").unwrap(), "박영희");
    }

    #[test]
    fn test_missing_id_deserializes_as_empty_string() {
        let response: EmployeeResponse =
            serde_json::from_str(r#"{"name": "이민수", "salary": 48000.0, "age": 45.0}"#).unwrap();

        assert_eq!(response.id, "");
        assert_eq!(response.name, "이민수");
    }
}
