//! # Entity Records
//!
//! Plain data for the three kinds of entity the registry manages.
//!
//! Records point at each other only by [`EntityId`]; a course stores the id of
//! its teacher and the ids of its enrolled students, never the records
//! themselves. The serialized form of each record mirrors its fields exactly,
//! including its own `id`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by students, teachers and courses.
///
/// Allocated from one counter starting at 1, so an id is unique across all
/// three kinds.
pub type EntityId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Teacher,
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            EntityKind::Student => "student",
            EntityKind::Teacher => "teacher",
            EntityKind::Course => "course",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    pub id: EntityId,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Teacher {
    pub id: EntityId,
    pub name: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    /// Checked against the teachers only when the course is created.
    pub teacher_id: Option<EntityId>,
    /// Enrolled student ids, distinct, in enrollment order.
    pub students: Vec<EntityId>,
}

impl Course {
    pub fn new(id: EntityId, name: String, teacher_id: Option<EntityId>) -> Self {
        Self {
            id,
            name,
            teacher_id,
            students: Vec::new(),
        }
    }

    pub fn is_enrolled(&self, student_id: EntityId) -> bool {
        self.students.contains(&student_id)
    }
}

/// Gives generic code access to the id every record carries.
pub trait Entity {
    const KIND: EntityKind;

    fn id(&self) -> EntityId;
}

impl Entity for Student {
    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Teacher {
    const KIND: EntityKind = EntityKind::Teacher;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Course {
    const KIND: EntityKind = EntityKind::Course;

    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_serializes_null_teacher() {
        let course = Course::new(3, "Algebra".into(), None);
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "name": "Algebra", "teacher_id": null, "students": []})
        );
    }

    #[test]
    fn student_rejects_unknown_fields() {
        let raw = r#"{"id": 1, "name": "Ann", "age": 20, "grade": "A"}"#;
        assert!(serde_json::from_str::<Student>(raw).is_err());
    }

    #[test]
    fn student_rejects_wrong_types() {
        let raw = r#"{"id": 1, "name": "Ann", "age": "twenty"}"#;
        assert!(serde_json::from_str::<Student>(raw).is_err());

        let raw = r#"{"id": -1, "name": "Ann", "age": 20}"#;
        assert!(serde_json::from_str::<Student>(raw).is_err());
    }

    #[test]
    fn negative_age_is_accepted() {
        let raw = r#"{"id": 1, "name": "", "age": -3}"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert_eq!(student.age, -3);
        assert!(student.name.is_empty());
    }

    #[test]
    fn enrollment_membership() {
        let mut course = Course::new(5, "Physics".into(), Some(2));
        course.students.push(1);
        assert!(course.is_enrolled(1));
        assert!(!course.is_enrolled(4));
    }

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(EntityKind::Teacher.to_string(), "teacher");
        assert_eq!(<Course as Entity>::KIND, EntityKind::Course);
    }
}
