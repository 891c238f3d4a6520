use std::collections::HashSet;

use roster_common::error::RegistryError;
use roster_common::model::EntityId;
use roster_core::{LoadStatus, Registry};
use roster_integration_tests::DataFile;
use serde_json::json;

#[test]
fn missing_file_starts_at_one() -> anyhow::Result<()> {
    let file = DataFile::new()?;
    let mut registry = Registry::open(file.path());

    assert_eq!(registry.load_status(), &LoadStatus::Fresh);
    assert!(registry.list_students().is_empty());
    assert!(registry.list_teachers().is_empty());
    assert!(registry.list_courses().is_empty());
    assert_eq!(registry.create_student("Ann", 20), 1);
    assert!(!file.path().exists(), "nothing is written before save");
    Ok(())
}

#[test]
fn ids_stay_unique_over_mixed_creation() -> anyhow::Result<()> {
    let file = DataFile::new()?;
    let mut registry = Registry::open(file.path());
    let mut ids: HashSet<EntityId> = HashSet::new();

    for round in 0..20 {
        let teacher = registry.create_teacher(format!("T{round}"), "Art");
        let student = registry.create_student(format!("S{round}"), round);
        let course = registry.create_course(format!("C{round}"), Some(teacher))?;
        assert!(registry.create_course("Ghost", Some(student)).is_err());
        assert!(ids.insert(teacher));
        assert!(ids.insert(student));
        assert!(ids.insert(course));
    }

    assert_eq!(ids.len(), 60);
    assert_eq!(registry.next_id(), 61);
    Ok(())
}

#[test]
fn save_writes_documented_layout() -> anyhow::Result<()> {
    let file = DataFile::new()?;
    let mut registry = Registry::open(file.path());
    let ann = registry.create_student("Ann", 20);
    let bob = registry.create_teacher("Bob", "Math");
    let algebra = registry.create_course("Algebra", Some(bob))?;
    registry.create_course("Free Study", None)?;
    registry.enroll(ann, algebra)?;
    registry.save()?;

    assert_eq!(
        file.json()?,
        json!({
            "students": {"1": {"id": 1, "name": "Ann", "age": 20}},
            "teachers": {"2": {"id": 2, "name": "Bob", "subject": "Math"}},
            "courses": {
                "3": {"id": 3, "name": "Algebra", "teacher_id": 2, "students": [1]},
                "4": {"id": 4, "name": "Free Study", "teacher_id": null, "students": []}
            },
            "_next_id": 5
        })
    );
    assert!(file.read()?.contains("\n  \"students\": {\n    \"1\": {"));
    Ok(())
}

#[test]
fn round_trip_through_file() -> anyhow::Result<()> {
    let file = DataFile::new()?;
    let mut first = Registry::open(file.path());
    let ann = first.create_student("Ann", 20);
    let cat = first.create_student("Cat", 22);
    let bob = first.create_teacher("Bob", "Math");
    let algebra = first.create_course("Algebra", Some(bob))?;
    first.enroll(cat, algebra)?;
    first.enroll(ann, algebra)?;
    first.save()?;

    let mut second = Registry::open(file.path());
    assert_eq!(
        second.load_status(),
        &LoadStatus::Restored {
            students: 2,
            teachers: 1,
            courses: 1
        }
    );
    assert_eq!(second.list_students(), first.list_students());
    assert_eq!(second.list_teachers(), first.list_teachers());
    assert_eq!(second.list_courses(), first.list_courses());
    assert_eq!(second.course(algebra).map(|c| c.students.clone()), Some(vec![cat, ann]));
    assert_eq!(second.next_id(), first.next_id());

    let fresh = second.create_student("Dan", 19);
    assert!(![ann, cat, bob, algebra].contains(&fresh));
    assert_eq!(fresh, 5);
    Ok(())
}

#[test]
fn save_overwrites_previous_file() -> anyhow::Result<()> {
    let file = DataFile::new()?;
    let mut registry = Registry::open(file.path());
    registry.create_student("Ann", 20);
    registry.create_student("Cat", 22);
    registry.save()?;

    let mut other = Registry::open(file.path());
    other.create_teacher("Bob", "Math");
    other.save()?;

    let reloaded = Registry::open(file.path());
    assert_eq!(reloaded.list_students().len(), 2);
    assert_eq!(reloaded.list_teachers()[0].id, 3);
    Ok(())
}

#[test]
fn malformed_file_is_ignored() -> anyhow::Result<()> {
    let file = DataFile::with_contents("{\"students\": {\"1\": {\"id\": 1,")?;
    let mut registry = Registry::open(file.path());

    assert!(matches!(registry.load_status(), LoadStatus::Discarded { .. }));
    assert!(registry.list_students().is_empty());
    assert_eq!(registry.create_student("Ann", 20), 1);
    Ok(())
}

#[test]
fn structural_mismatch_is_ignored() -> anyhow::Result<()> {
    let file = DataFile::with_contents(
        r#"{"students": {"1": {"id": 1, "name": "Ann", "years": 20}}, "_next_id": 2}"#,
    )?;
    let registry = Registry::open(file.path());

    assert!(matches!(registry.load_status(), LoadStatus::Discarded { .. }));
    assert!(registry.list_students().is_empty());
    assert_eq!(registry.next_id(), 1);
    Ok(())
}

#[test]
fn discarded_file_is_replaced_on_save() -> anyhow::Result<()> {
    let file = DataFile::with_contents("not json at all")?;
    let mut registry = Registry::open(file.path());
    registry.create_teacher("Bob", "Math");
    registry.save()?;

    let reloaded = Registry::open(file.path());
    assert!(matches!(reloaded.load_status(), LoadStatus::Restored { .. }));
    assert_eq!(reloaded.list_teachers().len(), 1);
    Ok(())
}

#[test]
fn hand_written_file_without_counter() -> anyhow::Result<()> {
    let file = DataFile::with_contents(
        r#"{
  "students": {"2": {"id": 2, "name": "Ann", "age": 20}},
  "teachers": {"5": {"id": 5, "name": "Bob", "subject": "Math"}}
}"#,
    )?;
    let mut registry = Registry::open(file.path());

    assert_eq!(registry.next_id(), 6);
    assert!(registry.list_courses().is_empty());
    assert_eq!(registry.create_course("Algebra", Some(5))?, 6);
    Ok(())
}

#[test]
fn enrollment_walkthrough() -> anyhow::Result<()> {
    let file = DataFile::new()?;
    let mut registry = Registry::open(file.path());

    assert_eq!(registry.create_student("Ann", 20), 1);
    assert_eq!(registry.create_teacher("Bob", "Math"), 2);
    assert_eq!(registry.create_course("Algebra", Some(2))?, 3);
    registry.enroll(1, 3)?;
    registry.enroll(1, 3)?;
    assert_eq!(registry.course(3).map(|c| c.students.clone()), Some(vec![1]));

    let err = registry.create_course("Physics", Some(99)).unwrap_err();
    assert_eq!(err, RegistryError::TeacherNotFound(99));
    assert_eq!(registry.list_courses().len(), 1);
    assert_eq!(registry.next_id(), 4);
    Ok(())
}
