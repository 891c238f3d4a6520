//! # Registry
//!
//! Owns every student, teacher and course and hands out their ids.
//!
//! All ids come from a single counter, whatever the kind of entity, so an id
//! names exactly one record across the three collections. Cross references
//! (a course's teacher, an enrollment) are checked when they are made and
//! never again.
//!
//! Loading is best effort: a missing, unreadable or malformed store leaves the
//! registry empty rather than failing. [`Registry::load_status`] tells the
//! caller which of these happened.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use roster_common::error::{RegistryError, StoreError};
use roster_common::model::{Course, Entity, EntityId, Student, Teacher};
use roster_common::{info, warn};
use tracing::debug;

use crate::store::{JsonFileStore, Snapshot, SnapshotStore};

const FIRST_ID: EntityId = 1;

/// Largest id or counter accepted from a stored document.
///
/// Keeps the counter far enough from `u64::MAX` that allocation cannot overflow.
pub const MAX_ID: EntityId = i64::MAX as EntityId;

/// Outcome of reading the store when the registry was constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing was stored yet.
    Fresh,
    /// The stored state was restored.
    Restored {
        students: usize,
        teachers: usize,
        courses: usize,
    },
    /// The stored state could not be used and was ignored.
    Discarded { reason: String },
}

pub struct Registry<S: SnapshotStore = JsonFileStore> {
    store: S,
    students: BTreeMap<EntityId, Student>,
    teachers: BTreeMap<EntityId, Teacher>,
    courses: BTreeMap<EntityId, Course>,
    next_id: EntityId,
    load_status: LoadStatus,
}

impl Registry<JsonFileStore> {
    /// Opens the registry kept in the JSON file at `path`.
    ///
    /// The file does not have to exist yet; it is created on the first save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_store(JsonFileStore::new(path))
    }
}

impl<S: SnapshotStore> Registry<S> {
    /// Builds a registry over `store` and loads whatever it holds.
    pub fn with_store(store: S) -> Self {
        let mut registry = Self {
            store,
            students: BTreeMap::new(),
            teachers: BTreeMap::new(),
            courses: BTreeMap::new(),
            next_id: FIRST_ID,
            load_status: LoadStatus::Fresh,
        };
        registry.load();
        registry
    }

    pub fn create_student(&mut self, name: impl Into<String>, age: i64) -> EntityId {
        let id: EntityId = self.allocate_id();
        let student = Student {
            id,
            name: name.into(),
            age,
        };
        debug!("Created student {id} ({})", student.name);
        self.students.insert(id, student);
        id
    }

    pub fn create_teacher(&mut self, name: impl Into<String>, subject: impl Into<String>) -> EntityId {
        let id: EntityId = self.allocate_id();
        let teacher = Teacher {
            id,
            name: name.into(),
            subject: subject.into(),
        };
        debug!("Created teacher {id} ({})", teacher.name);
        self.teachers.insert(id, teacher);
        id
    }

    /// Creates a course, optionally taught by an existing teacher.
    ///
    /// An unknown `teacher_id` fails before an id is allocated, so the
    /// counter does not move.
    pub fn create_course(
        &mut self,
        name: impl Into<String>,
        teacher_id: Option<EntityId>,
    ) -> Result<EntityId, RegistryError> {
        if let Some(teacher_id) = teacher_id {
            if !self.teachers.contains_key(&teacher_id) {
                return Err(RegistryError::TeacherNotFound(teacher_id));
            }
        }

        let id: EntityId = self.allocate_id();
        let course = Course::new(id, name.into(), teacher_id);
        debug!("Created course {id} ({})", course.name);
        self.courses.insert(id, course);
        Ok(id)
    }

    /// Adds a student to a course's enrollment list.
    ///
    /// Enrolling a student who is already in the course changes nothing.
    pub fn enroll(&mut self, student_id: EntityId, course_id: EntityId) -> Result<(), RegistryError> {
        if !self.students.contains_key(&student_id) {
            return Err(RegistryError::StudentNotFound(student_id));
        }

        let course: &mut Course = self
            .courses
            .get_mut(&course_id)
            .ok_or(RegistryError::CourseNotFound(course_id))?;

        if course.is_enrolled(student_id) {
            debug!("Student {student_id} already enrolled in course {course_id}");
            return Ok(());
        }

        course.students.push(student_id);
        debug!("Enrolled student {student_id} in course {course_id}");
        Ok(())
    }

    pub fn list_students(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    pub fn list_teachers(&self) -> Vec<Teacher> {
        self.teachers.values().cloned().collect()
    }

    pub fn list_courses(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }

    pub fn student(&self, id: EntityId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn teacher(&self, id: EntityId) -> Option<&Teacher> {
        self.teachers.get(&id)
    }

    pub fn course(&self, id: EntityId) -> Option<&Course> {
        self.courses.get(&id)
    }

    /// The id the next created entity will receive.
    pub fn next_id(&self) -> EntityId {
        self.next_id
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            students: self.students.clone(),
            teachers: self.teachers.clone(),
            courses: self.courses.clone(),
            next_id: Some(self.next_id),
        }
    }

    /// Writes the full state to the store, replacing what was there.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.write(&self.snapshot())?;
        info!(
            "Saved {} students, {} teachers and {} courses to {}",
            self.students.len(),
            self.teachers.len(),
            self.courses.len(),
            self.store.describe()
        );
        Ok(())
    }

    /// A restored counter is at most `MAX_ID`, which leaves 2^63 allocations
    /// before the increment could overflow.
    fn allocate_id(&mut self) -> EntityId {
        let id: EntityId = self.next_id;
        self.next_id += 1;
        id
    }

    fn load(&mut self) {
        self.load_status = match self.store.read() {
            Ok(None) => LoadStatus::Fresh,
            Ok(Some(snapshot)) => match self.restore(snapshot) {
                Ok(()) => LoadStatus::Restored {
                    students: self.students.len(),
                    teachers: self.teachers.len(),
                    courses: self.courses.len(),
                },
                Err(reason) => LoadStatus::Discarded { reason },
            },
            Err(e) => LoadStatus::Discarded {
                reason: e.to_string(),
            },
        };

        match &self.load_status {
            LoadStatus::Fresh => debug!("Starting with an empty registry"),
            LoadStatus::Restored {
                students,
                teachers,
                courses,
            } => debug!(
                "Loaded {students} students, {teachers} teachers and {courses} courses from {}",
                self.store.describe()
            ),
            LoadStatus::Discarded { reason } => warn!(
                "Ignoring stored data in {}: {reason}",
                self.store.describe()
            ),
        }
    }

    /// Adopts `snapshot` if it is consistent; leaves the registry untouched otherwise.
    fn restore(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let mut seen: HashSet<EntityId> = HashSet::new();
        check_section(&snapshot.students, &mut seen)?;
        check_section(&snapshot.teachers, &mut seen)?;
        check_section(&snapshot.courses, &mut seen)?;
        check_enrollments(&snapshot.courses)?;

        let max_id: EntityId = seen.iter().copied().max().unwrap_or(0);
        let after_max: EntityId = max_id
            .checked_add(1)
            .filter(|&id| id <= MAX_ID)
            .ok_or_else(|| format!("id {max_id} leaves the id space exhausted"))?;
        let next_id: EntityId = match snapshot.next_id {
            Some(stored) if stored > MAX_ID => {
                return Err(format!("stored id counter {stored} leaves the id space exhausted"));
            }
            Some(stored) if stored > max_id => stored,
            Some(stored) => {
                warn!("Stored id counter {stored} is not above the largest id {max_id}, using {after_max}");
                after_max
            }
            None => after_max,
        };

        self.students = snapshot.students;
        self.teachers = snapshot.teachers;
        self.courses = snapshot.courses;
        self.next_id = next_id;
        Ok(())
    }
}

/// Checks that no course lists the same student twice.
fn check_enrollments(courses: &BTreeMap<EntityId, Course>) -> Result<(), String> {
    for course in courses.values() {
        let mut enrolled: HashSet<EntityId> = HashSet::new();
        if let Some(student) = course.students.iter().find(|&&id| !enrolled.insert(id)) {
            return Err(format!("course {} enrolls student {student} more than once", course.id));
        }
    }
    Ok(())
}

/// Checks that every key matches its record's id and that no id repeats.
fn check_section<T: Entity>(
    section: &BTreeMap<EntityId, T>,
    seen: &mut HashSet<EntityId>,
) -> Result<(), String> {
    for (&key, record) in section {
        if key != record.id() {
            return Err(format!("{} stored under key {key} has id {}", T::KIND, record.id()));
        }
        if key == 0 {
            return Err(format!("{} has id 0", T::KIND));
        }
        if !seen.insert(key) {
            return Err(format!("id {key} is used by more than one record"));
        }
    }
    Ok(())
}
