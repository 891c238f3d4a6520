use colored::*;
use roster_common::model::{Course, EntityId, Student, Teacher};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Widest key shown in a record tree ("Students").
const KEY_WIDTH: usize = 8;

/// A record that can be rendered as a small tree: a title plus details.
pub trait Describe {
    fn title(&self) -> &str;
    fn details(&self) -> Vec<Detail>;
}

impl Describe for Student {
    fn title(&self) -> &str {
        &self.name
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            id_detail(self.id),
            ("Age".to_string(), self.age.to_string().color(colors::TEXT_DEFAULT)),
        ]
    }
}

impl Describe for Teacher {
    fn title(&self) -> &str {
        &self.name
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            id_detail(self.id),
            ("Subject".to_string(), self.subject.color(colors::TEXT_DEFAULT)),
        ]
    }
}

impl Describe for Course {
    fn title(&self) -> &str {
        &self.name
    }

    fn details(&self) -> Vec<Detail> {
        let teacher: ColoredString = match self.teacher_id {
            Some(id) => id.to_string().color(colors::ID),
            None => "none".color(colors::MUTED),
        };
        vec![
            id_detail(self.id),
            ("Teacher".to_string(), teacher),
            ("Students".to_string(), id_list(&self.students)),
        ]
    }
}

fn id_detail(id: EntityId) -> Detail {
    ("Id".to_string(), id.to_string().color(colors::ID))
}

fn id_list(ids: &[EntityId]) -> ColoredString {
    if ids.is_empty() {
        return "none".color(colors::MUTED);
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(", ")
        .color(colors::ID)
}

pub fn tree_head(idx: usize, name: &str) -> String {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let name: ColoredString = if name.is_empty() {
        "(unnamed)".color(colors::MUTED)
    } else {
        name.color(colors::PRIMARY)
    };
    format!("{} {}", idx_str.color(colors::SEPARATOR), name)
}

pub fn tree_branches(details: &[Detail]) -> Vec<String> {
    details
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let last: bool = i + 1 == details.len();
            let branch: ColoredString = if !last {
                "├─".bright_black()
            } else {
                "└─".bright_black()
            };
            format!(
                " {} {}{}{} {}",
                branch,
                key.color(colors::TEXT_DEFAULT),
                ".".repeat(KEY_WIDTH.saturating_sub(key.len())).color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value
            )
        })
        .collect()
}

/// Renders a record as its head line followed by one line per detail.
pub fn record_tree<T: Describe>(idx: usize, record: &T) -> Vec<String> {
    let mut lines: Vec<String> = vec![tree_head(idx, record.title())];
    lines.extend(tree_branches(&record.details()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn student_tree_shows_id_and_age() {
        plain();
        let student = Student {
            id: 1,
            name: "Ann".into(),
            age: 20,
        };
        let lines = record_tree(0, &student);
        assert_eq!(lines[0], "[0] Ann");
        assert_eq!(lines[1], " ├─ Id......: 1");
        assert_eq!(lines[2], " └─ Age.....: 20");
    }

    #[test]
    fn course_tree_lists_enrollment() {
        plain();
        let course = Course {
            id: 3,
            name: "Algebra".into(),
            teacher_id: Some(2),
            students: vec![1, 4],
        };
        let lines = record_tree(2, &course);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with(": 2"), "{}", lines[2]);
        assert_eq!(lines[3], " └─ Students: 1, 4");
    }

    #[test]
    fn course_without_teacher_or_students() {
        plain();
        let course = Course::new(5, "Physics".into(), None);
        let lines = record_tree(0, &course);
        assert!(lines[2].ends_with(": none"));
        assert!(lines[3].ends_with(": none"));
    }

    #[test]
    fn empty_name_is_marked() {
        plain();
        assert_eq!(tree_head(1, ""), "[1] (unnamed)");
    }
}
