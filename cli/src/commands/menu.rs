//! # Interactive Menu
//!
//! A numbered text menu over the registry. It only prompts, parses integers
//! and prints; every rule about the data lives in [`Registry`].
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`], so it runs
//! the same against a terminal or a scripted buffer. Running out of input is
//! treated like choosing "Exit": the registry is saved before returning.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::*;
use roster_common::model::EntityId;
use roster_core::{Registry, SnapshotStore};
use tracing::debug;

use crate::terminal::colors;
use crate::terminal::format::{self, Describe};

const OPTIONS: &[&str] = &[
    "Add student",
    "Add teacher",
    "Add course",
    "Enroll student in course",
    "List students",
    "List teachers",
    "List courses",
    "Save",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddStudent,
    AddTeacher,
    AddCourse,
    Enroll,
    ListStudents,
    ListTeachers,
    ListCourses,
    Save,
    Exit,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Choice::AddStudent),
            "2" => Ok(Choice::AddTeacher),
            "3" => Ok(Choice::AddCourse),
            "4" => Ok(Choice::Enroll),
            "5" => Ok(Choice::ListStudents),
            "6" => Ok(Choice::ListTeachers),
            "7" => Ok(Choice::ListCourses),
            "8" => Ok(Choice::Save),
            "9" => Ok(Choice::Exit),
            _ => Err(()),
        }
    }
}

/// Whether the loop keeps going after an action.
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, S: SnapshotStore, R: BufRead, W: Write> {
    registry: &'a mut Registry<S>,
    input: R,
    output: W,
}

/// Runs the menu on the process's standard input and output.
pub fn run<S: SnapshotStore>(registry: &mut Registry<S>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    Menu::new(registry, stdin.lock(), io::stdout()).run()
}

impl<'a, S: SnapshotStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(registry: &'a mut Registry<S>, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_options()?;

            let Some(line) = self.read_line("Choose an option: ")? else {
                debug!("Input closed, leaving menu");
                return self.exit();
            };

            let flow: Flow = match line.parse::<Choice>() {
                Ok(choice) => self.handle(choice)?,
                Err(()) => {
                    writeln!(self.output, "Unknown option")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return self.exit();
            }
        }
    }

    fn handle(&mut self, choice: Choice) -> anyhow::Result<Flow> {
        match choice {
            Choice::AddStudent => self.add_student(),
            Choice::AddTeacher => self.add_teacher(),
            Choice::AddCourse => self.add_course(),
            Choice::Enroll => self.enroll(),
            Choice::ListStudents => {
                let records = self.registry.list_students();
                self.print_records("students", &records)
            }
            Choice::ListTeachers => {
                let records = self.registry.list_teachers();
                self.print_records("teachers", &records)
            }
            Choice::ListCourses => {
                let records = self.registry.list_courses();
                self.print_records("courses", &records)
            }
            Choice::Save => {
                self.save()?;
                Ok(Flow::Continue)
            }
            Choice::Exit => Ok(Flow::Exit),
        }
    }

    fn add_student(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.read_line("Student name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.prompt_number::<i64>("Age: ")? else {
            return Ok(Flow::Exit);
        };

        let id: EntityId = self.registry.create_student(name, age);
        writeln!(self.output, "Added student id {}", id.to_string().color(colors::ID))?;
        Ok(Flow::Continue)
    }

    fn add_teacher(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.read_line("Teacher name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(subject) = self.read_line("Subject: ")? else {
            return Ok(Flow::Exit);
        };

        let id: EntityId = self.registry.create_teacher(name, subject);
        writeln!(self.output, "Added teacher id {}", id.to_string().color(colors::ID))?;
        Ok(Flow::Continue)
    }

    fn add_course(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.read_line("Course name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(teacher_id) = self.prompt_optional_id("Teacher id (or leave blank): ")? else {
            return Ok(Flow::Exit);
        };

        match self.registry.create_course(name, teacher_id) {
            Ok(id) => writeln!(self.output, "Added course id {}", id.to_string().color(colors::ID))?,
            Err(e) => self.print_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn enroll(&mut self) -> anyhow::Result<Flow> {
        let Some(student_id) = self.prompt_number::<EntityId>("Student id: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(course_id) = self.prompt_number::<EntityId>("Course id: ")? else {
            return Ok(Flow::Exit);
        };

        match self.registry.enroll(student_id, course_id) {
            Ok(()) => writeln!(self.output, "Enrolled successfully")?,
            Err(e) => self.print_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn print_records<T: Describe>(&mut self, what: &str, records: &[T]) -> anyhow::Result<Flow> {
        if records.is_empty() {
            writeln!(self.output, "{}", format!("No {what} yet.").color(colors::MUTED))?;
        }
        for (idx, record) in records.iter().enumerate() {
            for line in format::record_tree(idx, record) {
                writeln!(self.output, "{line}")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Saves, reporting a failure without leaving the menu.
    fn save(&mut self) -> anyhow::Result<()> {
        match self.registry.save() {
            Ok(()) => writeln!(self.output, "Saved to {}", self.registry.store().describe())?,
            Err(e) => self.print_error(&e)?,
        }
        Ok(())
    }

    fn exit(&mut self) -> anyhow::Result<()> {
        self.save()?;
        writeln!(self.output, "Bye")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "School Management".color(colors::PRIMARY).bold())?;
        for (idx, option) in OPTIONS.iter().enumerate() {
            writeln!(self.output, "{}) {}", idx + 1, option)?;
        }
        Ok(())
    }

    fn print_error(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        writeln!(self.output, "{} {}", "Error:".color(colors::ERROR).bold(), err)
    }

    /// Prompts and reads one trimmed line; `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf: String = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Prompts until the answer parses as a number.
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a valid integer.")?,
            }
        }
    }

    /// Like [`Self::prompt_number`], but a blank answer means "no id".
    fn prompt_optional_id(&mut self, prompt: &str) -> io::Result<Option<Option<EntityId>>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(None));
            }
            match line.parse::<EntityId>() {
                Ok(id) => return Ok(Some(Some(id))),
                Err(_) => writeln!(self.output, "Please enter a valid integer or leave blank.")?,
            }
        }
    }
}
