use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::ids::{new_id, CLASS_PREFIX, INSTRUCTOR_PREFIX, STUDENT_PREFIX};
use crate::model::{
    ClassDraft, ClassSchedule, InstructorDraft, Role, Student, StudentDraft, User, Weekday,
};
use crate::seed;

/// Returned by `instructor_name` for ids that do not resolve.
pub const UNKNOWN_INSTRUCTOR: &str = "Desconhecido";

/// Whether an update/delete touched a record. Missing ids are a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Applied,
    NoOp,
}

impl Outcome {
    pub fn applied(self) -> bool {
        self == Outcome::Applied
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySummary {
    pub student_count: usize,
    pub instructor_count: usize,
    pub class_count: usize,
    pub classes_today: usize,
}

/// Roster of users (admin plus instructors), students and class schedules.
/// Every list keeps insertion order.
#[derive(Debug, Clone)]
pub struct Directory {
    users: Vec<User>,
    students: Vec<Student>,
    classes: Vec<ClassSchedule>,
}

fn replace_where<T>(items: &mut [T], next: T, matches: impl Fn(&T) -> bool) -> Outcome {
    match items.iter_mut().find(|it| matches(it)) {
        Some(slot) => {
            *slot = next;
            Outcome::Applied
        }
        None => Outcome::NoOp,
    }
}

fn remove_where<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> Outcome {
    let before = items.len();
    items.retain(|it| !matches(it));
    if items.len() < before {
        Outcome::Applied
    } else {
        Outcome::NoOp
    }
}

impl Directory {
    /// Only the admin identity; no students, instructors or classes.
    pub fn empty() -> Self {
        Self {
            users: vec![seed::admin()],
            students: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn seeded() -> Self {
        let mut users = vec![seed::admin()];
        users.extend(seed::instructors());
        Self {
            users,
            students: seed::students(),
            classes: seed::classes(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn admin(&self) -> Option<&User> {
        self.users.iter().find(|u| u.role == Role::Admin)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn instructors(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.role == Role::Instructor)
    }

    pub fn classes(&self) -> &[ClassSchedule] {
        &self.classes
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn instructor(&self, id: &str) -> Option<&User> {
        self.instructors().find(|u| u.id == id)
    }

    pub fn class(&self, id: &str) -> Option<&ClassSchedule> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn instructor_by_email(&self, email: &str) -> Option<&User> {
        self.instructors().find(|u| u.email == email)
    }

    pub fn instructor_name(&self, id: &str) -> &str {
        self.instructor(id)
            .map(|u| u.name.as_str())
            .unwrap_or(UNKNOWN_INSTRUCTOR)
    }

    pub fn classes_on(&self, day: Weekday) -> impl Iterator<Item = &ClassSchedule> {
        self.classes
            .iter()
            .filter(move |c| c.fields.day_of_week == day)
    }

    pub fn summary(&self, today: NaiveDate) -> DirectorySummary {
        DirectorySummary {
            student_count: self.students.len(),
            instructor_count: self.instructors().count(),
            class_count: self.classes.len(),
            classes_today: self.classes_on(Weekday::of(today)).count(),
        }
    }

    // Students

    pub fn add_student(&mut self, draft: StudentDraft) -> String {
        let id = new_id(STUDENT_PREFIX);
        debug!(student_id = %id, "student added");
        self.students.push(Student {
            id: id.clone(),
            fields: draft,
        });
        id
    }

    pub fn update_student(&mut self, student: Student) -> Outcome {
        let id = student.id.clone();
        let outcome = replace_where(&mut self.students, student, |s| s.id == id);
        debug!(student_id = %id, ?outcome, "student update");
        outcome
    }

    pub fn delete_student(&mut self, id: &str) -> Outcome {
        let outcome = remove_where(&mut self.students, |s| s.id == id);
        debug!(student_id = %id, ?outcome, "student delete");
        outcome
    }

    // Instructors

    pub fn add_instructor(&mut self, draft: InstructorDraft) -> String {
        let id = new_id(INSTRUCTOR_PREFIX);
        debug!(instructor_id = %id, "instructor added");
        self.users.push(draft.into_user(id.clone()));
        id
    }

    /// Insert a fully formed instructor record (first social login).
    pub(crate) fn insert_instructor(&mut self, mut user: User) {
        user.role = Role::Instructor;
        debug!(instructor_id = %user.id, "instructor inserted");
        self.users.push(user);
    }

    /// Only instructor records match; the admin cannot be replaced this way.
    pub fn update_instructor(&mut self, mut instructor: User) -> Outcome {
        instructor.role = Role::Instructor;
        let id = instructor.id.clone();
        let outcome = replace_where(&mut self.users, instructor, |u| {
            u.id == id && u.role == Role::Instructor
        });
        debug!(instructor_id = %id, ?outcome, "instructor update");
        outcome
    }

    pub fn delete_instructor(&mut self, id: &str) -> Outcome {
        let outcome = remove_where(&mut self.users, |u| {
            u.id == id && u.role == Role::Instructor
        });
        debug!(instructor_id = %id, ?outcome, "instructor delete");
        outcome
    }

    // Classes

    pub fn add_class(&mut self, draft: ClassDraft) -> String {
        let id = new_id(CLASS_PREFIX);
        debug!(class_id = %id, "class added");
        self.classes.push(ClassSchedule {
            id: id.clone(),
            fields: draft,
        });
        id
    }

    pub fn update_class(&mut self, class: ClassSchedule) -> Outcome {
        let id = class.id.clone();
        let outcome = replace_where(&mut self.classes, class, |c| c.id == id);
        debug!(class_id = %id, ?outcome, "class update");
        outcome
    }

    pub fn delete_class(&mut self, id: &str) -> Outcome {
        let outcome = remove_where(&mut self.classes, |c| c.id == id);
        debug!(class_id = %id, ?outcome, "class delete");
        outcome
    }
}
