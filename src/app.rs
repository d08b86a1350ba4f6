//! The single state object presentation code talks to. It is built once by
//! the caller and handed around as `&mut App`; there is no global instance.

use chrono::NaiveDate;
use tracing::warn;

use crate::attendance::AttendanceBook;
use crate::config::Settings;
use crate::directory::{Directory, DirectorySummary, Outcome};
use crate::error::{Result, StoreError};
use crate::model::{
    AttendanceKey, AttendanceRecord, ClassDraft, ClassSchedule, InstructorDraft, PresentSet, Role,
    Student, StudentDraft, User, Weekday,
};
use crate::session::Session;

/// How mutations react to unknown ids and to the caller's role. The default
/// trusts callers and treats unknown ids as a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    pub strict: bool,
    pub enforce_roles: bool,
}

#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    directory: Directory,
    attendance: AttendanceBook,
    policy: Policy,
}

impl App {
    pub fn new(directory: Directory, session: Session, policy: Policy) -> Self {
        Self {
            session,
            directory,
            attendance: AttendanceBook::new(),
            policy,
        }
    }

    pub fn seeded(policy: Policy) -> Self {
        Self::new(Directory::seeded(), Session::default(), policy)
    }

    pub fn empty(policy: Policy) -> Self {
        Self::new(Directory::empty(), Session::default(), policy)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let directory = if settings.seed {
            Directory::seeded()
        } else {
            Directory::empty()
        };
        let policy = Policy {
            strict: settings.strict,
            enforce_roles: settings.enforce_roles,
        };
        Self::new(
            directory,
            Session::new(settings.social_login_email.clone()),
            policy,
        )
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // Session

    pub fn login(&mut self, role: Role) -> &User {
        self.session.login(role, &mut self.directory)
    }

    pub fn login_on(&mut self, role: Role, today: NaiveDate) -> &User {
        self.session.login_on(role, &mut self.directory, today)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    fn require_admin(&self, action: &'static str) -> Result<()> {
        if !self.policy.enforce_roles {
            return Ok(());
        }
        match self.session.role() {
            Some(Role::Admin) => Ok(()),
            Some(role) => {
                warn!(action, role = role.as_str(), "rejected: admin only");
                Err(StoreError::Forbidden { action, role })
            }
            None => {
                warn!(action, "rejected: not signed in");
                Err(StoreError::NotSignedIn { action })
            }
        }
    }

    fn require_signed_in(&self, action: &'static str) -> Result<()> {
        if self.policy.enforce_roles && self.session.current().is_none() {
            warn!(action, "rejected: not signed in");
            return Err(StoreError::NotSignedIn { action });
        }
        Ok(())
    }

    fn settle(&self, outcome: Outcome, kind: &'static str, id: &str) -> Result<Outcome> {
        if self.policy.strict && outcome == Outcome::NoOp {
            warn!(kind, id, "unknown id");
            return Err(StoreError::NotFound {
                kind,
                id: id.to_string(),
            });
        }
        Ok(outcome)
    }

    // Directory reads

    pub fn users(&self) -> &[User] {
        self.directory.users()
    }

    pub fn students(&self) -> &[Student] {
        self.directory.students()
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.directory.student(id)
    }

    pub fn instructors(&self) -> Vec<&User> {
        self.directory.instructors().collect()
    }

    pub fn instructor(&self, id: &str) -> Option<&User> {
        self.directory.instructor(id)
    }

    pub fn instructor_name(&self, id: &str) -> &str {
        self.directory.instructor_name(id)
    }

    pub fn classes(&self) -> &[ClassSchedule] {
        self.directory.classes()
    }

    pub fn class(&self, id: &str) -> Option<&ClassSchedule> {
        self.directory.class(id)
    }

    pub fn classes_on(&self, day: Weekday) -> Vec<&ClassSchedule> {
        self.directory.classes_on(day).collect()
    }

    pub fn summary(&self, today: NaiveDate) -> DirectorySummary {
        self.directory.summary(today)
    }

    // Directory writes

    pub fn add_student(&mut self, draft: StudentDraft) -> Result<String> {
        self.require_admin("students.create")?;
        Ok(self.directory.add_student(draft))
    }

    pub fn update_student(&mut self, student: Student) -> Result<Outcome> {
        self.require_admin("students.update")?;
        let id = student.id.clone();
        let outcome = self.directory.update_student(student);
        self.settle(outcome, "student", &id)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin("students.delete")?;
        let outcome = self.directory.delete_student(id);
        self.settle(outcome, "student", id)
    }

    pub fn add_instructor(&mut self, draft: InstructorDraft) -> Result<String> {
        self.require_admin("instructors.create")?;
        Ok(self.directory.add_instructor(draft))
    }

    pub fn update_instructor(&mut self, instructor: User) -> Result<Outcome> {
        self.require_admin("instructors.update")?;
        let id = instructor.id.clone();
        let outcome = self.directory.update_instructor(instructor);
        self.settle(outcome, "instructor", &id)
    }

    pub fn delete_instructor(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin("instructors.delete")?;
        let outcome = self.directory.delete_instructor(id);
        self.settle(outcome, "instructor", id)
    }

    pub fn add_class(&mut self, draft: ClassDraft) -> Result<String> {
        self.require_admin("classes.create")?;
        Ok(self.directory.add_class(draft))
    }

    pub fn update_class(&mut self, class: ClassSchedule) -> Result<Outcome> {
        self.require_admin("classes.update")?;
        let id = class.id.clone();
        let outcome = self.directory.update_class(class);
        self.settle(outcome, "class", &id)
    }

    pub fn delete_class(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin("classes.delete")?;
        let outcome = self.directory.delete_class(id);
        self.settle(outcome, "class", id)
    }

    // Attendance

    pub fn attendance(&self, date: NaiveDate, class_id: &str) -> PresentSet {
        self.attendance.get(&AttendanceKey::new(date, class_id))
    }

    pub fn save_attendance(
        &mut self,
        date: NaiveDate,
        class_id: &str,
        present: PresentSet,
    ) -> Result<()> {
        self.require_signed_in("attendance.save")?;
        self.attendance
            .save(AttendanceKey::new(date, class_id), present);
        Ok(())
    }

    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.attendance.records()
    }
}
