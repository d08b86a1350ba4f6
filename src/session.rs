use chrono::{Local, NaiveDate};
use tracing::info;

use crate::directory::Directory;
use crate::ids::{new_id, INSTRUCTOR_PREFIX};
use crate::model::{BeltRank, Profile, Role, User};

pub const DEFAULT_SOCIAL_EMAIL: &str = "social.login@example.com";

/// Who is signed in. Instructor logins go through a stubbed social provider
/// that always answers with the same external identity (an email address).
#[derive(Debug, Clone)]
pub struct Session {
    current: Option<User>,
    social_email: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SOCIAL_EMAIL)
    }
}

impl Session {
    pub fn new(social_email: impl Into<String>) -> Self {
        Self {
            current: None,
            social_email: social_email.into(),
        }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|u| u.role)
    }

    pub fn social_email(&self) -> &str {
        &self.social_email
    }

    pub fn login(&mut self, role: Role, directory: &mut Directory) -> &User {
        self.login_on(role, directory, Local::now().date_naive())
    }

    /// `today` becomes the join date of an instructor created by this login.
    pub fn login_on(&mut self, role: Role, directory: &mut Directory, today: NaiveDate) -> &User {
        let user = match role {
            Role::Admin => directory.admin().cloned().unwrap_or_else(crate::seed::admin),
            Role::Instructor => match directory.instructor_by_email(&self.social_email).cloned() {
                Some(existing) => existing,
                None => {
                    let created = self.social_instructor(today);
                    info!(instructor_id = %created.id, "first social login, instructor created");
                    directory.insert_instructor(created.clone());
                    created
                }
            },
        };
        info!(user_id = %user.id, role = role.as_str(), "login");
        self.current.insert(user)
    }

    pub fn logout(&mut self) {
        if let Some(u) = self.current.take() {
            info!(user_id = %u.id, "logout");
        }
    }

    fn social_instructor(&self, today: NaiveDate) -> User {
        User {
            id: new_id(INSTRUCTOR_PREFIX),
            name: "Instrutor Social".to_string(),
            email: self.social_email.clone(),
            role: Role::Instructor,
            profile: Profile {
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
                join_date: Some(today),
                belt_color: Some(BeltRank::Black),
                phone: Some("(00) 00000-0000".to_string()),
                address: Some("Via Login Social".to_string()),
                neighborhood: Some("Internet".to_string()),
            },
        }
    }
}
