use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Instructor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Instructor => "INSTRUCTOR",
        }
    }
}

/// Belt ranks in promotion order. The school uses the Portuguese color names,
/// which are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BeltRank {
    #[serde(alias = "Branca")]
    White,
    #[serde(alias = "Cinza")]
    Gray,
    #[serde(alias = "Amarela")]
    Yellow,
    #[serde(alias = "Laranja")]
    Orange,
    #[serde(alias = "Verde")]
    Green,
    #[serde(alias = "Azul")]
    Blue,
    #[serde(alias = "Roxa")]
    Purple,
    #[serde(alias = "Marrom")]
    Brown,
    #[serde(alias = "Preta")]
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(d: chrono::Weekday) -> Self {
        match d {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl Weekday {
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(flatten)]
    pub profile: Profile,
}

/// Profile fields shared by instructors. The admin record leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belt_color: Option<BeltRank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

/// Instructor fields as submitted by an admin. Any role on the wire is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDraft {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
}

impl InstructorDraft {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: Role::Instructor,
            profile: self.profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    #[serde(flatten)]
    pub fields: StudentDraft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub birth_date: NaiveDate,
    pub join_date: NaiveDate,
    pub belt_color: BeltRank,
    pub phone: String,
    pub address: String,
    pub neighborhood: String,
}

impl Student {
    /// Whole years completed on `on`. Zero for dates before birth.
    pub fn age_on(&self, on: NaiveDate) -> u32 {
        on.years_since(self.fields.birth_date).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub id: String,
    #[serde(flatten)]
    pub fields: ClassDraft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDraft {
    pub name: String,
    pub day_of_week: Weekday,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
}

/// Composite key of an attendance record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceKey {
    pub date: NaiveDate,
    pub class_id: String,
}

impl AttendanceKey {
    pub fn new(date: NaiveDate, class_id: impl Into<String>) -> Self {
        Self {
            date,
            class_id: class_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(flatten)]
    pub key: AttendanceKey,
    pub present_student_ids: PresentSet,
}

pub type PresentSet = std::collections::BTreeSet<String>;

/// Wall-clock `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
    }

    #[test]
    fn belt_accepts_portuguese_names_and_writes_english() {
        let b: BeltRank = serde_json::from_value(json!("Marrom")).expect("belt");
        assert_eq!(b, BeltRank::Brown);
        assert_eq!(serde_json::to_value(b).expect("ser"), json!("Brown"));
        assert!(BeltRank::White < BeltRank::Black);
    }

    #[test]
    fn class_time_is_hh_mm_on_the_wire() {
        let c: ClassSchedule = serde_json::from_value(json!({
            "id": "cls-9",
            "name": "Open Mat",
            "dayOfWeek": "Saturday",
            "time": "10:30"
        }))
        .expect("class");
        assert_eq!(c.fields.day_of_week, Weekday::Saturday);
        let back = serde_json::to_value(&c).expect("ser");
        assert_eq!(back["time"], json!("10:30"));
    }

    #[test]
    fn admin_user_omits_empty_profile() {
        let u = User {
            id: "admin-1".into(),
            name: "Admin".into(),
            email: "admin@martialarts.com".into(),
            role: Role::Admin,
            profile: Profile::default(),
        };
        let v = serde_json::to_value(&u).expect("ser");
        assert_eq!(v["role"], json!("ADMIN"));
        assert!(v.get("birthDate").is_none());
    }

    #[test]
    fn age_counts_completed_years() {
        let s = Student {
            id: "stu-x".into(),
            fields: StudentDraft {
                name: "X".into(),
                birth_date: date("2010-01-30"),
                join_date: date("2023-05-12"),
                belt_color: BeltRank::Blue,
                phone: "".into(),
                address: "".into(),
                neighborhood: "".into(),
            },
        };
        assert_eq!(s.age_on(date("2024-01-29")), 13);
        assert_eq!(s.age_on(date("2024-01-30")), 14);
        assert_eq!(s.age_on(date("2009-01-01")), 0);
    }

    #[test]
    fn weekday_from_date() {
        assert_eq!(Weekday::of(date("2024-06-03")), Weekday::Monday);
    }
}
