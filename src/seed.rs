//! Built-in sample records loaded at startup. There is no persistence, so this
//! is the whole initial state of a seeded process.

use chrono::{NaiveDate, NaiveTime};

use crate::model::{
    BeltRank, ClassDraft, ClassSchedule, Profile, Role, Student, StudentDraft, User, Weekday,
};

pub const ADMIN_ID: &str = "admin-1";

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(v) => v,
        None => panic!("invalid seed date"),
    }
}

const fn hm(h: u32, m: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(h, m, 0) {
        Some(v) => v,
        None => panic!("invalid seed time"),
    }
}

pub fn admin() -> User {
    User {
        id: ADMIN_ID.to_string(),
        name: "Admin".to_string(),
        email: "admin@martialarts.com".to_string(),
        role: Role::Admin,
        profile: Profile::default(),
    }
}

#[allow(clippy::too_many_arguments)]
fn instructor(
    id: &str,
    name: &str,
    email: &str,
    birth: NaiveDate,
    joined: NaiveDate,
    phone: &str,
    address: &str,
    neighborhood: &str,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Instructor,
        profile: Profile {
            birth_date: Some(birth),
            join_date: Some(joined),
            belt_color: Some(BeltRank::Black),
            phone: Some(phone.to_string()),
            address: Some(address.to_string()),
            neighborhood: Some(neighborhood.to_string()),
        },
    }
}

pub fn instructors() -> Vec<User> {
    vec![
        instructor(
            "instr-1",
            "Mestre Hélio",
            "helio@jiujitsu.com",
            const { ymd(1970, 1, 1) },
            const { ymd(2010, 1, 1) },
            "(11) 98888-1111",
            "Rua do Tatame, 100",
            "Centro",
        ),
        instructor(
            "instr-2",
            "Sensei Kano",
            "kano@judo.com",
            const { ymd(1968, 5, 12) },
            const { ymd(2008, 3, 15) },
            "(21) 97777-2222",
            "Avenida Ippon, 200",
            "Copacabana",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    name: &str,
    birth: NaiveDate,
    joined: NaiveDate,
    belt: BeltRank,
    n: u32,
    street: char,
    neighborhood: &str,
) -> Student {
    Student {
        id: id.to_string(),
        fields: StudentDraft {
            name: name.to_string(),
            birth_date: birth,
            join_date: joined,
            belt_color: belt,
            phone: format!("(11) 9{n}{n}{n}{n}-{n}{n}{n}{n}"),
            address: format!("Rua {street}, {n}"),
            neighborhood: neighborhood.to_string(),
        },
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student(
            "stu-1",
            "Carlos Gracie",
            const { ymd(1995, 8, 10) },
            const { ymd(2023, 1, 15) },
            BeltRank::Black,
            1,
            'A',
            "Bairro X",
        ),
        student(
            "stu-2",
            "Jigoro Kano",
            const { ymd(2005, 3, 22) },
            const { ymd(2023, 2, 20) },
            BeltRank::Black,
            2,
            'B',
            "Bairro Y",
        ),
        student(
            "stu-3",
            "Gichin Funakoshi",
            const { ymd(1988, 11, 1) },
            const { ymd(2023, 3, 10) },
            BeltRank::Brown,
            3,
            'C',
            "Bairro Z",
        ),
        student(
            "stu-4",
            "Masutatsu Oyama",
            const { ymd(2000, 7, 15) },
            const { ymd(2023, 4, 5) },
            BeltRank::Purple,
            4,
            'D',
            "Bairro A",
        ),
        student(
            "stu-5",
            "Morihei Ueshiba",
            const { ymd(2010, 1, 30) },
            const { ymd(2023, 5, 12) },
            BeltRank::Blue,
            5,
            'E',
            "Bairro B",
        ),
    ]
}

fn class(id: &str, name: &str, day: Weekday, time: NaiveTime) -> ClassSchedule {
    ClassSchedule {
        id: id.to_string(),
        fields: ClassDraft {
            name: name.to_string(),
            day_of_week: day,
            time,
        },
    }
}

pub fn classes() -> Vec<ClassSchedule> {
    vec![
        class("cls-1", "Jiu-Jitsu (Adultos)", Weekday::Monday, const { hm(19, 0) }),
        class("cls-2", "Judô (Kids)", Weekday::Tuesday, const { hm(18, 0) }),
        class("cls-3", "Jiu-Jitsu (Avançado)", Weekday::Wednesday, const { hm(20, 0) }),
        class("cls-4", "Judô (Adultos)", Weekday::Thursday, const { hm(19, 30) }),
        class("cls-5", "Jiu-Jitsu (Iniciantes)", Weekday::Friday, const { hm(19, 0) }),
    ]
}
