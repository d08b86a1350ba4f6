use chrono::{NaiveDate, NaiveTime};
use dojod::model::{
    BeltRank, ClassDraft, ClassSchedule, InstructorDraft, PresentSet, Profile, Role, Student,
    StudentDraft, User, Weekday,
};
use dojod::{App, Outcome, Policy, StoreError};
use std::collections::HashSet;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn set(ids: &[&str]) -> PresentSet {
    ids.iter().map(|s| s.to_string()).collect()
}

fn student_draft(name: &str, belt: BeltRank) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        birth_date: date("2001-04-18"),
        join_date: date("2024-02-01"),
        belt_color: belt,
        phone: "(11) 96666-6666".to_string(),
        address: "Rua F, 6".to_string(),
        neighborhood: "Bairro C".to_string(),
    }
}

#[test]
fn add_student_yields_exactly_one_new_matching_record() {
    let mut app = App::seeded(Policy::default());
    for (i, belt) in [BeltRank::White, BeltRank::Gray, BeltRank::Black]
        .into_iter()
        .enumerate()
    {
        let prior: HashSet<String> = app.students().iter().map(|s| s.id.clone()).collect();
        let draft = student_draft(&format!("Aluno {}", i), belt);
        let id = app.add_student(draft.clone()).expect("add");
        assert!(!prior.contains(&id));

        let new: Vec<&Student> = app
            .students()
            .iter()
            .filter(|s| !prior.contains(&s.id))
            .collect();
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].id, id);
        assert_eq!(new[0].fields, draft);
    }
}

#[test]
fn updates_with_unknown_ids_leave_collections_unchanged() {
    let mut app = App::seeded(Policy::default());
    let students = app.students().to_vec();
    let users = app.users().to_vec();
    let classes = app.classes().to_vec();

    let outcome = app
        .update_student(Student {
            id: "stu-missing".to_string(),
            fields: student_draft("Nobody", BeltRank::White),
        })
        .expect("lenient");
    assert_eq!(outcome, Outcome::NoOp);

    let outcome = app
        .update_instructor(User {
            id: "instr-missing".to_string(),
            name: "Nobody".to_string(),
            email: "nobody@example.com".to_string(),
            role: Role::Instructor,
            profile: Profile::default(),
        })
        .expect("lenient");
    assert_eq!(outcome, Outcome::NoOp);

    let outcome = app
        .update_class(ClassSchedule {
            id: "cls-missing".to_string(),
            fields: ClassDraft {
                name: "Ghost class".to_string(),
                day_of_week: Weekday::Sunday,
                time: NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
            },
        })
        .expect("lenient");
    assert_eq!(outcome, Outcome::NoOp);

    assert_eq!(app.students(), students.as_slice());
    assert_eq!(app.users(), users.as_slice());
    assert_eq!(app.classes(), classes.as_slice());
}

#[test]
fn deletes_are_idempotent() {
    let mut app = App::seeded(Policy::default());

    app.delete_student("stu-4").expect("delete");
    let once = app.students().to_vec();
    app.delete_student("stu-4").expect("delete again");
    assert_eq!(app.students(), once.as_slice());

    app.delete_class("cls-2").expect("delete");
    let once = app.classes().to_vec();
    app.delete_class("cls-2").expect("delete again");
    assert_eq!(app.classes(), once.as_slice());

    app.delete_instructor("instr-1").expect("delete");
    let once = app.users().to_vec();
    app.delete_instructor("instr-1").expect("delete again");
    assert_eq!(app.users(), once.as_slice());
    assert_eq!(app.instructor_name("instr-1"), "Desconhecido");
}

#[test]
fn attendance_round_trips_including_empty_set() {
    let mut app = App::seeded(Policy::default());
    for present in [set(&["stu-1", "stu-3", "stu-5"]), set(&[])] {
        app.save_attendance(date("2024-06-05"), "cls-3", present.clone())
            .expect("save");
        assert_eq!(app.attendance(date("2024-06-05"), "cls-3"), present);
    }
}

#[test]
fn attendance_second_save_replaces_first() {
    let mut app = App::seeded(Policy::default());
    app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-1", "stu-2"]))
        .expect("save");
    app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-2", "stu-4"]))
        .expect("save");
    assert_eq!(
        app.attendance(date("2024-06-03"), "cls-1"),
        set(&["stu-2", "stu-4"])
    );
    assert_eq!(app.attendance_records().len(), 1);
}

#[test]
fn attendance_save_is_idempotent() {
    let mut app = App::seeded(Policy::default());
    app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-1"]))
        .expect("save");
    let once = app.attendance_records();
    app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-1"]))
        .expect("save");
    assert_eq!(app.attendance_records(), once);
}

#[test]
fn monday_class_scenario() {
    let mut app = App::seeded(Policy::default());
    let monday: Vec<&str> = app
        .classes_on(Weekday::Monday)
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(monday, vec!["cls-1"]);

    app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-1", "stu-2"]))
        .expect("save");
    assert_eq!(
        app.attendance(date("2024-06-03"), "cls-1"),
        set(&["stu-1", "stu-2"])
    );
    assert!(app.attendance(date("2024-06-04"), "cls-1").is_empty());
}

#[test]
fn deleting_a_student_keeps_historical_attendance() {
    let mut app = App::seeded(Policy::default());
    app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-1", "stu-2"]))
        .expect("save");
    app.delete_student("stu-2").expect("delete");
    assert_eq!(
        app.attendance(date("2024-06-03"), "cls-1"),
        set(&["stu-1", "stu-2"])
    );
}

#[test]
fn instructor_login_twice_is_the_same_identity() {
    let mut app = App::seeded(Policy::default());
    let first = app.login_on(Role::Instructor, date("2024-06-03")).clone();
    let second = app.login_on(Role::Instructor, date("2024-06-04")).clone();
    assert_eq!(first, second);
    assert_eq!(app.instructors().len(), 3);
    assert_eq!(app.instructor_name(&first.id), "Instrutor Social");
}

#[test]
fn add_instructor_ignores_supplied_role() {
    let mut app = App::empty(Policy::default());
    let id = app
        .add_instructor(InstructorDraft {
            name: "Prof. Rickson".to_string(),
            email: "rickson@bjj.com".to_string(),
            profile: Profile {
                belt_color: Some(BeltRank::Black),
                ..Profile::default()
            },
        })
        .expect("add");
    assert_eq!(app.instructor(&id).map(|u| u.role), Some(Role::Instructor));
    assert_eq!(app.instructor_name(&id), "Prof. Rickson");
}

#[test]
fn strict_mode_reports_not_found() {
    let mut app = App::seeded(Policy {
        strict: true,
        enforce_roles: false,
    });
    assert_eq!(
        app.delete_student("stu-404"),
        Err(StoreError::NotFound {
            kind: "student",
            id: "stu-404".to_string()
        })
    );
    assert_eq!(app.delete_class("cls-5"), Ok(Outcome::Applied));
    assert!(matches!(
        app.delete_class("cls-5"),
        Err(StoreError::NotFound { kind: "class", .. })
    ));
    assert!(matches!(
        app.delete_instructor("admin-1"),
        Err(StoreError::NotFound { kind: "instructor", .. })
    ));
}

#[test]
fn role_enforcement_gates_writes_not_reads() {
    let mut app = App::seeded(Policy {
        strict: false,
        enforce_roles: true,
    });

    assert!(matches!(
        app.add_student(student_draft("Early", BeltRank::White)),
        Err(StoreError::NotSignedIn { .. })
    ));
    assert!(matches!(
        app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-1"])),
        Err(StoreError::NotSignedIn { .. })
    ));

    app.login_on(Role::Instructor, date("2024-06-03"));
    assert_eq!(
        app.delete_class("cls-1"),
        Err(StoreError::Forbidden {
            action: "classes.delete",
            role: Role::Instructor
        })
    );
    app.save_attendance(date("2024-06-03"), "cls-1", set(&["stu-1"]))
        .expect("instructor records attendance");
    assert_eq!(app.classes().len(), 5);

    app.logout();
    app.login_on(Role::Admin, date("2024-06-03"));
    assert_eq!(app.delete_class("cls-1"), Ok(Outcome::Applied));
    assert_eq!(
        app.attendance(date("2024-06-03"), "cls-1"),
        set(&["stu-1"])
    );
}
