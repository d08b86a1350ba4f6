use crate::app::App;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_date_or_today, get_required, get_required_str, HandlerErr};
use crate::ipc::types::Request;
use crate::model::{Student, StudentDraft};
use serde_json::json;

fn handle_students_list(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    // Ages are computed against params.date so the dashboard can show them.
    let on = get_date_or_today(&req.params, "date")?;
    let students: Vec<serde_json::Value> = app
        .students()
        .iter()
        .map(|s| {
            let mut v = json!(s);
            v["age"] = json!(s.age_on(on));
            v
        })
        .collect();
    Ok(json!({ "students": students }))
}

fn handle_students_create(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let draft: StudentDraft = get_required(&req.params, "student")?;
    let student_id = app.add_student(draft)?;
    Ok(json!({ "studentId": student_id }))
}

fn handle_students_update(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let student: Student = get_required(&req.params, "student")?;
    let outcome = app.update_student(student)?;
    Ok(json!({ "applied": outcome.applied() }))
}

fn handle_students_delete(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let student_id = get_required_str(&req.params, "studentId")?;
    let outcome = app.delete_student(&student_id)?;
    Ok(json!({ "applied": outcome.applied() }))
}

pub fn try_handle(app: &mut App, req: &Request) -> Option<serde_json::Value> {
    let res = match req.method.as_str() {
        "students.list" => handle_students_list(app, req),
        "students.create" => handle_students_create(app, req),
        "students.update" => handle_students_update(app, req),
        "students.delete" => handle_students_delete(app, req),
        _ => return None,
    };
    Some(match res {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}
