use crate::app::App;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_required, get_required_str, HandlerErr};
use crate::ipc::types::Request;
use crate::model::{InstructorDraft, User};
use serde_json::json;

fn handle_instructors_list(app: &mut App) -> serde_json::Value {
    json!({ "instructors": app.instructors() })
}

fn handle_instructors_create(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let draft: InstructorDraft = get_required(&req.params, "instructor")?;
    let instructor_id = app.add_instructor(draft)?;
    Ok(json!({ "instructorId": instructor_id }))
}

fn handle_instructors_update(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    // The stored role is always INSTRUCTOR; a missing role on the wire is fine.
    let mut raw = req.params.get("instructor").cloned().unwrap_or_default();
    if let Some(obj) = raw.as_object_mut() {
        obj.insert("role".to_string(), json!("INSTRUCTOR"));
    }
    let instructor: User = get_required(&json!({ "instructor": raw }), "instructor")?;
    let outcome = app.update_instructor(instructor)?;
    Ok(json!({ "applied": outcome.applied() }))
}

fn handle_instructors_delete(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let instructor_id = get_required_str(&req.params, "instructorId")?;
    let outcome = app.delete_instructor(&instructor_id)?;
    Ok(json!({ "applied": outcome.applied() }))
}

fn handle_instructors_name(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let instructor_id = get_required_str(&req.params, "instructorId")?;
    Ok(json!({ "name": app.instructor_name(&instructor_id) }))
}

pub fn try_handle(app: &mut App, req: &Request) -> Option<serde_json::Value> {
    let res = match req.method.as_str() {
        "instructors.list" => Ok(handle_instructors_list(app)),
        "instructors.create" => handle_instructors_create(app, req),
        "instructors.update" => handle_instructors_update(app, req),
        "instructors.delete" => handle_instructors_delete(app, req),
        "instructors.name" => handle_instructors_name(app, req),
        _ => return None,
    };
    Some(match res {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}
