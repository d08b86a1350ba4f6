use crate::app::App;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_required, get_required_date, get_required_str, HandlerErr};
use crate::ipc::types::Request;
use crate::model::PresentSet;
use serde_json::json;

fn handle_attendance_get(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let date = get_required_date(&req.params, "date")?;
    let class_id = get_required_str(&req.params, "classId")?;
    let present = app.attendance(date, &class_id);
    Ok(json!({
        "date": date.to_string(),
        "classId": class_id,
        "presentStudentIds": present,
    }))
}

fn handle_attendance_save(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let date = get_required_date(&req.params, "date")?;
    let class_id = get_required_str(&req.params, "classId")?;
    // A list on the wire; duplicates collapse into the set.
    let present: PresentSet = get_required(&req.params, "presentStudentIds")?;
    let count = present.len();
    app.save_attendance(date, &class_id, present)?;
    Ok(json!({ "presentCount": count }))
}

fn handle_attendance_list(app: &mut App) -> serde_json::Value {
    json!({ "records": app.attendance_records() })
}

pub fn try_handle(app: &mut App, req: &Request) -> Option<serde_json::Value> {
    let res = match req.method.as_str() {
        "attendance.get" => handle_attendance_get(app, req),
        "attendance.save" => handle_attendance_save(app, req),
        "attendance.list" => Ok(handle_attendance_list(app)),
        _ => return None,
    };
    Some(match res {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}
