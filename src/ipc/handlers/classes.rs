use crate::app::App;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_date_or_today, get_required, get_required_str, HandlerErr};
use crate::ipc::types::Request;
use crate::model::{ClassDraft, ClassSchedule, Weekday};
use serde_json::json;

fn handle_classes_list(app: &mut App) -> serde_json::Value {
    json!({ "classes": app.classes() })
}

fn handle_classes_today(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let date = get_date_or_today(&req.params, "date")?;
    let day = Weekday::of(date);
    Ok(json!({
        "date": date.to_string(),
        "dayOfWeek": day,
        "classes": app.classes_on(day),
    }))
}

fn handle_classes_create(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let draft: ClassDraft = get_required(&req.params, "class")?;
    let class_id = app.add_class(draft)?;
    Ok(json!({ "classId": class_id }))
}

fn handle_classes_update(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let class: ClassSchedule = get_required(&req.params, "class")?;
    let outcome = app.update_class(class)?;
    Ok(json!({ "applied": outcome.applied() }))
}

fn handle_classes_delete(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let class_id = get_required_str(&req.params, "classId")?;
    let outcome = app.delete_class(&class_id)?;
    Ok(json!({ "applied": outcome.applied() }))
}

pub fn try_handle(app: &mut App, req: &Request) -> Option<serde_json::Value> {
    let res = match req.method.as_str() {
        "classes.list" => Ok(handle_classes_list(app)),
        "classes.today" => handle_classes_today(app, req),
        "classes.create" => handle_classes_create(app, req),
        "classes.update" => handle_classes_update(app, req),
        "classes.delete" => handle_classes_delete(app, req),
        _ => return None,
    };
    Some(match res {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}
