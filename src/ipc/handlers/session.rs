use crate::app::App;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_required, HandlerErr};
use crate::ipc::types::Request;
use crate::model::Role;
use serde_json::json;

fn handle_login(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let role: Role = get_required(&req.params, "role")?;
    let user = app.login(role);
    Ok(json!({ "user": user }))
}

fn handle_logout(app: &mut App) -> serde_json::Value {
    app.logout();
    json!({})
}

fn handle_current(app: &mut App) -> serde_json::Value {
    json!({ "user": app.current_user() })
}

pub fn try_handle(app: &mut App, req: &Request) -> Option<serde_json::Value> {
    let res = match req.method.as_str() {
        "session.login" => handle_login(app, req),
        "session.logout" => Ok(handle_logout(app)),
        "session.current" => Ok(handle_current(app)),
        _ => return None,
    };
    Some(match res {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}
