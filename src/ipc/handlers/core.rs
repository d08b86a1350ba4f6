use crate::app::App;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_date_or_today, HandlerErr};
use crate::ipc::types::Request;
use serde_json::json;

fn handle_health(app: &mut App, req: &Request) -> serde_json::Value {
    let policy = app.policy();
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "strict": policy.strict,
            "enforceRoles": policy.enforce_roles,
            "socialLoginEmail": app.session().social_email(),
        }),
    )
}

fn handle_dashboard_summary(app: &mut App, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let today = get_date_or_today(&req.params, "date")?;
    let summary = app.summary(today);
    Ok(json!({
        "date": today.to_string(),
        "summary": summary,
    }))
}

pub fn try_handle(app: &mut App, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(app, req)),
        "dashboard.summary" => Some(match handle_dashboard_summary(app, req) {
            Ok(v) => ok(&req.id, v),
            Err(e) => e.response(&req.id),
        }),
        _ => None,
    }
}
