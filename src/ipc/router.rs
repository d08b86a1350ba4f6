use super::handlers;
use super::types::Request;
use crate::app::App;
use crate::ipc::error::err;

pub fn handle_request(app: &mut App, req: Request) -> serde_json::Value {
    if let Some(resp) = handlers::core::try_handle(app, &req) {
        return resp;
    }
    if let Some(resp) = handlers::session::try_handle(app, &req) {
        return resp;
    }
    if let Some(resp) = handlers::students::try_handle(app, &req) {
        return resp;
    }
    if let Some(resp) = handlers::instructors::try_handle(app, &req) {
        return resp;
    }
    if let Some(resp) = handlers::classes::try_handle(app, &req) {
        return resp;
    }
    if let Some(resp) = handlers::attendance::try_handle(app, &req) {
        return resp;
    }

    err(
        &req.id,
        "not_implemented",
        format!("unknown method: {}", req.method),
        None,
    )
}
