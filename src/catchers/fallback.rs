use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::Request;
use serde_json::{json, Value};

// No failure may leave the relay unformatted; these keep Rocket's default
// catchers from answering with HTML.
#[catch(404)]
pub fn not_found(_req: &Request) -> status::NotFound<Json<Value>> {
    status::NotFound(Json(json!({ "error": "Not found" })))
}

#[catch(500)]
pub fn internal_server_error(_req: &Request) -> status::Custom<Json<Value>> {
    status::Custom(
        Status::InternalServerError,
        Json(json!({ "error": "Internal server error" })),
    )
}
