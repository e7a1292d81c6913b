use crate::routes::send::MISSING_FIELDS_ERROR;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::Request;
use serde_json::{json, Value};

// Rocket answers 422 when the JSON body fails to deserialize; clients of the
// relay expect a 400 with the same shape as a validation failure.
#[catch(422)]
pub fn unprocessable_entity_to_bad_request(_req: &Request) -> status::BadRequest<Json<Value>> {
    status::BadRequest(Json(json!({ "error": MISSING_FIELDS_ERROR })))
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> status::BadRequest<Json<Value>> {
    status::BadRequest(Json(json!({ "error": MISSING_FIELDS_ERROR })))
}
