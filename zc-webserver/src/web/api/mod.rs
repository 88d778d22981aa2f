use std::{fmt::Display, result};

use rocket::serde::json::Json;
use rocket::{
    self, get,
    http::{ContentType, Status},
    response::{self, Responder},
    routes, Route, State,
};
use zc_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{
    adapters::json::{self, to_json},
    core::usecases,
    web::sqlite,
};

mod error;
mod util;
mod zipcodes;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   zip codes   --- //
        zipcodes::get_zipcodes,
        // ---   server   --- //
        util::get_version,
        util::get_api,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
