use maud::Markup;
use rocket::{
    get,
    http::Status,
    post,
    response::content::{RawCss, RawJavaScript},
    routes, Route, State,
};

use crate::{
    adapters::json::to_json,
    core::{
        usecases,
        util::query::{decode_groups, parse_query},
    },
    web::{api::ApiError, guards::*, sqlite, Cfg},
};
use zc_core::usecases::Error as ParameterError;

mod surface;
mod view;


use self::surface::ScriptSurface;

const MAP_JS: &str = include_str!("map.js");
const MAIN_CSS: &str = include_str!("main.css");

const GROUP_NAME_FIELD: &str = "groupName";
const GROUP_CODES_FIELD: &str = "groupCodes";

type Result<T> = std::result::Result<T, ApiError>;

#[get("/")]
pub fn get_index() -> Markup {
    view::index(&[], &view::GroupForm::default())
}

#[post("/groups", data = "<body>")]
pub fn post_groups(body: String) -> (Status, Markup) {
    let params = parse_query(&body);
    let mut groups = decode_groups(&params);
    let name = params.get(GROUP_NAME_FIELD).map(String::as_str).unwrap_or_default();
    let codes = params.get(GROUP_CODES_FIELD).map(String::as_str).unwrap_or_default();
    match usecases::add_group(&groups, name, codes) {
        Ok(group) => {
            groups.push(group);
            (Status::Ok, view::index(&groups, &view::GroupForm::default()))
        }
        Err(err) => {
            debug!("Rejected new group: {err}");
            let form = view::GroupForm {
                name,
                codes,
                invalidation: match &err {
                    ParameterError::NewGroup(invalidation) => Some(invalidation.clone()),
                    _ => None,
                },
                message: Some(err.to_string()),
            };
            (Status::BadRequest, view::index(&groups, &form))
        }
    }
}

#[get("/map")]
pub fn get_map(db: sqlite::Connections, query: RawQuery, cfg: &State<Cfg>) -> Result<Markup> {
    let groups = decode_groups(&parse_query(query.as_str()));
    let mut surface = ScriptSurface::default();
    let registry = usecases::prepare_map(&db.shared()?, groups, &mut surface)?;
    let setup = to_json::map_setup(&cfg.map, &registry, surface.into_commands());
    let setup = serde_json::to_string(&setup)?;
    Ok(view::map(&registry, &setup))
}

#[get("/map.js")]
pub fn get_map_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAP_JS)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

pub fn routes() -> Vec<Route> {
    routes![get_index, post_groups, get_map, get_map_js, get_main_css]
}
