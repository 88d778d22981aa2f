use super::*;

#[get("/zipcodes?<q>")]
pub fn get_zipcodes(connections: sqlite::Connections, q: Option<&str>) -> Result<json::ZipRecords> {
    let codes = usecases::parse_lookup_query(q.unwrap_or_default())?;
    let records = usecases::lookup_zip_codes(&connections.shared()?, &codes)?;
    Ok(Json(to_json::zip_records(records)))
}
