use super::*;

impl ZipCodeRepo for DbReadWrite<'_> {
    fn get_zip_records(&self, codes: &[&str]) -> Result<Vec<ZipRecord>> {
        get_zip_records(&mut self.conn.borrow_mut(), codes)
    }
    fn create_or_replace_zip_record(&self, record: &ZipRecord) -> Result<()> {
        create_or_replace_zip_record(&mut self.conn.borrow_mut(), record)
    }
    fn count_zip_records(&self) -> Result<usize> {
        count_zip_records(&mut self.conn.borrow_mut())
    }
}

impl ZipCodeRepo for DbConnection<'_> {
    fn get_zip_records(&self, codes: &[&str]) -> Result<Vec<ZipRecord>> {
        get_zip_records(&mut self.conn.borrow_mut(), codes)
    }
    fn create_or_replace_zip_record(&self, record: &ZipRecord) -> Result<()> {
        create_or_replace_zip_record(&mut self.conn.borrow_mut(), record)
    }
    fn count_zip_records(&self) -> Result<usize> {
        count_zip_records(&mut self.conn.borrow_mut())
    }
}

impl ZipCodeRepo for DbReadOnly<'_> {
    fn get_zip_records(&self, codes: &[&str]) -> Result<Vec<ZipRecord>> {
        get_zip_records(&mut self.conn.borrow_mut(), codes)
    }
    fn create_or_replace_zip_record(&self, _record: &ZipRecord) -> Result<()> {
        unreachable!();
    }
    fn count_zip_records(&self) -> Result<usize> {
        count_zip_records(&mut self.conn.borrow_mut())
    }
}

fn get_zip_records(conn: &mut SqliteConnection, codes: &[&str]) -> Result<Vec<ZipRecord>> {
    use schema::geo_data::dsl;
    if codes.is_empty() {
        return Ok(vec![]);
    }
    let rows = schema::geo_data::table
        .filter(dsl::type_.eq(ZIP_CODE_TYPE))
        .filter(dsl::key.eq_any(codes))
        .order_by(dsl::key)
        .select((dsl::key, dsl::special, dsl::json))
        .load::<models::GeoData>(conn)
        .map_err(from_diesel_err)?;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        match load_zip_record(row) {
            Ok(record) => records.push(record),
            Err(err) => log::warn!("Skipping corrupt zip code record: {err}"),
        }
    }
    Ok(records)
}

fn create_or_replace_zip_record(conn: &mut SqliteConnection, record: &ZipRecord) -> Result<()> {
    let new_geo_data = into_new_geo_data(record)?;
    let _count = diesel::replace_into(schema::geo_data::table)
        .values(&new_geo_data)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn count_zip_records(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::geo_data::dsl;
    Ok(schema::geo_data::table
        .filter(dsl::type_.eq(ZIP_CODE_TYPE))
        .select(diesel::dsl::count(dsl::key))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
