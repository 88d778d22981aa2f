use super::prelude::*;

/// Stores the records, existing ones with the same zip code are replaced.
pub fn import_zip_records<R, I>(repo: &R, records: I) -> Result<usize>
where
    R: ZipCodeRepo,
    I: IntoIterator<Item = ZipRecord>,
{
    let mut count = 0;
    for record in records {
        let code: ZipCode = record.code.parse()?;
        if code.plus4().is_some() {
            return Err(Error::ZipCode(record.code));
        }
        repo.create_or_replace_zip_record(&record)?;
        count += 1;
    }
    log::info!("Imported {count} zip code records");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use zc_entities::builders::*;

    #[test]
    fn import_and_replace() {
        let db = MockDb::default();
        let records = vec![
            ZipRecord::build().code("98006").name("OLD").finish(),
            ZipRecord::build().code("98007").finish(),
            ZipRecord::build().code("98006").name("NEW").finish(),
        ];
        assert_eq!(3, import_zip_records(&db, records).unwrap());
        assert_eq!(2, db.count_zip_records().unwrap());
        let r = db.get_zip_records(&["98006"]).unwrap();
        assert_eq!(Some("NEW"), r[0].name.as_deref());
    }

    #[test]
    fn reject_invalid_codes() {
        let db = MockDb::default();
        for code in ["9800", "98006+1234"] {
            let records = vec![ZipRecord::build().code(code).finish()];
            assert!(matches!(
                import_zip_records(&db, records),
                Err(Error::ZipCode(_))
            ));
        }
        assert_eq!(0, db.count_zip_records().unwrap());
    }
}
