use std::cell::RefCell;

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, crate::RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub zip_records: RefCell<Vec<ZipRecord>>,
}

impl ZipCodeRepo for MockDb {
    fn get_zip_records(&self, codes: &[&str]) -> RepoResult<Vec<ZipRecord>> {
        Ok(self
            .zip_records
            .borrow()
            .iter()
            .filter(|r| codes.contains(&r.code.as_str()))
            .cloned()
            .collect())
    }

    fn create_or_replace_zip_record(&self, record: &ZipRecord) -> RepoResult<()> {
        let mut records = self.zip_records.borrow_mut();
        match records.iter_mut().find(|r| r.code == record.code) {
            Some(r) => *r = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    fn count_zip_records(&self) -> RepoResult<usize> {
        Ok(self.zip_records.borrow().len())
    }
}
