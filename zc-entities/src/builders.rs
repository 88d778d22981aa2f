pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{group_builder::*, zip_record_builder::*};

pub mod zip_record_builder {

    use super::*;
    use crate::{geo::*, zip::*};

    #[derive(Debug)]
    pub struct ZipRecordBuild {
        record: ZipRecord,
    }

    impl ZipRecordBuild {
        pub fn code(mut self, code: &str) -> Self {
            self.record.code = code.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.record.name = Some(name.into());
            self
        }
        pub fn center(mut self, lat: f64, lng: f64) -> Self {
            self.record.center = Some(MapPoint::from_lat_lng_deg(lat, lng));
            self
        }
        pub fn poly(mut self, points: &[(f64, f64)]) -> Self {
            self.record.poly = points
                .iter()
                .map(|(lat, lng)| MapPoint::from_lat_lng_deg(*lat, *lng))
                .collect();
            self
        }
        pub fn undeliverable(mut self) -> Self {
            self.record.undeliverable = true;
            self
        }
        pub fn finish(self) -> ZipRecord {
            self.record
        }
    }

    impl Builder for ZipRecord {
        type Build = ZipRecordBuild;
        fn build() -> ZipRecordBuild {
            ZipRecordBuild {
                record: ZipRecord::default(),
            }
        }
    }
}

pub mod group_builder {

    use crate::{group::*, zip::*};

    #[derive(Debug)]
    pub struct GroupBuild {
        number: usize,
        name: String,
        zip_codes: Vec<ZipCode>,
    }

    impl GroupBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.name = name.into();
            self
        }
        pub fn zip_codes(mut self, codes: &[&str]) -> Self {
            self.zip_codes = codes.iter().map(|c| c.parse().unwrap()).collect();
            self
        }
        pub fn finish(self) -> Group {
            let id = GroupId::new(self.number).unwrap();
            Group::new(id, self.name, self.zip_codes).unwrap()
        }
    }

    impl Group {
        pub fn build(number: usize) -> GroupBuild {
            GroupBuild {
                number,
                name: format!("Group {number}"),
                zip_codes: vec![],
            }
        }
    }
}
