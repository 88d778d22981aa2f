table! {
    geo_data (type_, key) {
        #[sql_name = "type"]
        type_ -> Text,
        key -> Text,
        special -> Nullable<SmallInt>,
        has_poly -> Nullable<SmallInt>,
        json -> Nullable<Text>,
    }
}
