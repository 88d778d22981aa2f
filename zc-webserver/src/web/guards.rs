use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};

#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);

/// The undecoded query string of the request, empty if none.
#[derive(Debug)]
pub struct RawQuery(pub String);

impl RawQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RawQuery {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let query = request
            .uri()
            .query()
            .map(|q| q.as_str().to_string())
            .unwrap_or_default();
        Outcome::Success(RawQuery(query))
    }
}
