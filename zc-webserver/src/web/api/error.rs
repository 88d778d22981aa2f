use super::json_error_response;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;
pub use zc_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        ParameterError::from(err).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(ParameterError::Repo(RepoError::NotFound)) => {
                json_error_response(req, &RepoError::NotFound, Status::NotFound)
            }
            Error::Parameter(ParameterError::Repo(RepoError::Other(err))) | Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
            Error::Parameter(err) => json_error_response(req, &err, Status::BadRequest),
        }
    }
}
