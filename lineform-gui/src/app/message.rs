use crate::schema::Field;
use crate::services::http::HttpError;
use crate::services::registration::{Profile, UserRecord};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    ProfileFetched(Result<Option<Profile>, HttpError>),
    UserFetched(Result<Option<UserRecord>, HttpError>),
    Submitted(Result<(), HttpError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    FieldEdited(Field, String),
    Submit,
    CloseAlert,
}
