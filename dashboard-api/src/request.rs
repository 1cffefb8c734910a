use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::borrow::Cow;

/// How a request carries its payload.
#[derive(Debug)]
pub enum RequestData<T> {
    Empty,
    Query(T),
    Json(T),
}

/// A typed call against the dashboard API.
pub trait ApiRequest {
    type Data: Serialize;
    type Response: DeserializeOwned;
    const METHOD: Method = Method::GET;

    fn endpoint(&self) -> Cow<'_, str>;

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Empty
    }

    /// Whether a response status counts as success for this request.
    fn accepts(&self, status: StatusCode) -> bool {
        status.is_success()
    }
}

/// Response type for endpoints whose body carries nothing we read.
pub type EmptyResponse = serde::de::IgnoredAny;
