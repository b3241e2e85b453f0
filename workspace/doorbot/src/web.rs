use http_types;
use tide;

pub use http_types::Url;
pub use tide::{Body, Error, Redirect, Response, Result, StatusCode};
pub type Request = tide::Request<crate::Services>;

pub fn cookie_header(request: &Request) -> Option<String> {
  request
    .header("Cookie")
    .and_then(|list| list.get(0))
    .map(|value| value.to_string())
}
