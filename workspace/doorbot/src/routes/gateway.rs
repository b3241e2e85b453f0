use http_types;

use crate::constants;
use crate::web::{cookie_header, Body, Error, Redirect, Request, Response, Result, StatusCode, Url};

pub async fn intercept(request: Request) -> Result {
  let target = request.state().host().await?;

  let url = request.url();
  let visit = turnstile::Visit {
    host: url.host_str().unwrap_or_default().to_string(),
    path: url.path().to_string(),
    client: url
      .query_pairs()
      .find_map(|(key, value)| {
        if key == turnstile::constants::CLIENT_QUERY_NAME {
          Some(value.to_string())
        } else {
          None
        }
      }),
    cookies: cookie_header(&request),
  };

  let destination = turnstile::divert(&visit, &target);
  log::info!("visit to '{}{}' diverted - {:?}", visit.host, visit.path, destination);

  match destination.location(&target) {
    Some(location) => Ok(Redirect::new(location).into()),
    None => forward(request).await,
  }
}

fn origin_base() -> Option<Url> {
  std::env::var(constants::ORIGIN_URL_ENV)
    .ok()
    .and_then(|raw| Url::parse(&raw).ok())
}

async fn forward(request: Request) -> Result {
  let client = request.state().client();
  let mut outbound: http_types::Request = request.into();

  // Without a configured origin the request is re-issued against its own url, leaving routing to
  // the surrounding network.
  if let Some(base) = origin_base() {
    let url = outbound.url_mut();
    url.set_scheme(base.scheme()).ok();
    url.set_host(base.host_str()).ok();
    url.set_port(base.port()).ok();
  }

  log::debug!("forwarding request upstream - '{}'", outbound.url());

  let upstream = client.send(outbound).await.map_err(|error| {
    log::warn!("origin fetch failed - {}", error);
    Error::from_str(StatusCode::BadGateway, "origin-unreachable")
  })?;

  Ok(relay(upstream))
}

fn relay(upstream: surf::Response) -> Response {
  let headers = upstream
    .iter()
    .map(|(name, values)| (name.clone(), values.clone()))
    .collect::<Vec<_>>();

  let len = upstream.len();
  let mut response = Response::new(upstream.status());

  for (name, values) in headers {
    response.insert_header(name, &values);
  }

  response.set_body(Body::from_reader(async_std::io::BufReader::new(upstream), len));
  response
}
