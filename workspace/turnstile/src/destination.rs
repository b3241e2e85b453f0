use crate::constants;
use crate::cookies;

#[derive(Debug, PartialEq, Clone)]
pub enum Destination {
  Deeplink(String),
  Root,
  Login,
  Passthrough,
}

#[derive(Debug, Default, Clone)]
pub struct Visit {
  pub host: String,
  pub path: String,
  pub client: Option<String>,
  pub cookies: Option<String>,
}

impl Visit {
  pub fn desktop_trigger(&self) -> bool {
    self.path == constants::LOGIN_PATH || self.client.as_deref() == Some(constants::DESKTOP_CLIENT)
  }

  // An empty token reads the same as a missing one.
  pub fn token(&self) -> Option<&str> {
    cookies::find(self.cookies.as_deref(), constants::TOKEN_COOKIE_NAME).filter(|token| !token.is_empty())
  }
}

pub fn divert(visit: &Visit, target: &str) -> Destination {
  if visit.host != target {
    log::debug!("visit from foreign host '{}', sending to login", visit.host);
    return Destination::Login;
  }

  if !visit.desktop_trigger() {
    return Destination::Passthrough;
  }

  match visit.token() {
    Some(token) => Destination::Deeplink(token.to_string()),
    None => Destination::Root,
  }
}

impl Destination {
  pub fn location(&self, target: &str) -> Option<String> {
    match self {
      Destination::Login => Some(format!("https://{}{}", target, constants::LOGIN_PATH)),
      Destination::Root => Some(format!("https://{}", target)),
      Destination::Deeplink(token) => Some(format!(
        "https://{}{}?{}={}",
        target,
        constants::REDIRECT_PATH,
        constants::TOKEN_QUERY_NAME,
        urlencoding::encode(token)
      )),
      Destination::Passthrough => None,
    }
  }
}

#[cfg(test)]
mod test {
  use super::{divert, Destination, Visit};

  const TARGET: &'static str = "app.getoutline.com";

  fn visit(host: &str, path: &str) -> Visit {
    Visit {
      host: host.into(),
      path: path.into(),
      client: None,
      cookies: None,
    }
  }

  #[test]
  fn foreign_host_goes_to_login() {
    let destination = divert(&visit("other.example.com", "/anything"), TARGET);
    assert_eq!(destination, Destination::Login);
    assert_eq!(
      destination.location(TARGET),
      Some("https://app.getoutline.com/desktop-login".to_string())
    );
  }

  #[test]
  fn foreign_host_goes_to_login_even_with_trigger_and_token() {
    let destination = divert(
      &Visit {
        cookies: Some("accessToken=tok123".into()),
        ..visit("other.example.com", "/desktop-login")
      },
      TARGET,
    );
    assert_eq!(destination, Destination::Login);
  }

  #[test]
  fn login_path_with_token_goes_to_deeplink() {
    let destination = divert(
      &Visit {
        cookies: Some("accessToken=tok123".into()),
        ..visit(TARGET, "/desktop-login")
      },
      TARGET,
    );
    assert_eq!(destination, Destination::Deeplink("tok123".to_string()));
    assert_eq!(
      destination.location(TARGET),
      Some("https://app.getoutline.com/desktop-redirect?token=tok123".to_string())
    );
  }

  #[test]
  fn login_path_without_token_goes_to_root() {
    let destination = divert(&visit(TARGET, "/desktop-login"), TARGET);
    assert_eq!(destination, Destination::Root);
    assert_eq!(destination.location(TARGET), Some("https://app.getoutline.com".to_string()));
  }

  #[test]
  fn desktop_query_with_token_goes_to_deeplink() {
    let destination = divert(
      &Visit {
        client: Some("desktop".into()),
        cookies: Some("a=1; accessToken=tok456; b=2".into()),
        ..visit(TARGET, "/")
      },
      TARGET,
    );
    assert_eq!(destination, Destination::Deeplink("tok456".to_string()));
  }

  #[test]
  fn other_client_query_is_not_a_trigger() {
    let destination = divert(
      &Visit {
        client: Some("mobile".into()),
        cookies: Some("accessToken=tok456".into()),
        ..visit(TARGET, "/")
      },
      TARGET,
    );
    assert_eq!(destination, Destination::Passthrough);
  }

  #[test]
  fn plain_visit_passes_through() {
    let destination = divert(&visit(TARGET, "/some/other/path"), TARGET);
    assert_eq!(destination, Destination::Passthrough);
    assert_eq!(destination.location(TARGET), None);
  }

  #[test]
  fn empty_token_reads_as_missing() {
    let destination = divert(
      &Visit {
        cookies: Some("accessToken=".into()),
        ..visit(TARGET, "/desktop-login")
      },
      TARGET,
    );
    assert_eq!(destination, Destination::Root);
  }

  #[test]
  fn deeplink_token_is_percent_encoded() {
    let destination = Destination::Deeplink("a+b/c=d e".to_string());
    let location = destination.location(TARGET).unwrap();
    assert_eq!(
      location,
      "https://app.getoutline.com/desktop-redirect?token=a%2Bb%2Fc%3Dd%20e"
    );

    let encoded = location.split('=').skip(1).collect::<Vec<&str>>().join("=");
    assert_eq!(urlencoding::decode(&encoded).unwrap(), "a+b/c=d e");
  }
}
