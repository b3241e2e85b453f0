pub const LOGIN_PATH: &'static str = "/desktop-login";
pub const REDIRECT_PATH: &'static str = "/desktop-redirect";

pub const TOKEN_COOKIE_NAME: &'static str = "accessToken";
pub const TOKEN_QUERY_NAME: &'static str = "token";

pub const CLIENT_QUERY_NAME: &'static str = "client";
pub const DESKTOP_CLIENT: &'static str = "desktop";
