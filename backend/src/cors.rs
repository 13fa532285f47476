use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::Header;

/// Allows `http://localhost*` origins (the dev frontend), plus one
/// configured origin.
#[derive(Debug, Clone, Default)]
pub struct CORS {
    allowed_origin: Option<String>,
}

impl CORS {
    pub fn new(allowed_origin: Option<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.filter(|o| !o.trim().is_empty()),
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        origin.starts_with("http://localhost") || self.allowed_origin.as_deref() == Some(origin)
    }
}

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let Some(origin) = req.headers().get_one("Origin") else { return };

        if self.allows(origin) {
            res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
            res.set_header(Header::new("Access-Control-Allow-Methods", "GET, PUT, DELETE, OPTIONS"));
            res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
            res.set_header(Header::new("Access-Control-Max-Age", "86400"));
        }
    }
}
