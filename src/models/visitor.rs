//! Anonymous visitor identity carried in the session cookie.

use std::future::{Ready, ready};

use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

const VISITOR_KEY: &str = "visitor_id";

/// Identifies whose search and conversation state a request touches. A new id
/// is minted and stored in the session on the first request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visitor(Uuid);

impl Visitor {
    pub fn id(&self) -> Uuid {
        self.0
    }

    fn from_session(session: &Session) -> Result<Self, actix_web::Error> {
        if let Some(id) = session.get::<Uuid>(VISITOR_KEY)? {
            return Ok(Self(id));
        }
        let id = Uuid::new_v4();
        session.insert(VISITOR_KEY, id)?;
        log::debug!("New visitor {id}");
        Ok(Self(id))
    }
}

impl FromRequest for Visitor {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_session(&req.get_session()))
    }
}
