use std::sync::Arc;

use crate::domain::ports::IdentityClient;
use crate::interface_adapters::jwt::JwtPayloadDecoder;

// Application state shared by the session handlers.
#[derive(Clone)]
pub struct AppState {
    // Any identity client implementation; handlers only read through it.
    pub identity: Arc<dyn IdentityClient>,
    pub decoder: JwtPayloadDecoder,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityClient>) -> Self {
        Self {
            identity,
            decoder: JwtPayloadDecoder,
        }
    }
}
