// Domain layer: session types, classified errors and the identity ports.

pub mod classify;
pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{AuthSession, AwsCredentials, Outcome, UserPoolTokens, UserState};
pub use errors::{ClientFailure, SessionError};
pub use ports::{IdentityClient, TokenDecoder};
