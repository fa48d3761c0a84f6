// Interface adapters: HTTP surface, identity broker client and token decoding.

pub mod clients;
pub mod handlers;
pub mod jwt;
pub mod protocol;
pub mod routes;
pub mod state;
