// Use cases layer: session assembly, user-state dispatch and sign-in.

pub mod auth_session;
pub mod fetch_session;
pub mod sign_in;

#[cfg(test)]
pub(crate) mod test_support;
