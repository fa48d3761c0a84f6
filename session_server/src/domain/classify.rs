// The identity client reports failures only as free text, so known messages are
// matched literally. Extend these lists rather than matching at call sites.

// Messages meaning the account cannot use user-pool tokens or the identity pool.
pub const INVALID_ACCOUNT_MESSAGES: &[&str] = &[
    "getTokens does not support retrieving tokens for federated sign-in",
    "You must be signed-in with Cognito Userpools to be able to use getTokens",
    "Tokens are not supported for OAuth2",
    "Cognito Identity not configured",
];

// Messages meaning no user is signed in.
pub const SIGNED_OUT_MESSAGES: &[&str] =
    &["getTokens does not support retrieving tokens while signed-out"];

// Fragment reported by guest credential calls when no identity pool exists.
pub const IDENTITY_POOL_NOT_CONFIGURED: &str = "Cognito Identity not configured";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageClass {
    InvalidAccountType,
    SignedOut,
    Unrecognized,
}

/// Classify a client failure message by exact match against the known lists.
///
/// The invalid-account list is consulted first. No case folding or trimming is
/// applied.
pub fn classify(message: &str) -> MessageClass {
    if INVALID_ACCOUNT_MESSAGES.contains(&message) {
        MessageClass::InvalidAccountType
    } else if SIGNED_OUT_MESSAGES.contains(&message) {
        MessageClass::SignedOut
    } else {
        MessageClass::Unrecognized
    }
}

// Guest credential failures are matched by containment, not equality.
pub fn is_identity_pool_missing(message: &str) -> bool {
    message.contains(IDENTITY_POOL_NOT_CONFIGURED)
}
