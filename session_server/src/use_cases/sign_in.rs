use tracing::{debug, info, warn};

use crate::domain::entities::{
    CodeDeliveryDetails, DeliveryMedium, NextSignInStep, SignInOutcome, SignInResult,
    SignInState, SignInStep, UserCodeDeliveryDetails,
};
use crate::domain::errors::SessionError;
use crate::domain::ports::IdentityClient;
use crate::interface_adapters::protocol::SignInRequest;

// Sign-in use case with an injected identity client.
pub struct SignInUseCase<'a, C: ?Sized> {
    pub client: &'a C,
}

impl<C> SignInUseCase<'_, C>
where
    C: IdentityClient + ?Sized,
{
    pub async fn execute(&self, request: SignInRequest) -> Result<SignInOutcome, SessionError> {
        let result = self
            .client
            .sign_in(
                &request.username,
                &request.password,
                request.metadata.as_ref(),
            )
            .await
            .map_err(|failure| {
                warn!(message = %failure.message, "sign in failed");
                SessionError::other("Sign in failed", "See attached exception for more details")
                    .with_cause(failure)
            })?;

        let outcome = convert_sign_in_result(result)?;

        // Touch the token bundle so the client caches the signed-in user id.
        // The outcome of this call does not affect the sign-in result.
        if let Err(failure) = self.client.tokens().await {
            debug!(message = %failure.message, "token fetch after sign in failed");
        }

        info!(
            is_signed_in = outcome.is_signed_in,
            step = ?outcome.next_step.step,
            "sign in completed"
        );
        Ok(outcome)
    }
}

fn convert_sign_in_result(result: SignInResult) -> Result<SignInOutcome, SessionError> {
    Ok(SignInOutcome {
        is_signed_in: result.sign_in_state == SignInState::Done,
        next_step: NextSignInStep {
            step: sign_in_step(result.sign_in_state)?,
            additional_info: result.parameters.unwrap_or_default(),
            code_delivery_details: result.code_details.map(convert_code_delivery_details),
        },
    })
}

fn sign_in_step(state: SignInState) -> Result<SignInStep, SessionError> {
    match state {
        SignInState::SmsMfa => Ok(SignInStep::ConfirmSignInWithSmsMfaCode),
        SignInState::CustomChallenge => Ok(SignInStep::ConfirmSignInWithCustomChallenge),
        SignInState::NewPasswordRequired => Ok(SignInStep::ConfirmSignInWithNewPassword),
        SignInState::Done => Ok(SignInStep::Done),
        SignInState::PasswordVerifier
        | SignInState::DeviceSrpAuth
        | SignInState::DevicePasswordVerifier
        | SignInState::AdminNoSrpAuth
        | SignInState::Unknown => Err(SessionError::other(
            format!("Unsupported sign in state: {state:?}"),
            "Sign in reached a state this service cannot continue from.",
        )),
    }
}

fn convert_code_delivery_details(details: UserCodeDeliveryDetails) -> CodeDeliveryDetails {
    CodeDeliveryDetails {
        destination: details.destination,
        delivery_medium: DeliveryMedium::from_name(&details.delivery_medium),
        attribute_name: details.attribute_name,
    }
}
