//! InitiatePaymentHandler - Command handler for building the gateway redirect.

use std::sync::Arc;

use url::Url;

use crate::domain::payment::{
    GatewayParam, GatewaySettings, PaymentError, PaymentRequest, PaymentRequestDraft,
};
use crate::ports::FieldCipher;

/// Command to start a payment for a submitted donation form.
#[derive(Debug, Clone)]
pub struct InitiatePaymentCommand {
    pub draft: PaymentRequestDraft,
}

/// Result of successful payment initiation.
#[derive(Debug, Clone)]
pub struct InitiatePaymentResult {
    pub reference_no: String,
    pub payment_url: Url,
}

/// Handler for building the encrypted gateway redirect URL.
///
/// No call is made to the gateway; the browser follows the returned URL.
pub struct InitiatePaymentHandler {
    cipher: Arc<dyn FieldCipher>,
    gateway: Arc<GatewaySettings>,
}

impl InitiatePaymentHandler {
    pub fn new(cipher: Arc<dyn FieldCipher>, gateway: Arc<GatewaySettings>) -> Self {
        Self { cipher, gateway }
    }

    pub fn handle(
        &self,
        cmd: InitiatePaymentCommand,
    ) -> Result<InitiatePaymentResult, PaymentError> {
        // 1. Validate mandatory fields
        let request = PaymentRequest::from_draft(cmd.draft)?;

        // 2. Resolve each gateway parameter, encrypting those the gateway expects encrypted
        let paymode = request
            .paymode()
            .unwrap_or_else(|| self.gateway.default_paymode());
        let mandatory_fields = request.mandatory_fields();
        let params = GatewayParam::ALL.map(|param| {
            let plain = match param {
                GatewayParam::MerchantId => self.gateway.merchant_id(),
                GatewayParam::MandatoryFields => mandatory_fields.as_str(),
                GatewayParam::OptionalFields => "",
                GatewayParam::ReturnUrl => self.gateway.return_url(),
                GatewayParam::ReferenceNo => request.reference_no(),
                GatewayParam::SubMerchantId => request.sub_merchant_id(),
                GatewayParam::TransactionAmount => request.amount(),
                GatewayParam::Paymode => paymode,
            };
            let value = if param.is_encrypted() {
                self.cipher.encrypt(plain)
            } else {
                plain.to_string()
            };
            (param, value)
        });

        // 3. Assemble the redirect URL in gateway key order
        let payment_url = self.gateway.redirect_url(params);

        Ok(InitiatePaymentResult {
            reference_no: request.reference_no().to_string(),
            payment_url,
        })
    }
}
