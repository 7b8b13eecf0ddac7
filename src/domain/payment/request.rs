//! Payment request value objects.
//!
//! A `PaymentRequestDraft` is what the donation form submitted; every field may
//! be absent. `PaymentRequest::from_draft` checks that the ten mandatory fields
//! are present and yields a request whose values are kept exactly as submitted.

use super::errors::PaymentError;

/// Separator used by the gateway for the mandatory fields blob.
pub const MANDATORY_FIELD_SEPARATOR: &str = "|";

/// The ten fields the gateway requires, in the order it expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MandatoryField {
    ReferenceNo,
    SubMerchantId,
    Amount,
    Name,
    Mobile,
    Email,
    City,
    State,
    Address,
    Pincode,
}

impl MandatoryField {
    /// All mandatory fields in gateway order.
    pub const ALL: [MandatoryField; 10] = [
        MandatoryField::ReferenceNo,
        MandatoryField::SubMerchantId,
        MandatoryField::Amount,
        MandatoryField::Name,
        MandatoryField::Mobile,
        MandatoryField::Email,
        MandatoryField::City,
        MandatoryField::State,
        MandatoryField::Address,
        MandatoryField::Pincode,
    ];

    /// Field name as it appears in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            MandatoryField::ReferenceNo => "referenceNo",
            MandatoryField::SubMerchantId => "subMerchantId",
            MandatoryField::Amount => "amount",
            MandatoryField::Name => "name",
            MandatoryField::Mobile => "mobile",
            MandatoryField::Email => "email",
            MandatoryField::City => "city",
            MandatoryField::State => "state",
            MandatoryField::Address => "address",
            MandatoryField::Pincode => "pincode",
        }
    }
}

impl std::fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated payment request as submitted by the donation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRequestDraft {
    pub reference_no: Option<String>,
    pub sub_merchant_id: Option<String>,
    pub amount: Option<String>,
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub paymode: Option<String>,
}

impl PaymentRequestDraft {
    fn get(&self, field: MandatoryField) -> Option<&str> {
        let value = match field {
            MandatoryField::ReferenceNo => &self.reference_no,
            MandatoryField::SubMerchantId => &self.sub_merchant_id,
            MandatoryField::Amount => &self.amount,
            MandatoryField::Name => &self.name,
            MandatoryField::Mobile => &self.mobile,
            MandatoryField::Email => &self.email,
            MandatoryField::City => &self.city,
            MandatoryField::State => &self.state,
            MandatoryField::Address => &self.address,
            MandatoryField::Pincode => &self.pincode,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Mandatory fields that are absent or empty, in gateway order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        MandatoryField::ALL
            .iter()
            .filter(|field| self.get(**field).is_none())
            .map(MandatoryField::as_str)
            .collect()
    }
}

/// A payment request with every mandatory field present.
///
/// Values are carried verbatim: no trimming, no numeric coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    reference_no: String,
    sub_merchant_id: String,
    amount: String,
    name: String,
    mobile: String,
    email: String,
    city: String,
    state: String,
    address: String,
    pincode: String,
    paymode: Option<String>,
}

impl PaymentRequest {
    /// Validate a draft.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::MissingFields` listing every absent or empty
    /// mandatory field.
    pub fn from_draft(draft: PaymentRequestDraft) -> Result<Self, PaymentError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(PaymentError::missing_fields(missing));
        }

        Ok(Self {
            reference_no: draft.reference_no.unwrap_or_default(),
            sub_merchant_id: draft.sub_merchant_id.unwrap_or_default(),
            amount: draft.amount.unwrap_or_default(),
            name: draft.name.unwrap_or_default(),
            mobile: draft.mobile.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            city: draft.city.unwrap_or_default(),
            state: draft.state.unwrap_or_default(),
            address: draft.address.unwrap_or_default(),
            pincode: draft.pincode.unwrap_or_default(),
            paymode: draft.paymode.filter(|p| !p.is_empty()),
        })
    }

    /// Value of a mandatory field.
    pub fn field(&self, field: MandatoryField) -> &str {
        match field {
            MandatoryField::ReferenceNo => &self.reference_no,
            MandatoryField::SubMerchantId => &self.sub_merchant_id,
            MandatoryField::Amount => &self.amount,
            MandatoryField::Name => &self.name,
            MandatoryField::Mobile => &self.mobile,
            MandatoryField::Email => &self.email,
            MandatoryField::City => &self.city,
            MandatoryField::State => &self.state,
            MandatoryField::Address => &self.address,
            MandatoryField::Pincode => &self.pincode,
        }
    }

    pub fn reference_no(&self) -> &str {
        &self.reference_no
    }

    pub fn sub_merchant_id(&self) -> &str {
        &self.sub_merchant_id
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Paymode supplied by the caller, if any.
    pub fn paymode(&self) -> Option<&str> {
        self.paymode.as_deref()
    }

    /// The pipe-delimited blob of all mandatory fields in gateway order.
    pub fn mandatory_fields(&self) -> String {
        MandatoryField::ALL
            .iter()
            .map(|field| self.field(*field))
            .collect::<Vec<_>>()
            .join(MANDATORY_FIELD_SEPARATOR)
    }
}
