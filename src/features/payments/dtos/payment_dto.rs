use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request DTO for creating a payment redirect
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    /// Amount to charge in major VND units
    pub amount: Decimal,

    /// Merchant transaction reference, unique per payment attempt
    #[validate(
        length(min = 1, max = 100),
        regex(
            path = "*crate::shared::validation::TXN_REF_REGEX",
            message = "Transaction reference must be URL-safe (alphanumeric, '-', '_')"
        )
    )]
    pub txn_ref: String,

    /// Order description shown on the gateway payment page
    #[validate(length(min = 1, max = 255, message = "Order info must be 1-255 characters"))]
    pub order_info: String,

    /// Preselected bank on the gateway page; omitted when not set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    /// Display locale override; falls back to the configured default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Verified and decoded payment callback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCallbackDto {
    pub txn_ref: String,
    /// Amount in major VND units, converted back from the gateway's minor units
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<String>,
    pub response_code: String,
    pub response_message: String,
    /// Whether the callback's digest matched; callers decide how to react
    pub is_valid_signature: bool,
    /// Valid signature and both gateway status codes report success
    pub is_success: bool,
}
