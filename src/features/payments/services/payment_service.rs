use chrono::{DateTime, Duration, FixedOffset, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use validator::Validate;

use crate::core::config::VnpayConfig;
use crate::core::error::{AppError, Result};
use crate::features::payments::dtos::{CreatePaymentDto, PaymentCallbackDto};
use crate::features::payments::models::{is_settled, response_message, ParamSet};
use crate::features::payments::services::SignatureService;
use crate::shared::constants::{
    COMMAND_PAY, CURRENCY_VND, GATEWAY_DATE_FORMAT, GATEWAY_UTC_OFFSET_SECS, VNP_AMOUNT,
    VNP_BANK_CODE, VNP_CARD_TYPE, VNP_COMMAND, VNP_CREATE_DATE, VNP_CURR_CODE, VNP_EXPIRE_DATE,
    VNP_IP_ADDR, VNP_LOCALE, VNP_ORDER_INFO, VNP_ORDER_TYPE, VNP_PAY_DATE, VNP_RESPONSE_CODE,
    VNP_RETURN_URL, VNP_SECURE_HASH, VNP_TMN_CODE, VNP_TRANSACTION_NO, VNP_TRANSACTION_STATUS,
    VNP_TXN_REF, VNP_VERSION,
};

/// Service for building payment redirects and verifying gateway callbacks
pub struct PaymentService {
    config: VnpayConfig,
}

impl PaymentService {
    pub fn new(config: VnpayConfig) -> Self {
        Self { config }
    }

    /// Build the signed redirect URL for a payment request, stamped now
    pub fn create_payment_url(&self, dto: &CreatePaymentDto, client_ip: &str) -> Result<String> {
        self.create_payment_url_at(dto, client_ip, Utc::now())
    }

    /// Build the signed redirect URL with an explicit creation instant
    pub fn create_payment_url_at(
        &self,
        dto: &CreatePaymentDto,
        client_ip: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if dto.amount <= Decimal::ZERO {
            return Err(AppError::Validation("Amount must be positive".to_string()));
        }

        let params = self.build_payment_params(dto, client_ip, now)?;
        let url = SignatureService::build_signed_url(
            &self.config.payment_url,
            &params,
            &self.config.hash_secret,
        )?;

        tracing::info!(
            "Payment URL created: txn_ref={}, amount={}",
            dto.txn_ref,
            dto.amount
        );

        Ok(url)
    }

    /// Verify the digest on a gateway callback and decode its fields.
    ///
    /// A tampered or missing digest is reported on the DTO, never as an
    /// error; the caller decides whether to reject the payment.
    pub fn verify_callback(&self, raw_params: &ParamSet) -> Result<PaymentCallbackDto> {
        let provided_hash = raw_params.get(VNP_SECURE_HASH).unwrap_or_default();
        let is_valid_signature = !provided_hash.is_empty()
            && SignatureService::validate_signature(
                raw_params,
                provided_hash,
                &self.config.hash_secret,
            )?;

        let txn_ref = raw_params.get(VNP_TXN_REF).unwrap_or_default().to_string();
        let amount = raw_params
            .get(VNP_AMOUNT)
            .and_then(|v| v.parse::<i64>().ok())
            .map(|minor| Decimal::new(minor, 2).normalize())
            .unwrap_or(Decimal::ZERO);
        let response_code = raw_params
            .get(VNP_RESPONSE_CODE)
            .unwrap_or_default()
            .to_string();
        let transaction_status = raw_params.get(VNP_TRANSACTION_STATUS).unwrap_or_default();
        let is_success = is_valid_signature && is_settled(&response_code, transaction_status);

        if !is_valid_signature {
            tracing::warn!("Payment callback failed signature check: txn_ref={}", txn_ref);
        } else {
            tracing::info!(
                "Payment callback verified: txn_ref={}, response_code={}",
                txn_ref,
                response_code
            );
        }

        Ok(PaymentCallbackDto {
            txn_ref,
            amount,
            transaction_no: raw_params.get(VNP_TRANSACTION_NO).map(str::to_string),
            bank_code: raw_params.get(VNP_BANK_CODE).map(str::to_string),
            card_type: raw_params.get(VNP_CARD_TYPE).map(str::to_string),
            pay_date: raw_params.get(VNP_PAY_DATE).map(str::to_string),
            response_message: response_message(&response_code).to_string(),
            response_code,
            is_valid_signature,
            is_success,
        })
    }

    fn build_payment_params(
        &self,
        dto: &CreatePaymentDto,
        client_ip: &str,
        now: DateTime<Utc>,
    ) -> Result<ParamSet> {
        // Gateway amounts are integer minor units (major VND x 100)
        let amount_minor = (dto.amount * Decimal::from(100))
            .trunc()
            .to_i64()
            .ok_or_else(|| AppError::Validation("Amount out of range".to_string()))?;

        let zone = FixedOffset::east_opt(GATEWAY_UTC_OFFSET_SECS)
            .expect("gateway UTC offset is in range");
        let create_date = now.with_timezone(&zone);
        let expire_date = create_date + Duration::minutes(self.config.expire_minutes);

        let mut params = ParamSet::new();
        params.insert(VNP_VERSION, self.config.version.clone());
        params.insert(VNP_COMMAND, COMMAND_PAY);
        params.insert(VNP_TMN_CODE, self.config.tmn_code.clone());
        params.insert(VNP_AMOUNT, amount_minor.to_string());
        params.insert(VNP_CURR_CODE, CURRENCY_VND);
        params.insert(VNP_TXN_REF, dto.txn_ref.clone());
        params.insert(VNP_ORDER_INFO, dto.order_info.clone());
        params.insert(VNP_ORDER_TYPE, self.config.order_type.clone());
        params.insert(
            VNP_LOCALE,
            dto.locale
                .clone()
                .unwrap_or_else(|| self.config.locale.clone()),
        );
        params.insert(VNP_RETURN_URL, self.config.return_url.clone());
        params.insert(VNP_IP_ADDR, client_ip);
        params.insert(
            VNP_CREATE_DATE,
            create_date.format(GATEWAY_DATE_FORMAT).to_string(),
        );
        params.insert(
            VNP_EXPIRE_DATE,
            expire_date.format(GATEWAY_DATE_FORMAT).to_string(),
        );
        if let Some(bank_code) = &dto.bank_code {
            params.insert(VNP_BANK_CODE, bank_code.clone());
        }

        Ok(params)
    }
}
