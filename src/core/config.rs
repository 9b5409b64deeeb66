use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub vnpay: VnpayConfig,
}

/// Payment gateway (VNPay) configuration
///
/// The hash secret is read here once and passed explicitly into the
/// signature codec at call time; nothing below the config layer reads
/// ambient state.
#[derive(Debug, Clone)]
pub struct VnpayConfig {
    /// Gateway payment endpoint the signed redirect URL points at
    pub payment_url: String,
    /// Merchant terminal code issued by the gateway
    pub tmn_code: String,
    /// Shared secret for HMAC-SHA512 request/response signing
    pub hash_secret: String,
    /// Merchant-side URL the gateway redirects the customer back to
    pub return_url: String,
    /// Gateway API version sent as `vnp_Version`
    pub version: String,
    /// Default display locale sent as `vnp_Locale`
    pub locale: String,
    /// Order type classifier sent as `vnp_OrderType`
    pub order_type: String,
    /// Minutes until an unfinished payment request expires
    pub expire_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            vnpay: VnpayConfig::from_env()?,
        })
    }
}

impl VnpayConfig {
    const DEFAULT_PAYMENT_URL: &'static str =
        "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html";
    const DEFAULT_RETURN_URL: &'static str = "http://localhost:3000/payment/return";
    const DEFAULT_VERSION: &'static str = "2.1.0";
    const DEFAULT_LOCALE: &'static str = "vn";
    const DEFAULT_ORDER_TYPE: &'static str = "other";
    const DEFAULT_EXPIRE_MINUTES: i64 = 15;

    pub fn from_env() -> Result<Self, String> {
        let payment_url = env::var("VNPAY_PAYMENT_URL")
            .unwrap_or_else(|_| Self::DEFAULT_PAYMENT_URL.to_string());

        let tmn_code = env::var("VNPAY_TMN_CODE")
            .map_err(|_| "VNPAY_TMN_CODE environment variable is required".to_string())?;

        let hash_secret = env::var("VNPAY_HASH_SECRET")
            .map_err(|_| "VNPAY_HASH_SECRET environment variable is required".to_string())?;

        let return_url =
            env::var("VNPAY_RETURN_URL").unwrap_or_else(|_| Self::DEFAULT_RETURN_URL.to_string());

        let version =
            env::var("VNPAY_VERSION").unwrap_or_else(|_| Self::DEFAULT_VERSION.to_string());

        let locale = env::var("VNPAY_LOCALE").unwrap_or_else(|_| Self::DEFAULT_LOCALE.to_string());

        let order_type =
            env::var("VNPAY_ORDER_TYPE").unwrap_or_else(|_| Self::DEFAULT_ORDER_TYPE.to_string());

        let expire_minutes = env::var("VNPAY_EXPIRE_MINUTES")
            .unwrap_or_else(|_| Self::DEFAULT_EXPIRE_MINUTES.to_string())
            .parse::<i64>()
            .map_err(|_| "VNPAY_EXPIRE_MINUTES must be a valid number".to_string())?;

        Ok(Self {
            payment_url,
            tmn_code,
            hash_secret,
            return_url,
            version,
            locale,
            order_type,
            expire_minutes,
        })
    }
}
