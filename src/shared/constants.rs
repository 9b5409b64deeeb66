// =============================================================================
// GATEWAY PARAMETER NAMES
// =============================================================================

pub const VNP_VERSION: &str = "vnp_Version";
pub const VNP_COMMAND: &str = "vnp_Command";
pub const VNP_TMN_CODE: &str = "vnp_TmnCode";
pub const VNP_AMOUNT: &str = "vnp_Amount";
pub const VNP_CURR_CODE: &str = "vnp_CurrCode";
pub const VNP_TXN_REF: &str = "vnp_TxnRef";
pub const VNP_ORDER_INFO: &str = "vnp_OrderInfo";
pub const VNP_ORDER_TYPE: &str = "vnp_OrderType";
pub const VNP_LOCALE: &str = "vnp_Locale";
pub const VNP_RETURN_URL: &str = "vnp_ReturnUrl";
pub const VNP_IP_ADDR: &str = "vnp_IpAddr";
pub const VNP_CREATE_DATE: &str = "vnp_CreateDate";
pub const VNP_EXPIRE_DATE: &str = "vnp_ExpireDate";
pub const VNP_BANK_CODE: &str = "vnp_BankCode";
pub const VNP_BANK_TRAN_NO: &str = "vnp_BankTranNo";
pub const VNP_CARD_TYPE: &str = "vnp_CardType";
pub const VNP_PAY_DATE: &str = "vnp_PayDate";
pub const VNP_RESPONSE_CODE: &str = "vnp_ResponseCode";
pub const VNP_TRANSACTION_NO: &str = "vnp_TransactionNo";
pub const VNP_TRANSACTION_STATUS: &str = "vnp_TransactionStatus";

/// Signature carried on redirects and callbacks; excluded from sign data
pub const VNP_SECURE_HASH: &str = "vnp_SecureHash";

/// Legacy hash-type marker some gateway responses still carry; excluded from sign data
pub const VNP_SECURE_HASH_TYPE: &str = "vnp_SecureHashType";

// =============================================================================
// GATEWAY PROTOCOL CONSTANTS
// =============================================================================

/// Command value for a payment request
pub const COMMAND_PAY: &str = "pay";

/// The gateway settles in Vietnamese dong only
pub const CURRENCY_VND: &str = "VND";

/// Gateway timestamp format (`yyyyMMddHHmmss`)
pub const GATEWAY_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Gateway timestamps are expressed in Indochina time (UTC+7)
pub const GATEWAY_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Response/transaction-status code for a settled payment
pub const RESPONSE_CODE_SUCCESS: &str = "00";
