use crate::shared::constants::RESPONSE_CODE_SUCCESS;

/// Operator-readable message for a gateway `vnp_ResponseCode`.
///
/// Codes are the gateway's published list; anything unlisted maps to the
/// generic failure text.
pub fn response_message(code: &str) -> &'static str {
    match code {
        "00" => "Transaction successful",
        "07" => "Amount deducted, transaction suspected of fraud",
        "09" => "Card or account not registered for online banking",
        "10" => "Card or account verification failed more than 3 times",
        "11" => "Payment window expired",
        "12" => "Card or account is locked",
        "13" => "Incorrect one-time password",
        "24" => "Transaction cancelled by customer",
        "51" => "Insufficient account balance",
        "65" => "Daily transaction limit exceeded",
        "75" => "Acquiring bank under maintenance",
        "79" => "Incorrect payment password entered too many times",
        _ => "Transaction failed",
    }
}

/// A payment settled iff both the response code and the transaction status
/// report success
pub fn is_settled(response_code: &str, transaction_status: &str) -> bool {
    response_code == RESPONSE_CODE_SUCCESS && transaction_status == RESPONSE_CODE_SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_specific_messages() {
        assert_eq!(response_message("00"), "Transaction successful");
        assert_eq!(response_message("24"), "Transaction cancelled by customer");
        assert_eq!(response_message("51"), "Insufficient account balance");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(response_message("42"), "Transaction failed");
        assert_eq!(response_message(""), "Transaction failed");
    }

    #[test]
    fn test_is_settled() {
        assert!(is_settled("00", "00"));
        assert!(!is_settled("00", "02"));
        assert!(!is_settled("24", "00"));
    }
}
