pub mod payment_dto;

pub use payment_dto::{CreatePaymentDto, PaymentCallbackDto};
