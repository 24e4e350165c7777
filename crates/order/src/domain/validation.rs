use rust_decimal::Decimal;
use std::borrow::Cow;
use uuid::Uuid;
use validator::ValidationError;

pub fn validate_not_nil(value: &Uuid) -> Result<(), ValidationError> {
    if value.is_nil() {
        return Err(ValidationError::new("nil_uuid").with_message(Cow::from("must not be nil")));
    }
    Ok(())
}

pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(
            ValidationError::new("negative").with_message(Cow::from("must not be negative"))
        );
    }
    Ok(())
}
