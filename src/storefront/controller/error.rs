use derive_more::{Display, Error};

/// Input the page holds that cannot be sent as is.
#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum FormError {
    #[display("{field} is required")]
    Missing { field: &'static str },
    #[display("{field} is not a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[display("quantity must be at least 1, got {value}")]
    QuantityTooSmall { value: i32 },
}

/// quantity typed into a cart line
pub(crate) fn parse_quantity(value: &str) -> Result<i32, FormError> {
    let quantity = value.trim().parse::<i32>().map_err(|_| FormError::NotANumber {
        field: "quantity",
        value: value.to_string(),
    })?;
    if quantity < 1 {
        return Err(FormError::QuantityTooSmall { value: quantity });
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_a_positive_number() {
        assert_eq!(parse_quantity(" 3 "), Ok(3));
        assert_eq!(parse_quantity("0"), Err(FormError::QuantityTooSmall { value: 0 }));
        assert_eq!(
            parse_quantity("two").unwrap_err().to_string(),
            r#"quantity is not a number, got "two""#
        );
    }
}
