//! Status and payment enums for orders.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// New drafts start out `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in the order the form presents them.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Shipped, Self::Delivered, Self::Cancelled];
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// How an order is paid.
///
/// The option set is fixed; the serialized form matches the labels the
/// order form's select box submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMode {
    /// All payment modes, in the order the form presents them.
    pub const ALL: [Self; 5] = [
        Self::CreditCard,
        Self::DebitCard,
        Self::PayPal,
        Self::BankTransfer,
        Self::CashOnDelivery,
    ];
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => write!(f, "Credit Card"),
            Self::DebitCard => write!(f, "Debit Card"),
            Self::PayPal => write!(f, "PayPal"),
            Self::BankTransfer => write!(f, "Bank Transfer"),
            Self::CashOnDelivery => write!(f, "Cash on Delivery"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Credit Card" => Ok(Self::CreditCard),
            "Debit Card" => Ok(Self::DebitCard),
            "PayPal" => Ok(Self::PayPal),
            "Bank Transfer" => Ok(Self::BankTransfer),
            "Cash on Delivery" => Ok(Self::CashOnDelivery),
            _ => Err(format!("invalid payment mode: {s}")),
        }
    }
}

/// The payment schedule agreed for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "Full Payment")]
    FullPayment,
    #[serde(rename = "Installment")]
    Installment,
    #[serde(rename = "Partial Payment")]
    PartialPayment,
}

impl PaymentType {
    /// All payment types, in the order the form presents them.
    pub const ALL: [Self; 3] = [Self::FullPayment, Self::Installment, Self::PartialPayment];
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullPayment => write!(f, "Full Payment"),
            Self::Installment => write!(f, "Installment"),
            Self::PartialPayment => write!(f, "Partial Payment"),
        }
    }
}

impl std::str::FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full Payment" => Ok(Self::FullPayment),
            "Installment" => Ok(Self::Installment),
            "Partial Payment" => Ok(Self::PartialPayment),
            _ => Err(format!("invalid payment type: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"shipped\""
        );
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_order_status_roundtrip_display_from_str() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_payment_mode_labels() {
        for mode in PaymentMode::ALL {
            let parsed: PaymentMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("Bitcoin".parse::<PaymentMode>().is_err());
    }

    #[test]
    fn test_payment_mode_serde_matches_form_labels() {
        assert_eq!(
            serde_json::to_string(&PaymentMode::CashOnDelivery).unwrap(),
            "\"Cash on Delivery\""
        );
    }

    #[test]
    fn test_payment_type_labels() {
        for ty in PaymentType::ALL {
            let parsed: PaymentType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
        assert!("Layaway".parse::<PaymentType>().is_err());
    }
}
