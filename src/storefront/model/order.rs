use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub(crate) type OrderId = i64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
}

/// Order as the backend returns it, from `POST /orders` and the lookups.
/// Only the id is relied upon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub order_date: Option<NaiveDateTime>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_reads_local_date_time_and_tolerates_a_bare_id() {
        let order: Order = serde_json::from_str(
            r#"{"id":7,"customerEmail":"ann@example.com","orderDate":"2024-05-01T10:15:30.123456","totalAmount":25.0,"status":"PENDING","orderItems":[]}"#,
        )
            .unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.customer_email, "ann@example.com");
        assert_eq!(order.order_date.unwrap().format("%Y-%m-%d %H:%M").to_string(), "2024-05-01 10:15");

        let bare: Order = serde_json::from_str(r#"{"id":8}"#).unwrap();
        assert_eq!(bare.order_date, None);
        assert_eq!(bare.status, None);
    }
}
