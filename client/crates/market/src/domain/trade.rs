//! Demand and payment DTOs

use chrono::NaiveDate;
use codec::{FilePart, FormData};
use kernel::id::{CategoryId, OrderId};
use serde::Serialize;

/// A purchase demand to publish, sent as a JSON document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandDraft {
    pub category_id: CategoryId,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_require: Option<String>,
    pub quantity: u32,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    pub delivery_date: NaiveDate,
    pub delivery_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_require: Option<String>,
}

/// A payment against an order, sent as a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub order_id: OrderId,
    /// e.g. `deposit`, `final`
    pub payment_stage: String,
    /// Decimal amount as text
    pub amount: String,
    pub payment_method: String,
    pub voucher: Option<FilePart>,
}

impl PaymentDraft {
    pub fn into_form(self) -> FormData {
        let mut form = FormData::new();
        form.append("orderId", self.order_id)
            .append("paymentStage", self.payment_stage)
            .append("amount", self.amount)
            .append("paymentMethod", self.payment_method);
        if let Some(voucher) = self.voucher {
            form.append_file("voucherFile", voucher);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{FormValue, Payload, RequestPayload, encode_request_payload};

    #[test]
    fn test_demand_draft_encodes_as_strings() {
        let draft = DemandDraft {
            category_id: "1876543210987654321".parse().unwrap(),
            product_name: "大米".into(),
            spec_require: None,
            quantity: 500,
            unit: "kg".into(),
            price_range: Some("3-4".into()),
            delivery_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            delivery_address: "杭州".into(),
            quality_require: None,
        };
        let document = Payload::from_serialize(&draft).unwrap();
        let RequestPayload::Document(wire) = encode_request_payload(document.into()) else {
            panic!("expected a document");
        };
        assert_eq!(wire.get("categoryId"), Some(&Payload::from("1876543210987654321")));
        assert_eq!(wire.get("quantity"), Some(&Payload::from("500")));
        assert_eq!(wire.get("deliveryDate"), Some(&Payload::from("2025-01-15")));
        assert!(wire.get("specRequire").is_none());
    }

    #[test]
    fn test_payment_form() {
        let draft = PaymentDraft {
            order_id: "9007199254740993".parse().unwrap(),
            payment_stage: "deposit".into(),
            amount: "1200.00".into(),
            payment_method: "bank_transfer".into(),
            voucher: None,
        };
        let form = draft.into_form();
        assert_eq!(form.len(), 4);
        assert_eq!(
            form.get("orderId"),
            Some(&FormValue::Value(Payload::from("9007199254740993")))
        );
        assert!(form.get("voucherFile").is_none());
    }
}
