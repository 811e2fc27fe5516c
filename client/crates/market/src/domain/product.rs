//! Product publishing
//!
//! Products are published as multipart forms: each image contributes
//! `productImageDetails[i].file`, `.imageType` and an optional `.sort`; the
//! remaining fields follow and are skipped when absent or empty.

use chrono::NaiveDate;
use codec::{FilePart, FormData, Payload};
use derive_more::Display;
use kernel::id::{CategoryId, OriginAreaId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[display("cover")]
    Cover,
    #[display("production")]
    Production,
    #[display("detail")]
    Detail,
}

/// One product image with its role on the listing
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub file: FilePart,
    pub image_type: ImageType,
    pub sort: Option<u32>,
}

/// A product listing to publish
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub spec: String,
    pub unit: String,
    /// Decimal price, kept as text so no digits are lost
    pub price: Option<String>,
    pub min_purchase: Option<u32>,
    pub stock: Option<u32>,
    pub production_date: Option<NaiveDate>,
    pub shelf_life: Option<String>,
    pub production_method: Option<String>,
    pub origin_area_id: Option<OriginAreaId>,
    pub description: Option<String>,
    pub images: Vec<ProductImage>,
}

impl ProductDraft {
    /// Build the multipart form the backend expects
    pub fn into_form(self) -> FormData {
        let mut form = FormData::new();

        for (index, image) in self.images.into_iter().enumerate() {
            let prefix = format!("productImageDetails[{index}]");
            form.append_file(format!("{prefix}.file"), image.file)
                .append(format!("{prefix}.imageType"), image.image_type.to_string());
            if let Some(sort) = image.sort {
                form.append(format!("{prefix}.sort"), sort);
            }
        }

        let fields: [(&str, Payload); 12] = [
            ("categoryId", self.category_id.into()),
            ("name", self.name.into()),
            ("spec", self.spec.into()),
            ("unit", self.unit.into()),
            ("price", self.price.into()),
            ("minPurchase", self.min_purchase.into()),
            ("stock", self.stock.into()),
            (
                "productionDate",
                self.production_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .into(),
            ),
            ("shelfLife", self.shelf_life.into()),
            ("productionMethod", self.production_method.into()),
            ("originAreaId", self.origin_area_id.into()),
            ("description", self.description.into()),
        ];
        for (name, value) in fields {
            if is_blank(&value) {
                continue;
            }
            form.append(name, value);
        }
        form
    }
}

fn is_blank(value: &Payload) -> bool {
    match value {
        Payload::Null => true,
        Payload::String(s) => s.is_empty(),
        _ => false,
    }
}
