use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::ServiceError;

/// Quantity of a product line: either a settled count or the transient
/// empty placeholder a form emits while the field is being edited.
///
/// The draft state exists only to survive serde round-trips of in-progress
/// edits; it must be coerced to a count before the entity is submittable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quantity {
    Count(u32),
    #[default]
    Draft,
}

impl Quantity {
    /// Coerces the quantity to a settled count, or `None` while drafting.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            Quantity::Count(n) => Some(*n),
            Quantity::Draft => None,
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Count(n) => serializer.serialize_u32(*n),
            Quantity::Draft => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Quantity::Count(n)),
            Raw::Text(s) if s.is_empty() => Ok(Quantity::Draft),
            Raw::Text(s) => Err(de::Error::custom(format!(
                "quantity must be a number or the empty draft placeholder, got {s:?}"
            ))),
        }
    }
}

/// Subdistrict an order is routed to. The set is closed and ordered;
/// deserialization rejects any value outside it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Subdistrict {
    #[serde(rename = "711")]
    #[strum(serialize = "711")]
    D711,
    #[serde(rename = "721")]
    #[strum(serialize = "721")]
    D721,
    #[serde(rename = "731")]
    #[strum(serialize = "731")]
    D731,
    #[serde(rename = "741")]
    #[strum(serialize = "741")]
    D741,
    #[serde(rename = "751")]
    #[strum(serialize = "751")]
    D751,
    #[serde(rename = "761")]
    #[strum(serialize = "761")]
    D761,
    #[serde(rename = "771")]
    #[strum(serialize = "771")]
    D771,
    #[serde(rename = "UBV")]
    #[strum(serialize = "UBV")]
    Ubv,
    #[serde(rename = "Educação")]
    #[strum(serialize = "Educação")]
    Educacao,
    #[serde(rename = "Leptospirose")]
    #[strum(serialize = "Leptospirose")]
    Leptospirose,
}

/// Canonical ordering of the subdistrict set, used for form rendering.
pub const SUBDISTRICTS: [Subdistrict; 10] = [
    Subdistrict::D711,
    Subdistrict::D721,
    Subdistrict::D731,
    Subdistrict::D741,
    Subdistrict::D751,
    Subdistrict::D761,
    Subdistrict::D771,
    Subdistrict::Ubv,
    Subdistrict::Educacao,
    Subdistrict::Leptospirose,
];

/// Parses a subdistrict identifier at a strict boundary.
pub fn parse_subdistrict(raw: &str) -> Result<Subdistrict, ServiceError> {
    raw.parse::<Subdistrict>()
        .map_err(|_| ServiceError::InvalidSubdistrict(raw.to_string()))
}

/// A single product line on an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OrderProduct {
    pub id: Uuid,

    #[validate(length(min = 1))]
    pub product_id: String,

    #[validate(length(min = 1))]
    pub product_name: String,

    /// Settled count, or the transient draft placeholder during edits.
    #[validate(custom = "validate_quantity")]
    pub quantity: Quantity,

    #[validate(length(min = 1))]
    pub unit_of_measure: String,
}

impl OrderProduct {
    pub fn new(
        product_id: String,
        product_name: String,
        quantity: u32,
        unit_of_measure: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            product_name,
            quantity: Quantity::Count(quantity),
            unit_of_measure,
        }
    }
}

/// Order data as captured by the request form, before submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OrderFormData {
    #[validate(length(min = 1))]
    pub requester_name: String,

    pub subdistrict: Subdistrict,

    #[validate(length(min = 1), custom = "validate_products")]
    pub products: Vec<OrderProduct>,

    pub observations: Option<String>,
}

/// A submitted order request: the form data stamped with a request date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OrderRequest {
    #[validate(length(min = 1))]
    pub requester_name: String,

    pub subdistrict: Subdistrict,

    #[validate(length(min = 1), custom = "validate_products")]
    pub products: Vec<OrderProduct>,

    pub observations: Option<String>,

    pub request_date: DateTime<Utc>,
}

impl OrderRequest {
    /// Stamps a submitted form with its request date.
    pub fn from_form(form: OrderFormData, request_date: DateTime<Utc>) -> Self {
        Self {
            requester_name: form.requester_name,
            subdistrict: form.subdistrict,
            products: form.products,
            observations: form.observations,
            request_date,
        }
    }
}

/// Submission boundary for quantities: drafts and zero counts are not valid.
fn validate_quantity(quantity: &Quantity) -> Result<(), ValidationError> {
    match quantity.as_count() {
        Some(n) if n >= 1 => Ok(()),
        Some(_) => {
            let mut err = ValidationError::new("quantity");
            err.message = Some("Quantity must be at least 1".into());
            Err(err)
        }
        None => {
            let mut err = ValidationError::new("quantity");
            err.message = Some("Quantity is still being edited and must be settled".into());
            Err(err)
        }
    }
}

fn validate_products(products: &Vec<OrderProduct>) -> Result<(), ValidationError> {
    for product in products {
        if product.validate().is_err() {
            let mut err = ValidationError::new("products");
            err.message =
                Some(format!("Product line {:?} is not submittable", product.product_name).into());
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_valid_form() -> OrderFormData {
        OrderFormData {
            requester_name: "Maria Souza".to_string(),
            subdistrict: Subdistrict::D731,
            products: vec![OrderProduct::new(
                "LARV-01".to_string(),
                "Larvicide sachet".to_string(),
                12,
                "box".to_string(),
            )],
            observations: Some("Deliver before Friday".to_string()),
        }
    }

    #[test]
    fn valid_form_passes_validation() {
        let form = create_valid_form();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_requester_name_fails_validation() {
        let mut form = create_valid_form();
        form.requester_name = String::new();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("requester_name"));
    }

    #[test]
    fn empty_product_list_fails_validation() {
        let mut form = create_valid_form();
        form.products.clear();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("products"));
    }

    #[test]
    fn draft_quantity_blocks_submission() {
        let mut form = create_valid_form();
        form.products[0].quantity = Quantity::Draft;
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("products"));
    }

    #[test]
    fn zero_quantity_blocks_submission() {
        let mut form = create_valid_form();
        form.products[0].quantity = Quantity::Count(0);
        assert!(form.validate().is_err());
    }

    #[test]
    fn quantity_deserializes_from_number_and_draft_placeholder() {
        let settled: Quantity = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(settled, Quantity::Count(7));
        assert_eq!(settled.as_count(), Some(7));

        let draft: Quantity = serde_json::from_value(json!("")).unwrap();
        assert_eq!(draft, Quantity::Draft);
        assert_eq!(draft.as_count(), None);
    }

    #[test]
    fn quantity_rejects_non_empty_text() {
        let result: Result<Quantity, _> = serde_json::from_value(json!("12a"));
        assert!(result.is_err());
    }

    #[test]
    fn quantity_serializes_back_to_its_wire_shape() {
        assert_eq!(serde_json::to_value(Quantity::Count(3)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(Quantity::Draft).unwrap(), json!(""));
    }

    #[test]
    fn subdistrict_set_is_closed() {
        for raw in ["701", "ubv", "Educacao", "anything"] {
            assert!(parse_subdistrict(raw).is_err(), "accepted {raw:?}");
            let value = serde_json::to_value(raw).unwrap();
            let decoded: Result<Subdistrict, _> = serde_json::from_value(value);
            assert!(decoded.is_err(), "deserialized {raw:?}");
        }
    }

    #[test]
    fn subdistricts_keep_canonical_order_and_names() {
        let names: Vec<String> = SUBDISTRICTS.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "711",
                "721",
                "731",
                "741",
                "751",
                "761",
                "771",
                "UBV",
                "Educação",
                "Leptospirose"
            ]
        );
        for subdistrict in SUBDISTRICTS {
            assert_eq!(
                parse_subdistrict(&subdistrict.to_string()).unwrap(),
                subdistrict
            );
        }
    }

    #[test]
    fn from_form_stamps_the_request_date() {
        let form = create_valid_form();
        let stamped_at = Utc::now();
        let request = OrderRequest::from_form(form.clone(), stamped_at);
        assert_eq!(request.requester_name, form.requester_name);
        assert_eq!(request.subdistrict, form.subdistrict);
        assert_eq!(request.products, form.products);
        assert_eq!(request.request_date, stamped_at);
        assert!(request.validate().is_ok());
    }
}
