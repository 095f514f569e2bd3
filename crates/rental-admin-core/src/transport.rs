//! Transport Item Resource
//!
//! Rentable vehicles and travel gear, served from `/items`.

use serde::{Deserialize, Serialize};

use crate::draft::{Draft, FieldErrors, FieldSpec, InputKind};
use crate::record::{Column, RecordId, Resource};
use crate::validation::{self, FieldError};
use crate::wire;

/// Type options offered by the form
pub const TRANSPORT_TYPES: &[(&str, &str)] = &[
    ("van", "Van"),
    ("bus", "Bus"),
    ("car", "Car"),
    ("motorcycle", "Motorcycle"),
    ("bicycle", "Bicycle"),
    ("train", "Train"),
    ("plane", "Plane"),
    ("boat", "Boat"),
    ("campervan", "Campervan"),
    ("tent", "Tent"),
    ("backpack", "Backpack"),
    ("camera", "Camera"),
    ("binoculars", "Binoculars"),
    ("maps", "Maps"),
    ("compass", "Compass"),
    ("GPS", "GPS"),
    ("luggage", "Luggage"),
    ("sleeping bag", "Sleeping Bag"),
    ("cooler", "Cooler"),
    ("flashlight", "Flashlight"),
    ("water bottle", "Water Bottle"),
    ("sunscreen", "Sunscreen"),
    ("hat", "Hat"),
    ("sunglasses", "Sunglasses"),
    ("first aid kit", "First Aid Kit"),
    ("bug spray", "Bug Spray"),
    ("umbrella", "Umbrella"),
    ("towel", "Towel"),
];

/// Transport item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportItem {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "wire::text")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub image: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub contact: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub location: String,
    /// Kept as sent so edits round-trip unchanged
    #[serde(default, deserialize_with = "wire::text")]
    pub price: String,
    #[serde(rename = "type", default, deserialize_with = "wire::text")]
    pub item_type: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub description: String,
}

static COLUMNS: [Column; 7] = [
    Column::image("Image"),
    Column::text("Name"),
    Column::text("Contact"),
    Column::text("Location"),
    Column::text("Price"),
    Column::text("Type"),
    Column::text("Description"),
];

impl Resource for TransportItem {
    type Draft = TransportItemDraft;

    const COLLECTION: &'static str = "items";
    const NOUN: &'static str = "Item";
    const LIST_TITLE: &'static str = "Items List";
    const REPORT_TITLE: &'static str = "Items Report";
    const ADD_LABEL: &'static str = "Add New Item";
    const LIST_ROUTE: &'static str = "/admin-items";
    const ADD_ROUTE: &'static str = "/add-items";
    const UPDATE_ROUTE: &'static str = "/update-item";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn columns() -> &'static [Column] {
        &COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.image.clone(),
            self.name.clone(),
            self.contact.clone(),
            self.location.clone(),
            format!("Rs {}", self.price),
            self.item_type.clone(),
            self.description.clone(),
        ]
    }

    fn to_draft(&self) -> TransportItemDraft {
        TransportItemDraft {
            name: self.name.clone(),
            image: self.image.clone(),
            contact: self.contact.clone(),
            location: self.location.clone(),
            price: self.price.clone(),
            item_type: self.item_type.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportField {
    Name,
    Image,
    Contact,
    Location,
    Price,
    Type,
    Description,
}

/// Form values for a transport item; serialized as the request payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransportItemDraft {
    pub name: String,
    pub image: String,
    pub contact: String,
    pub location: String,
    pub price: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportItemErrors {
    pub name: Option<FieldError>,
    pub image: Option<FieldError>,
    pub contact: Option<FieldError>,
    pub location: Option<FieldError>,
    pub price: Option<FieldError>,
    pub item_type: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FieldErrors<TransportField> for TransportItemErrors {
    fn slot(&self, field: TransportField) -> &Option<FieldError> {
        match field {
            TransportField::Name => &self.name,
            TransportField::Image => &self.image,
            TransportField::Contact => &self.contact,
            TransportField::Location => &self.location,
            TransportField::Price => &self.price,
            TransportField::Type => &self.item_type,
            TransportField::Description => &self.description,
        }
    }

    fn slot_mut(&mut self, field: TransportField) -> &mut Option<FieldError> {
        match field {
            TransportField::Name => &mut self.name,
            TransportField::Image => &mut self.image,
            TransportField::Contact => &mut self.contact,
            TransportField::Location => &mut self.location,
            TransportField::Price => &mut self.price,
            TransportField::Type => &mut self.item_type,
            TransportField::Description => &mut self.description,
        }
    }
}

static FIELDS: [FieldSpec<TransportField>; 7] = [
    FieldSpec { field: TransportField::Name, name: "name", label: "Name", input: InputKind::Text, numeric_only: false },
    FieldSpec { field: TransportField::Image, name: "image", label: "Image URL", input: InputKind::Text, numeric_only: false },
    FieldSpec { field: TransportField::Contact, name: "contact", label: "Contact", input: InputKind::Text, numeric_only: true },
    FieldSpec { field: TransportField::Location, name: "location", label: "Location", input: InputKind::Text, numeric_only: false },
    FieldSpec { field: TransportField::Price, name: "price", label: "Price", input: InputKind::Number, numeric_only: false },
    FieldSpec { field: TransportField::Type, name: "type", label: "Type", input: InputKind::Select(TRANSPORT_TYPES), numeric_only: false },
    FieldSpec { field: TransportField::Description, name: "description", label: "Description", input: InputKind::TextArea, numeric_only: false },
];

impl Draft for TransportItemDraft {
    type Field = TransportField;
    type Errors = TransportItemErrors;

    fn fields() -> &'static [FieldSpec<TransportField>] {
        &FIELDS
    }

    fn value(&self, field: TransportField) -> &str {
        match field {
            TransportField::Name => &self.name,
            TransportField::Image => &self.image,
            TransportField::Contact => &self.contact,
            TransportField::Location => &self.location,
            TransportField::Price => &self.price,
            TransportField::Type => &self.item_type,
            TransportField::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: TransportField) -> &mut String {
        match field {
            TransportField::Name => &mut self.name,
            TransportField::Image => &mut self.image,
            TransportField::Contact => &mut self.contact,
            TransportField::Location => &mut self.location,
            TransportField::Price => &mut self.price,
            TransportField::Type => &mut self.item_type,
            TransportField::Description => &mut self.description,
        }
    }

    fn validate(&self) -> TransportItemErrors {
        TransportItemErrors {
            name: validation::letters_only("Name", &self.name),
            image: validation::required("Image URL", &self.image),
            contact: validation::ten_digits("Contact", &self.contact),
            location: validation::letters_only("Location", &self.location),
            price: validation::positive_number("Price", &self.price),
            item_type: validation::required("Type", &self.item_type),
            description: validation::required("Description", &self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TransportItemDraft {
        TransportItemDraft {
            name: "Hiace".to_string(),
            image: "https://img.example/hiace.png".to_string(),
            contact: "0712345678".to_string(),
            location: "Kandy".to_string(),
            price: "150".to_string(),
            item_type: "van".to_string(),
            description: "Ten seat van".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = valid_draft().validate();
        assert_eq!(errors, TransportItemErrors::default());
        assert!(!TransportItemDraft::has_errors(&errors));
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = TransportItemDraft::default().validate();
        for spec in TransportItemDraft::fields() {
            assert!(errors.get(spec.field).is_some(), "{:?} should fail", spec.field);
        }
        assert_eq!(errors.image.unwrap().message, "Image URL is required");
    }

    #[test]
    fn test_rule_failures_are_collected_together() {
        let draft = TransportItemDraft {
            name: "J4ne".to_string(),
            contact: "071234567".to_string(),
            price: "-5".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate();
        assert_eq!(errors.name.unwrap().message, "Name must contain only letters");
        assert_eq!(errors.contact.unwrap().message, "Contact must be a 10-digit number");
        assert_eq!(errors.price.unwrap().message, "Price must be a positive number");
        assert!(errors.location.is_none());
        assert!(errors.description.is_none());
    }

    #[test]
    fn test_decode_backend_record() {
        let json = r#"{
            "_id": "65f1",
            "name": "Hiace",
            "image": "https://img.example/hiace.png",
            "contact": 712345678,
            "location": "Kandy",
            "price": 200,
            "type": "van",
            "description": "Ten seat van",
            "__v": 0
        }"#;
        let item: TransportItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, RecordId::new("65f1"));
        assert_eq!(item.contact, "712345678");
        assert_eq!(item.cells()[4], "Rs 200");
    }

    #[test]
    fn test_draft_payload_uses_wire_names() {
        let payload = serde_json::to_value(valid_draft()).unwrap();
        assert_eq!(payload["type"], "van");
        assert_eq!(payload["price"], "150");
        assert!(payload.get("_id").is_none());
    }

    #[test]
    fn test_cells_match_columns() {
        let item = TransportItem {
            id: RecordId::new("1"),
            name: "Hiace".to_string(),
            image: "x".to_string(),
            contact: "0712345678".to_string(),
            location: "Kandy".to_string(),
            price: "99.5".to_string(),
            item_type: "van".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(item.cells().len(), TransportItem::columns().len());
        assert_eq!(item.cells()[4], "Rs 99.5");
    }

    #[test]
    fn test_edit_draft_keeps_price_text() {
        let json = r#"{"_id":"65f2","name":"Tent","image":"x","contact":"0712345678",
            "location":"Ella","price":"150.00","type":"tent","description":"d"}"#;
        let item: TransportItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.to_draft().price, "150.00");
        assert_eq!(item.cells()[4], "Rs 150.00");
    }

    #[test]
    fn test_malformed_record_does_not_sink_the_list() {
        let json = r#"{"items":[
            {"_id":"a","name":"Hiace","image":"x","contact":"0712345678","location":"Kandy",
             "price":200,"type":"van","description":"Ten seat van"},
            {"_id":"b","name":"Tent","image":"y","contact":null,"location":"Ella","price":"","type":"tent"}
        ]}"#;
        let list: crate::backend::ListEnvelope<TransportItem> = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].cells()[4], "Rs 200");
        let broken = &list.items[1];
        assert_eq!(broken.price, "");
        assert_eq!(broken.contact, "");
        assert_eq!(broken.description, "");
    }
}
