//! Tour Guide Resource
//!
//! Guides bookable through the marketplace, served from `/guides`.

use serde::{Deserialize, Serialize};

use crate::draft::{Draft, FieldErrors, FieldSpec, InputKind};
use crate::record::{Column, RecordId, Resource};
use crate::validation::{self, FieldError};
use crate::wire;

pub const MIN_GUIDE_AGE: u32 = 18;
pub const MAX_GUIDE_AGE: u32 = 100;

/// Tour guide (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
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
    #[serde(default, deserialize_with = "wire::text")]
    pub age: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub language: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub description: String,
}

static COLUMNS: [Column; 7] = [
    Column::image("Image"),
    Column::text("Name"),
    Column::text("Contact"),
    Column::text("Location"),
    Column::text("Age"),
    Column::text("Language"),
    Column::text("Description"),
];

impl Resource for Guide {
    type Draft = GuideDraft;

    const COLLECTION: &'static str = "guides";
    const NOUN: &'static str = "Guide";
    const LIST_TITLE: &'static str = "Tour Guides List";
    const REPORT_TITLE: &'static str = "Guides Report";
    const ADD_LABEL: &'static str = "Add New Tour Guide";
    const LIST_ROUTE: &'static str = "/admin-guides";
    const ADD_ROUTE: &'static str = "/add-guide";
    const UPDATE_ROUTE: &'static str = "/update-guide";

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
            self.age.clone(),
            self.language.clone(),
            self.description.clone(),
        ]
    }

    fn to_draft(&self) -> GuideDraft {
        GuideDraft {
            name: self.name.clone(),
            image: self.image.clone(),
            contact: self.contact.clone(),
            location: self.location.clone(),
            age: self.age.clone(),
            language: self.language.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideField {
    Name,
    Image,
    Contact,
    Location,
    Age,
    Language,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuideDraft {
    pub name: String,
    pub image: String,
    pub contact: String,
    pub location: String,
    pub age: String,
    pub language: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideErrors {
    pub name: Option<FieldError>,
    pub image: Option<FieldError>,
    pub contact: Option<FieldError>,
    pub location: Option<FieldError>,
    pub age: Option<FieldError>,
    pub language: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FieldErrors<GuideField> for GuideErrors {
    fn slot(&self, field: GuideField) -> &Option<FieldError> {
        match field {
            GuideField::Name => &self.name,
            GuideField::Image => &self.image,
            GuideField::Contact => &self.contact,
            GuideField::Location => &self.location,
            GuideField::Age => &self.age,
            GuideField::Language => &self.language,
            GuideField::Description => &self.description,
        }
    }

    fn slot_mut(&mut self, field: GuideField) -> &mut Option<FieldError> {
        match field {
            GuideField::Name => &mut self.name,
            GuideField::Image => &mut self.image,
            GuideField::Contact => &mut self.contact,
            GuideField::Location => &mut self.location,
            GuideField::Age => &mut self.age,
            GuideField::Language => &mut self.language,
            GuideField::Description => &mut self.description,
        }
    }
}

static FIELDS: [FieldSpec<GuideField>; 7] = [
    FieldSpec { field: GuideField::Name, name: "name", label: "Name", input: InputKind::Text, numeric_only: false },
    FieldSpec { field: GuideField::Image, name: "image", label: "Image URL", input: InputKind::Text, numeric_only: false },
    FieldSpec { field: GuideField::Contact, name: "contact", label: "Contact", input: InputKind::Text, numeric_only: true },
    FieldSpec { field: GuideField::Location, name: "location", label: "Location", input: InputKind::Text, numeric_only: false },
    FieldSpec { field: GuideField::Age, name: "age", label: "Age", input: InputKind::Text, numeric_only: true },
    FieldSpec { field: GuideField::Language, name: "language", label: "Language", input: InputKind::Text, numeric_only: false },
    FieldSpec { field: GuideField::Description, name: "description", label: "Description", input: InputKind::TextArea, numeric_only: false },
];

impl Draft for GuideDraft {
    type Field = GuideField;
    type Errors = GuideErrors;

    fn fields() -> &'static [FieldSpec<GuideField>] {
        &FIELDS
    }

    fn value(&self, field: GuideField) -> &str {
        match field {
            GuideField::Name => &self.name,
            GuideField::Image => &self.image,
            GuideField::Contact => &self.contact,
            GuideField::Location => &self.location,
            GuideField::Age => &self.age,
            GuideField::Language => &self.language,
            GuideField::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: GuideField) -> &mut String {
        match field {
            GuideField::Name => &mut self.name,
            GuideField::Image => &mut self.image,
            GuideField::Contact => &mut self.contact,
            GuideField::Location => &mut self.location,
            GuideField::Age => &mut self.age,
            GuideField::Language => &mut self.language,
            GuideField::Description => &mut self.description,
        }
    }

    fn validate(&self) -> GuideErrors {
        GuideErrors {
            name: validation::letters_only("Name", &self.name),
            image: validation::required("Image URL", &self.image),
            contact: validation::ten_digits("Contact", &self.contact),
            location: validation::letters_only("Location", &self.location),
            age: validation::whole_number_in("Age", &self.age, MIN_GUIDE_AGE, MAX_GUIDE_AGE),
            language: validation::required("Language", &self.language),
            description: validation::required("Description", &self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_validation() {
        let draft = GuideDraft {
            name: "Nimal".to_string(),
            image: "https://img.example/nimal.png".to_string(),
            contact: "0771234567".to_string(),
            location: "Galle".to_string(),
            age: "15".to_string(),
            language: "English, Sinhala".to_string(),
            description: "Coastal tours".to_string(),
        };
        let errors = draft.validate();
        assert_eq!(errors.age.unwrap().message, "Age must be between 18 and 100");
        assert!(errors.language.is_none());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_age_and_contact_are_numeric_only() {
        let numeric: Vec<_> = GuideDraft::fields()
            .iter()
            .filter(|spec| spec.numeric_only)
            .map(|spec| spec.field)
            .collect();
        assert_eq!(numeric, vec![GuideField::Contact, GuideField::Age]);
    }

    #[test]
    fn test_decode_guide_with_numeric_age() {
        let json = r#"{"_id":"g1","name":"Nimal","image":"i","contact":"0771234567",
            "location":"Galle","age":42,"language":"English","description":"d"}"#;
        let guide: Guide = serde_json::from_str(json).unwrap();
        assert_eq!(guide.age, "42");
        assert_eq!(guide.to_draft().age, "42");
        assert_eq!(guide.cells()[4], "42");
    }
}
