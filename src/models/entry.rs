//! Address book entry model and its document conversion layer.
//!
//! An [`AddressEntry`] aggregates a person's addresses, phone numbers,
//! fax numbers, and emails. Entries are exchanged at the system boundary as
//! generic JSON documents; [`AddressEntry::from_document`] and
//! [`AddressEntry::to_document`] are exact inverses over any document the
//! system itself produced. Construction either fully succeeds or fails with
//! [`StoreError::Validation`]; no partially valid value is ever returned.
//! Updates are whole-value replacement, never field patching.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

fn invalid(field: &str, value: impl fmt::Debug) -> StoreError {
    StoreError::Validation(format!("{} has invalid value {:?}", field, value))
}

/// Kind tag shared by addresses, phone numbers, and emails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Home,
    Work,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::Home => write!(f, "home"),
            AddressKind::Work => write!(f, "work"),
        }
    }
}

/// A value that the wire format permits as either an integer or a string,
/// such as a pincode or a street number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CodeValue {
    Number(u64),
    Text(String),
}

impl CodeValue {
    /// A zero number or empty string does not satisfy a required field.
    pub fn is_unset(&self) -> bool {
        match self {
            CodeValue::Number(n) => *n == 0,
            CodeValue::Text(s) => s.is_empty(),
        }
    }
}

impl From<u64> for CodeValue {
    fn from(n: u64) -> Self {
        CodeValue::Number(n)
    }
}

impl From<&str> for CodeValue {
    fn from(s: &str) -> Self {
        CodeValue::Text(s.to_string())
    }
}

/// A postal address.
///
/// `kind`, `street_name`, `pincode`, and `country` are required; the
/// remaining fields are optional and omitted from the document form when
/// unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub kind: AddressKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<CodeValue>,

    pub street_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    pub pincode: CodeValue,

    pub country: String,
}

impl Address {
    /// Create an address from its required fields, leaving the optional
    /// fields unset.
    pub fn new(
        kind: AddressKind,
        street_name: impl Into<String>,
        pincode: impl Into<CodeValue>,
        country: impl Into<String>,
    ) -> StoreResult<Self> {
        let address = Self {
            kind,
            building_name: None,
            unit_number: None,
            street_number: None,
            street_name: street_name.into(),
            locality: None,
            city: None,
            province: None,
            pincode: pincode.into(),
            country: country.into(),
        };
        address.validate()?;
        Ok(address)
    }

    /// Check the required-field invariants.
    pub fn validate(&self) -> StoreResult<()> {
        if self.street_name.is_empty() {
            return Err(invalid("street_name", &self.street_name));
        }
        if self.pincode.is_unset() {
            return Err(invalid("pincode", &self.pincode));
        }
        if self.country.is_empty() {
            return Err(invalid("country", &self.country));
        }
        Ok(())
    }
}

/// A phone number. The same shape serves fax numbers; an entry keeps them in
/// separate lists but there is no structural distinction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phone {
    pub kind: AddressKind,

    pub country_code: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<u64>,

    pub local_number: u64,
}

impl Phone {
    pub fn new(kind: AddressKind, country_code: u64, local_number: u64) -> StoreResult<Self> {
        let phone = Self {
            kind,
            country_code,
            area_code: None,
            local_number,
        };
        phone.validate()?;
        Ok(phone)
    }

    /// Check the required-field invariants.
    pub fn validate(&self) -> StoreResult<()> {
        if self.country_code == 0 {
            return Err(invalid("country_code", self.country_code));
        }
        if self.local_number == 0 {
            return Err(invalid("local_number", self.local_number));
        }
        Ok(())
    }
}

/// An email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    pub kind: AddressKind,
    pub email: String,
}

impl Email {
    pub fn new(kind: AddressKind, email: impl Into<String>) -> StoreResult<Self> {
        let email = Self {
            kind,
            email: email.into(),
        };
        email.validate()?;
        Ok(email)
    }

    /// Check the required-field invariants.
    pub fn validate(&self) -> StoreResult<()> {
        if self.email.is_empty() {
            return Err(invalid("email", &self.email));
        }
        Ok(())
    }
}

/// One address book entry, the unit of storage.
///
/// Lists may be empty; insertion order is preserved but carries no meaning
/// beyond "as last set".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressEntry {
    pub full_name: String,

    #[serde(default)]
    pub addresses: Vec<Address>,

    #[serde(default)]
    pub phone_numbers: Vec<Phone>,

    #[serde(default)]
    pub fax_numbers: Vec<Phone>,

    #[serde(default)]
    pub emails: Vec<Email>,
}

impl AddressEntry {
    /// Create an entry with a name and no contact details.
    pub fn new(full_name: impl Into<String>) -> StoreResult<Self> {
        let entry = Self {
            full_name: full_name.into(),
            addresses: Vec::new(),
            phone_numbers: Vec::new(),
            fax_numbers: Vec::new(),
            emails: Vec::new(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the required-field invariants of the entry and of every nested
    /// address, phone, fax, and email.
    pub fn validate(&self) -> StoreResult<()> {
        if self.full_name.is_empty() {
            return Err(invalid("full_name", &self.full_name));
        }
        for address in &self.addresses {
            address.validate()?;
        }
        for phone in self.phone_numbers.iter().chain(&self.fax_numbers) {
            phone.validate()?;
        }
        for email in &self.emails {
            email.validate()?;
        }
        Ok(())
    }

    /// Parse an entry from its generic document form.
    ///
    /// Fails with [`StoreError::Validation`] when a required field is
    /// missing or invalid, or when a `kind` value is not `home`/`work`.
    pub fn from_document(doc: Value) -> StoreResult<Self> {
        let entry: AddressEntry =
            serde_json::from_value(doc).map_err(|e| StoreError::Validation(e.to_string()))?;
        entry.validate()?;
        Ok(entry)
    }

    /// Produce the generic document form.
    ///
    /// Optional fields that are unset are omitted, never emitted as null;
    /// the four lists are always present.
    pub fn to_document(&self) -> StoreResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
