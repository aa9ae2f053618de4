//! Shared document fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// An entry exercising every field shape: both kinds, string and numeric
/// codes, optional fields present and absent.
pub fn full_entry_doc() -> Value {
    json!({
        "full_name": "Bhamho Jograj",
        "addresses": [
            {
                "kind": "home",
                "building_name": "Sea View",
                "unit_number": 12,
                "street_number": "1A",
                "street_name": "Marine Drive",
                "locality": "Nariman Point",
                "city": "Mumbai",
                "province": "Maharashtra",
                "pincode": 400021,
                "country": "India"
            },
            {
                "kind": "work",
                "street_name": "Dalal Street",
                "pincode": "400001",
                "country": "India"
            }
        ],
        "phone_numbers": [
            {"kind": "home", "country_code": 91, "area_code": 22, "local_number": 22821234},
            {"kind": "work", "country_code": 91, "local_number": 98201234}
        ],
        "fax_numbers": [
            {"kind": "work", "country_code": 91, "area_code": 22, "local_number": 22825678}
        ],
        "emails": [
            {"kind": "home", "email": "bhamho@example.com"},
            {"kind": "work", "email": "jograj@work.example.com"}
        ]
    })
}

/// A minimal entry: the one required field only.
pub fn minimal_entry_doc() -> Value {
    json!({"full_name": "Ann"})
}

/// Fixture pairs keyed by nickname, mirroring the original test data suite.
pub fn entry_doc_suite() -> Vec<(String, Value)> {
    vec![
        ("bhamho".to_string(), full_entry_doc()),
        ("ann".to_string(), minimal_entry_doc()),
    ]
}
