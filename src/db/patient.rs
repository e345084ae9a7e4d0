use crate::ext::json::ToJson;
use json::JsonValue;

/// A patient record. Never written by this program.
#[derive(Clone, Debug)]
pub struct Patient {
    /// The record ID
    pub id: u64,
    pub surname: String,
    pub forename: String,
    pub address: String,
    pub date_of_birth: String,
    /// The identifier of the patient's doctor
    pub doctor_id: String,
    pub diagnosis: String,
}

impl ToJson for Patient {
    fn to_json(&self) -> Option<JsonValue> {
        Some(json::object! {
            "id": self.id,
            "surname": self.surname.as_str(),
            "forename": self.forename.as_str(),
            "address": self.address.as_str(),
            "date_of_birth": self.date_of_birth.as_str(),
            "doctor_id": self.doctor_id.as_str(),
            "diagnosis": self.diagnosis.as_str(),
        })
    }
}
