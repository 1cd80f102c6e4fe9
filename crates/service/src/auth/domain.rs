use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Staff member from the roster file.
///
/// Only `staff_no` is interpreted; every other attribute is kept as-is and
/// returned to the caller on login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffUser {
    pub staff_no: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// Login input as sent by the client.
///
/// Fields are kept as raw JSON so that absent, null or non-string values
/// decode fine and are then rejected as invalid credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub staff_no: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

impl LoginInput {
    pub fn new(staff_no: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            staff_no: Some(Value::String(staff_no.into())),
            password: Some(Value::String(password.into())),
        }
    }

    pub fn staff_no(&self) -> Option<&str> {
        self.staff_no.as_ref().and_then(Value::as_str)
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().and_then(Value::as_str)
    }
}
