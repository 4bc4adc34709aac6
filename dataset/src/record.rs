use serde::Deserialize;
use serde_json::Value;

/// One entry of the source file. Fields other than `name` and `marks` are
/// ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    marks: Value,
}

impl Record {
    pub fn new(name: &str, marks: Value) -> Self {
        Self {
            name: name.to_owned(),
            marks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &Value {
        &self.marks
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.marks)
    }
}
