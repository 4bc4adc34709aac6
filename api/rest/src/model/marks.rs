use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every query pair in order, so repeated `name` keys survive.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct LookupMarksReqQuery(Vec<(String, String)>);

impl LookupMarksReqQuery {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Serialize)]
pub struct LookupMarksResJson<'a> {
    marks: Vec<&'a Value>,
}

impl<'a> LookupMarksResJson<'a> {
    pub fn new(marks: Vec<&'a Value>) -> Self {
        Self { marks }
    }
}
