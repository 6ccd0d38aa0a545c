use serde::Deserialize;

/// The `name` key every registry entry carries; other fields are ignored.
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
