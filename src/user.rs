#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    name: String,
    weight: i32,
    body_mass_index: i32,
}

impl User {
    pub fn new(name: String, weight: i32, body_mass_index: i32) -> Self {
        Self {
            name,
            weight,
            body_mass_index,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn weight(&self) -> i32 {
        self.weight
    }
    pub fn body_mass_index(&self) -> i32 {
        self.body_mass_index
    }
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }
    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }
    pub fn set_body_mass_index(&mut self, body_mass_index: i32) {
        self.body_mass_index = body_mass_index;
    }
}
