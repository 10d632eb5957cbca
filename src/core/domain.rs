use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the library system; the
// data directory is the only knob the core needs.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_dir: String,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            data_dir: data_dir.to_string(),
        }
    }
}
