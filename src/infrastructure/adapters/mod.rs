#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub mod deepseek;
pub mod gemini;
pub mod remote;

use crate::domain::models::AdapterBox;
use crate::domain::models::AdapterName;

pub struct AdapterManager {}

impl AdapterManager {
    pub fn get(name: AdapterName) -> AdapterBox {
        match name {
            AdapterName::Gemini => return Box::<gemini::Gemini>::default(),
            AdapterName::Deepseek => return Box::<deepseek::Deepseek>::default(),
        }
    }

    pub fn remote() -> AdapterBox {
        return Box::<remote::Remote>::default();
    }
}
