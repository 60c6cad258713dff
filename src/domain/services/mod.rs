mod conversations;
mod gateway;
#[cfg(test)]
pub mod testing;

pub use conversations::*;
pub use gateway::*;
