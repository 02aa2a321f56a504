#![deny(warnings)]

pub mod reminders;
pub mod tasks;
pub mod utils;

#[cfg(test)]
mod tests {
    pub use crate::tasks::tests::*;
}
