pub mod enums;
pub mod home;
pub mod property;
pub mod school;

pub use enums::*;
pub use home::*;
pub use property::*;
pub use school::*;
