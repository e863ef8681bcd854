mod console;
#[cfg(test)]
mod fake_console;
#[cfg(test)]
mod fake_file_system;
mod file_system;

pub use console::*;
#[cfg(test)]
pub use fake_console::*;
#[cfg(test)]
pub use fake_file_system::*;
pub use file_system::*;
