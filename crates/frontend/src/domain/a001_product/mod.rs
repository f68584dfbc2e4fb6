pub mod api;
#[cfg(test)]
mod mock;
pub mod ui;
