pub mod model;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;
