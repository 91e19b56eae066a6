pub mod characteristics;
pub mod constants;
pub mod lifecycle;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
