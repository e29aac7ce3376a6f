pub mod constants;
pub mod password;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
