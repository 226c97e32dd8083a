pub mod constants;
pub mod dates;
pub mod nullable;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
