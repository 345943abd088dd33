/// Tree statistics command.
pub mod info;
/// Text dump command.
pub mod print;

#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;
