pub mod constants;
pub mod dispatch;
pub mod parsers;
pub mod problem;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
