pub mod editor;
pub mod selection;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
