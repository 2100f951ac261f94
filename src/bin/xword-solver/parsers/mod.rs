pub(crate) mod structure;
pub(crate) mod words;
