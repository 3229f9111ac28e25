pub(crate) mod chrome;
