pub(crate) mod theme;
