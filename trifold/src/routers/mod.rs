pub(crate) mod sidebars;
