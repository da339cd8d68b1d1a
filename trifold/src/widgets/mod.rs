pub(crate) mod sidebars;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebars: sidebars::SidebarsWidget,
}
