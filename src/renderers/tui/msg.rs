/// Top-level application messages (unidirectional flow)
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    ToggleHelp,

    // Tab strip
    NextTab,
    PrevTab,
    SelectTab(usize),

    // Card scrolling
    ScrollUp,
    ScrollDown,
    ScrollTop,

    // Report export
    SaveReport,
}
