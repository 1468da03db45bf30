/// Side effects requested by the reducer and executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetClipboardText(String),
}
