/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker has presented a new event.
    ///
    /// Receiving this does not redraw by itself; the handler checks whether
    /// a frame was actually copied before requesting a redraw.
    Wake,
}
