use crate::controllers::interactive::events::render::RenderEvent;

/// Receives frames from the render worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
