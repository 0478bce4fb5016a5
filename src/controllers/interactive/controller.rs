use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, trace};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderFailure;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::interactive::types::RenderRequest;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::render_frame_parallel_rayon::render_frame_parallel_rayon_cancelable;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn lock_latest_request(&self) -> MutexGuard<'_, Option<(u64, Arc<RenderRequest>)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders submitted requests on a background thread, newest first.
///
/// Only the latest submission is kept. A render whose generation has been
/// superseded is cancelled and its frame dropped, so the presenter only ever
/// receives complete frames of the most recent view.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    /// Starts the render worker thread. Fails if the thread cannot be spawned.
    pub fn new(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> std::io::Result<Self> {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("render-worker".to_string())
            .spawn(move || {
                Self::worker_loop(&worker_shared);
            })?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Queues `request` as the newest job and returns its generation.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.shared.lock_latest_request() = Some((generation, request));
        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.lock_latest_request();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                trace!(generation = job_generation, "dropping superseded render");
                continue;
            }

            let event = match result {
                Ok(frame_buffer) => {
                    debug!(
                        generation = job_generation,
                        width = request.width,
                        height = request.height,
                        elapsed = ?render_duration,
                        "frame rendered"
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        frame_buffer,
                        render_duration,
                    })
                }
                Err(error) if error.is_cancelled() => {
                    trace!(generation = job_generation, "render cancelled");
                    continue;
                }
                Err(error) => RenderEvent::Error(RenderFailure {
                    generation: job_generation,
                    error,
                }),
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<FrameBuffer, RenderError> {
        let algorithm = MandelbrotAlgorithm::new(request.gradient.max_iterations())?;
        let mut frame_buffer = match request.max_pixels {
            Some(limit) => FrameBuffer::with_capacity_limit(limit),
            None => FrameBuffer::default(),
        };

        render_frame_parallel_rayon_cancelable(
            &mut frame_buffer,
            &request.viewport,
            &algorithm,
            request.gradient.as_ref(),
            request.width,
            request.height,
            cancel,
        )?;

        Ok(frame_buffer)
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    use crate::core::actions::render_frame::render_frame::render_frame;
    use crate::core::data::viewport::{Viewport, ViewportError};
    use crate::core::fractals::mandelbrot::gradient::GradientTable;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(sink: &MockPresenterPort, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = sink.take_events();
            if !events.is_empty() || start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn create_test_request(width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            viewport: Viewport::new(0.1, -0.5, 0.0).unwrap(),
            gradient: Arc::new(GradientTable::new(10).unwrap()),
            width,
            height,
            max_pixels: None,
        }
    }

    fn create_controller() -> (Arc<MockPresenterPort>, InteractiveController) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>
        )
        .unwrap();

        (presenter_port, controller)
    }

    #[test]
    fn test_new_starts_worker() {
        let presenter_port: Arc<dyn InteractiveControllerPresenterPort> =
            Arc::new(MockPresenterPort::default());

        let mut controller = InteractiveController::new(presenter_port).unwrap();

        assert!(controller.worker.is_some());
        controller.shutdown();
        assert!(controller.worker.is_none());
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let (presenter_port, mut controller) = create_controller();
        let request = create_test_request(4, 3);

        let generation = controller.submit_request(Arc::new(request.clone()));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        let expected = render_frame(&request.viewport, &request.gradient, 4, 3).unwrap();
        let mut saw_frame = false;
        for event in events {
            match event {
                RenderEvent::Frame(frame) => {
                    assert_eq!(frame.generation, generation);
                    assert!(generation > 0, "generation should be non-zero");
                    assert_eq!(frame.frame_buffer.pixels(), expected.pixels());
                    saw_frame = true;
                }
                RenderEvent::Error(failure) => {
                    panic!("unexpected render error: {failure}");
                }
            }
        }

        assert!(saw_frame, "expected a frame event");
        controller.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let (presenter_port, mut controller) = create_controller();
        let request = Arc::new(create_test_request(4, 4));

        controller.submit_request(Arc::clone(&request));
        let events_a = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_a.is_empty(), "expected events from request A");

        controller.submit_request(Arc::clone(&request));
        let events_b = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_b.is_empty(), "expected events from request B");

        let gen_a = events_a[0].generation();
        let gen_b = events_b[0].generation();
        assert!(
            gen_b > gen_a,
            "Generation B ({gen_b}) should be greater than A ({gen_a})"
        );

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (_presenter_port, mut controller) = create_controller();

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_updates_after_frame_completion() {
        let (presenter_port, mut controller) = create_controller();

        let submitted = controller.submit_request(Arc::new(create_test_request(4, 4)));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty());

        assert_eq!(controller.last_completed_generation(), submitted);
        controller.shutdown();
    }

    #[test]
    fn test_invalid_viewport_emits_error_event() {
        let (presenter_port, mut controller) = create_controller();
        let request = RenderRequest {
            viewport: Viewport::new_unchecked(0.0, 0.0, 0.0),
            ..create_test_request(4, 4)
        };

        let generation = controller.submit_request(Arc::new(request));
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));

        match events.as_slice() {
            [RenderEvent::Error(failure)] => {
                assert_eq!(failure.generation, generation);
                assert_eq!(
                    failure.error,
                    RenderError::Viewport(ViewportError::InvalidScale { scale: 0.0 })
                );
            }
            other => panic!("expected a single error event, got {other:?}"),
        }

        controller.shutdown();
    }

    #[test]
    fn test_rapid_submissions_present_latest_generation_last() {
        let (presenter_port, mut controller) = create_controller();
        let request = Arc::new(create_test_request(64, 64));

        let mut latest = 0;
        for _ in 0..10 {
            latest = controller.submit_request(Arc::clone(&request));
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while controller.last_completed_generation() != latest && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        controller.shutdown();

        let events = presenter_port.take_events();
        let generations: Vec<u64> = events.iter().map(RenderEvent::generation).collect();

        assert_eq!(generations.last(), Some(&latest));
        assert!(generations.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_superseded_render_is_never_presented() {
        let (presenter_port, mut controller) = create_controller();
        let slow = RenderRequest {
            viewport: Viewport::new(0.0005, -0.5, 0.0).unwrap(),
            gradient: Arc::new(GradientTable::new(5000).unwrap()),
            ..create_test_request(2000, 2000)
        };

        let superseded = controller.submit_request(Arc::new(slow));
        let latest = controller.submit_request(Arc::new(create_test_request(4, 4)));

        let deadline = Instant::now() + Duration::from_secs(5);
        while controller.last_completed_generation() != latest && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        controller.shutdown();

        let generations: Vec<u64> = presenter_port
            .take_events()
            .iter()
            .map(RenderEvent::generation)
            .collect();

        assert_eq!(generations, vec![latest]);
        assert!(!generations.contains(&superseded));
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (_presenter_port, mut controller) = create_controller();

        controller.shutdown();
        controller.shutdown();
    }
}
