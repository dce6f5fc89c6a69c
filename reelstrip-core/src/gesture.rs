//! Drag gesture recognition.
//!
//! Pointer and touch input feed the same state machine:
//! `Idle --begin--> Dragging --end/cancel--> Idle`. While dragging, the
//! strip follows the pointer; on release the travelled distance decides
//! between the neighbouring slides and snapping back.

/// What a finished drag asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Next,
    Previous,
    /// Distance stayed within the threshold; return to the current slide.
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start: f32,
    pub current: f32,
}

impl DragSession {
    /// Distance travelled so far; positive when moving toward the next
    /// slide.
    pub fn delta(&self) -> f32 {
        self.start - self.current
    }
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    threshold: f32,
    session: Option<DragSession>,
}

impl GestureRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            session: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Open a session at `coordinate`. A press during an open session
    /// restarts it.
    pub fn begin(&mut self, coordinate: f32) {
        if self.session.is_some() {
            log::debug!("Drag restarted at {}", coordinate);
        }
        self.session = Some(DragSession {
            start: coordinate,
            current: coordinate,
        });
    }

    /// Track the pointer. Returns the drag displacement in percent of
    /// `viewport_extent`, or `None` when no drag is in progress.
    pub fn update(&mut self, coordinate: f32, viewport_extent: f32) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.current = coordinate;
        // Also rejects NaN and infinite extents from an unlaid-out viewport.
        if !(viewport_extent.is_finite() && viewport_extent > 0.0) {
            return Some(0.0);
        }
        Some(session.delta() / viewport_extent * 100.0)
    }

    /// Close the session at `coordinate` and classify it. A release with no
    /// open session is ignored and yields `None`.
    pub fn end(&mut self, coordinate: f32) -> Option<NavigationIntent> {
        let Some(mut session) = self.session.take() else {
            log::debug!("Ignoring drag end without a drag start");
            return None;
        };
        session.current = coordinate;
        Some(self.classify(session.delta()))
    }

    /// Abandon the session. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }

    fn classify(&self, delta: f32) -> NavigationIntent {
        if delta.abs() > self.threshold {
            if delta > 0.0 {
                NavigationIntent::Next
            } else {
                NavigationIntent::Previous
            }
        } else {
            NavigationIntent::SnapBack
        }
    }
}
