/// Inputs the carousel reacts to. Element-bound events carry the index of
/// the slide or indicator they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselMessage {
    NextPressed,
    PreviousPressed,
    IndicatorPressed(usize),
    /// Pointer or touch press at the given coordinate along the drag axis.
    DragStarted(f32),
    DragMoved(f32),
    DragEnded(f32),
    DragCancelled,
    /// A slide's media reached its natural end.
    MediaEnded(usize),
    CaptionResolved { index: usize, text: String },
    /// Layout has settled; animate every transition from now on.
    ArmAnimation,
}
