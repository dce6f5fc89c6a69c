//! Behaviour of the carousel controller against recording bindings.

use reelstrip_core::testing::{
    MediaCommand, RecordingMedia, RecordingVisual, StubCaptionFetcher,
};
use reelstrip_core::controller::strip_offset_percent;
use reelstrip_core::*;

type Carousel = CarouselController<RecordingVisual, RecordingMedia>;

fn inline_registry(n: usize) -> SlideRegistry {
    SlideRegistry::new(
        (0..n).map(|i| SlideSpec::inline(format!("clip{i}.mp4"), format!("Caption {i}"))),
    )
    .expect("registry")
}

fn carousel(n: usize) -> Carousel {
    carousel_with(n, RecordingMedia::new(), CarouselConfig::default())
}

fn carousel_with(n: usize, media: RecordingMedia, config: CarouselConfig) -> Carousel {
    let registry = inline_registry(n);
    let captions = CaptionProvider::for_registry(&registry).expect("captions");
    let mut carousel =
        CarouselController::new(registry, captions, RecordingVisual::new(n), media, config)
            .expect("carousel");
    carousel.initialize();
    carousel
}

fn assert_single_active(carousel: &Carousel) {
    let index = carousel.current_index();
    assert!(index < carousel.registry().count());
    assert_eq!(carousel.visual().active_slides(), vec![index]);
    assert_eq!(carousel.visual().active_indicators(), vec![index]);
    assert_eq!(carousel.media().playing(), vec![index]);
}

#[test]
fn construction_rejects_mismatched_elements() {
    let registry = inline_registry(3);
    let captions = CaptionProvider::for_registry(&registry).expect("captions");

    let err = CarouselController::new(
        registry.clone(),
        captions.clone(),
        RecordingVisual::with_indicators(3, 2),
        RecordingMedia::new(),
        CarouselConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        CarouselError::Configuration(ConfigurationError::IndicatorMismatch {
            slides: 3,
            indicators: 2,
        })
    );

    let err = CarouselController::new(
        registry,
        captions,
        RecordingVisual::new(4),
        RecordingMedia::new(),
        CarouselConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CarouselError::Configuration(ConfigurationError::SlideElementMismatch { .. })
    ));
}

#[test]
fn initialize_places_first_slide_without_animation() {
    let carousel = carousel(3);

    assert!(carousel.state().is_initialized);
    assert_eq!(carousel.state().phase, AnimationPhase::Placing);
    assert_eq!(carousel.visual().track_moves(), vec![(0.0, false)]);
    assert_eq!(carousel.visual().caption(), Some("Caption 0"));
    assert_single_active(&carousel);
}

#[test]
fn transitions_animate_once_armed() {
    let mut carousel = carousel(3);
    carousel.update(CarouselMessage::ArmAnimation);
    carousel.next();
    carousel.update(CarouselMessage::IndicatorPressed(0));

    let moves = carousel.visual().track_moves();
    assert_eq!(moves.len(), 3);
    assert!(!moves[0].1);
    assert!(moves[1..].iter().all(|(_, animated)| *animated));
}

#[test]
fn explicit_override_beats_phase() {
    let mut carousel = carousel(3);
    carousel.arm_animation();
    carousel.go_to_with(2, Some(false)).expect("in range");
    assert_eq!(carousel.visual().track_moves().last(), Some(&(strip_offset_percent(2, 3), false)));
}

#[test]
fn go_to_positions_strip_and_marks_one_slide() {
    let mut carousel = carousel(4);
    carousel.go_to(1).expect("in range");

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.visual().track_offset().map(|(offset, _)| offset), Some(-25.0));
    assert_eq!(carousel.visual().caption(), Some("Caption 1"));
    assert_single_active(&carousel);
}

#[test]
fn go_to_out_of_range_leaves_state_untouched() {
    let mut carousel = carousel(2);
    let err = carousel.go_to(2).unwrap_err();
    assert_eq!(err, CarouselError::IndexOutOfRange { index: 2, count: 2 });

    carousel.update(CarouselMessage::IndicatorPressed(7));
    assert_eq!(carousel.current_index(), 0);
    assert_single_active(&carousel);
}

#[test]
fn next_and_previous_wrap_around() {
    let mut carousel = carousel(5);
    carousel.go_to(2).expect("in range");

    for _ in 0..5 {
        carousel.update(CarouselMessage::NextPressed);
        assert_single_active(&carousel);
    }
    assert_eq!(carousel.current_index(), 2);

    for _ in 0..5 {
        carousel.update(CarouselMessage::PreviousPressed);
        assert_single_active(&carousel);
    }
    assert_eq!(carousel.current_index(), 2);

    carousel.go_to(4).expect("in range");
    carousel.next();
    assert_eq!(carousel.current_index(), 0);
    carousel.previous();
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn transition_restarts_active_media_and_parks_the_rest() {
    let mut carousel = carousel(3);
    carousel.media_mut().clear_commands();
    carousel.go_to(2).expect("in range");

    let commands = carousel.media().commands();
    for i in [0, 1] {
        assert!(commands.contains(&MediaCommand::Pause(i)));
        assert!(commands.contains(&MediaCommand::Rewind(i)));
    }
    let rewind = commands.iter().position(|c| *c == MediaCommand::Rewind(2));
    let play = commands.iter().position(|c| *c == MediaCommand::Play(2));
    assert!(rewind.is_some() && play.is_some() && rewind < play);
    assert!(!commands.contains(&MediaCommand::Pause(2)));
}

#[test]
fn rejected_playback_does_not_block_navigation() {
    let mut carousel = carousel_with(3, RecordingMedia::rejecting(), CarouselConfig::default());
    carousel.next();

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.visual().active_slides(), vec![1]);
    assert!(carousel.media().playing().is_empty());
}

#[test]
fn media_end_loops_only_the_active_slide() {
    let mut carousel = carousel(3);
    carousel.go_to(1).expect("in range");

    carousel.media_mut().clear_commands();
    carousel.update(CarouselMessage::MediaEnded(1));
    assert_eq!(
        carousel.media().commands(),
        &[MediaCommand::Rewind(1), MediaCommand::Play(1)]
    );

    carousel.media_mut().clear_commands();
    carousel.update(CarouselMessage::MediaEnded(0));
    carousel.update(CarouselMessage::MediaEnded(9));
    assert!(carousel.media().commands().is_empty());
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn short_drag_snaps_back_without_changing_slide() {
    let mut carousel = carousel(3);
    carousel.arm_animation();
    carousel.go_to(1).expect("in range");

    carousel.update(CarouselMessage::DragStarted(500.0));
    carousel.update(CarouselMessage::DragMoved(460.0));
    carousel.update(CarouselMessage::DragEnded(450.0));

    assert_eq!(carousel.current_index(), 1);
    let resting = strip_offset_percent(1, 3);
    let moves = carousel.visual().track_moves();
    assert_eq!(moves.last(), Some(&(resting, true)));
    assert!(!carousel.is_dragging());
}

#[test]
fn drag_past_threshold_commits() {
    let threshold = CarouselConfig::default().swipe_threshold;
    let mut carousel = carousel(3);

    carousel.update(CarouselMessage::DragStarted(400.0));
    carousel.update(CarouselMessage::DragEnded(400.0 - (threshold + 1.0)));
    assert_eq!(carousel.current_index(), 1);

    carousel.update(CarouselMessage::DragStarted(400.0));
    carousel.update(CarouselMessage::DragEnded(400.0 + (threshold + 1.0)));
    assert_eq!(carousel.current_index(), 0);

    carousel.update(CarouselMessage::DragStarted(400.0));
    carousel.update(CarouselMessage::DragEnded(400.0 + (threshold + 1.0)));
    assert_eq!(carousel.current_index(), 2);
    assert_single_active(&carousel);
}

#[test]
fn drag_preview_tracks_pointer_without_animation() {
    let mut carousel = carousel(4);
    carousel.arm_animation();
    carousel.go_to(1).expect("in range");

    carousel.update(CarouselMessage::DragStarted(600.0));
    carousel.update(CarouselMessage::DragMoved(500.0));

    // 100 units over a 1000 unit viewport is 10%, added to the -25% rest.
    assert_eq!(carousel.visual().track_moves().last(), Some(&(-35.0, false)));
    assert!(carousel.is_dragging());
}

#[test]
fn drag_over_unmeasured_viewport_keeps_strip_at_rest() {
    let registry = inline_registry(4);
    let captions = CaptionProvider::for_registry(&registry).expect("captions");
    let mut carousel = CarouselController::new(
        registry,
        captions,
        RecordingVisual::new(4).viewport(f32::NAN),
        RecordingMedia::new(),
        CarouselConfig::default(),
    )
    .expect("carousel");
    carousel.initialize();
    carousel.go_to(1).expect("in range");

    carousel.update(CarouselMessage::DragStarted(600.0));
    carousel.update(CarouselMessage::DragMoved(500.0));

    let (offset, animated) = *carousel.visual().track_moves().last().expect("moved");
    assert!(offset.is_finite());
    assert_eq!(offset, strip_offset_percent(1, 4));
    assert!(!animated);
}

#[test]
fn out_of_order_drag_events_are_ignored() {
    let mut carousel = carousel(3);
    carousel.visual_mut().clear_commands();

    carousel.update(CarouselMessage::DragMoved(10.0));
    carousel.update(CarouselMessage::DragEnded(900.0));
    carousel.update(CarouselMessage::DragCancelled);

    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.visual().commands().is_empty());
}

#[test]
fn cancelled_drag_returns_to_rest() {
    let mut carousel = carousel(3);
    carousel.update(CarouselMessage::DragStarted(500.0));
    carousel.update(CarouselMessage::DragMoved(200.0));
    carousel.update(CarouselMessage::DragCancelled);

    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.visual().track_moves().last(), Some(&(0.0, true)));
    assert!(!carousel.is_dragging());
}

#[tokio::test]
async fn eager_resolution_updates_displayed_caption() {
    let registry = SlideRegistry::new(vec![
        SlideSpec::named("a.mp4", "a"),
        SlideSpec::named("b.mp4", "b"),
        SlideSpec::named("c.mp4", "c"),
    ])
    .expect("registry");
    let captions = CaptionProvider::for_registry(&registry).expect("captions");
    let config = CarouselConfig {
        caption_placeholder: Some("…".into()),
        ..Default::default()
    };
    let mut carousel = CarouselController::new(
        registry,
        captions,
        RecordingVisual::new(3),
        RecordingMedia::new(),
        config,
    )
    .expect("carousel");
    carousel.initialize();
    assert_eq!(carousel.visual().caption(), Some("…"));

    let fetcher = StubCaptionFetcher::new()
        .with_caption("a", "Hello")
        .with_status("b", 500)
        .with_caption("c", "World\n");
    carousel.resolve_captions(&fetcher).await;

    assert_eq!(carousel.visual().caption(), Some("Hello"));
    assert_eq!(carousel.captions().get_caption(1), Some("b"));
    assert_eq!(carousel.captions().get_caption(2), Some("World"));
}

#[test]
fn late_caption_is_shown_only_for_active_slide() {
    let registry = SlideRegistry::new(vec![
        SlideSpec::named("a.mp4", "a"),
        SlideSpec::named("b.mp4", "b"),
    ])
    .expect("registry");
    let captions = CaptionProvider::for_registry(&registry).expect("captions");
    let mut carousel = CarouselController::new(
        registry,
        captions,
        RecordingVisual::new(2),
        RecordingMedia::new(),
        CarouselConfig::default(),
    )
    .expect("carousel");
    carousel.initialize();
    assert_eq!(carousel.visual().caption(), Some(""));

    carousel.update(CarouselMessage::CaptionResolved { index: 1, text: "Second".into() });
    assert_eq!(carousel.visual().caption(), Some(""));

    carousel.update(CarouselMessage::CaptionResolved { index: 0, text: "First".into() });
    assert_eq!(carousel.visual().caption(), Some("First"));

    carousel.next();
    assert_eq!(carousel.visual().caption(), Some("Second"));
}

#[test]
fn unresolved_slide_clears_previous_caption() {
    let registry = SlideRegistry::new(vec![
        SlideSpec::named("a.mp4", "a"),
        SlideSpec::named("b.mp4", "b"),
    ])
    .expect("registry");
    let captions = CaptionProvider::for_registry(&registry).expect("captions");
    let mut carousel = CarouselController::new(
        registry,
        captions,
        RecordingVisual::new(2),
        RecordingMedia::new(),
        CarouselConfig::default(),
    )
    .expect("carousel");
    carousel.initialize();
    carousel.update(CarouselMessage::CaptionResolved { index: 0, text: "Hello".into() });
    assert_eq!(carousel.visual().caption(), Some("Hello"));

    carousel.next();

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.captions().get_caption(1), None);
    assert_eq!(carousel.visual().caption(), Some(""));
}
