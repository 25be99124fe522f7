use super::fake::FakeSurface;
use super::output::listed_duration;
use std::time::Duration;
use super::*;
use crate::playlist::builtin_playlist;

#[test]
fn silent_surface_always_rejects_start() {
    let mut s = SilentSurface;
    let track = builtin_playlist().tracks()[0].clone();
    s.set_source(&track);
    assert!(matches!(s.start(), Err(StartError::NoOutput)));
    assert_eq!(s.duration(), None);
    assert!(s.poll_events().is_empty());
}

#[test]
fn boxed_surface_forwards_to_inner() {
    let mut boxed: Box<FakeSurface> = Box::new(FakeSurface::default());
    let track = builtin_playlist().tracks()[1].clone();

    boxed.set_source(&track);
    boxed.set_gain(0.25);
    assert!(boxed.set_position(12.0));
    assert!(AudioSurface::start(&mut boxed).is_ok());

    assert_eq!(boxed.source.as_deref(), Some(track.src.as_path()));
    assert_eq!(boxed.gain, 0.25);
    assert_eq!(AudioSurface::position(&boxed), 12.0);
    assert_eq!(boxed.started, 1);
}

#[test]
fn start_errors_describe_the_source() {
    let err = StartError::Decode {
        path: "song1.mp3".into(),
        reason: "unrecognized format".into(),
    };
    assert_eq!(
        err.to_string(),
        "failed to decode \"song1.mp3\": unrecognized format"
    );
}

#[test]
fn listed_duration_backs_up_the_decoder() {
    let mut track = builtin_playlist().tracks()[0].clone();
    assert_eq!(listed_duration(&track), Some(Duration::from_secs(165)));

    track.duration = "0:00".into();
    assert_eq!(listed_duration(&track), None);
    track.duration = "--:--".into();
    assert_eq!(listed_duration(&track), None);
}

#[test]
fn fake_surface_can_refuse_to_seek() {
    let mut s = FakeSurface {
        reject_seek: true,
        ..FakeSurface::default()
    };
    assert!(!s.set_position(30.0));
    assert_eq!(s.position, 0.0);
}
