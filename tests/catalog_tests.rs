// Host-side tests for catalog flattening and load-time validation.

use notefall::catalog::{CatalogError, NoteCatalog, ScoreNote};

fn note(pitch: u32, start_ms: i32, duration_ms: i32) -> ScoreNote {
    ScoreNote {
        pitch,
        start_ms,
        duration_ms,
    }
}

#[test]
fn flattens_channels_in_order_and_derives_pitch_bounds() {
    let catalog = NoteCatalog::from_score(&[
        vec![note(60, 0, 100), note(72, 200, 100)],
        vec![],
        vec![note(48, 50, 400)],
    ])
    .expect("valid catalog");

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.notes()[0].channel, 0);
    assert_eq!(catalog.notes()[1].channel, 0);
    assert_eq!(catalog.notes()[2].channel, 2);
    assert_eq!(catalog.min_pitch(), 48);
    assert_eq!(catalog.max_pitch(), 72);
    assert_eq!(catalog.pitch_span(), 25);
}

#[test]
fn rejects_negative_start_time() {
    let err = NoteCatalog::from_score(&[vec![note(60, -5, 100)]]).unwrap_err();
    match err {
        CatalogError::NegativeStart {
            channel,
            index,
            start_ms,
        } => {
            assert_eq!((channel, index, start_ms), (0, 0, -5));
        }
        other => panic!("expected NegativeStart, got {other:?}"),
    }
}

#[test]
fn rejects_non_positive_duration() {
    let err = NoteCatalog::from_score(&[vec![note(60, 0, 100)], vec![note(61, 10, 0)]]).unwrap_err();
    match err {
        CatalogError::NonPositiveDuration {
            channel,
            index,
            duration_ms,
        } => {
            assert_eq!((channel, index, duration_ms), (1, 0, 0));
        }
        other => panic!("expected NonPositiveDuration, got {other:?}"),
    }
}

#[test]
fn rejects_empty_score() {
    assert!(matches!(
        NoteCatalog::from_score(&[]),
        Err(CatalogError::Empty)
    ));
    assert!(matches!(
        NoteCatalog::from_score(&[vec![], vec![]]),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn one_bad_record_rejects_the_whole_load() {
    // No partial catalog: the valid first channel must not survive
    let result = NoteCatalog::from_score(&[vec![note(60, 0, 100)], vec![note(61, 10, -1)]]);
    assert!(result.is_err());
}

#[test]
fn error_messages_name_the_offending_record() {
    let err = NoteCatalog::from_score(&[vec![note(60, -42, 100)]]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("-42"), "diagnostic should carry the bad value: {msg}");
}
