use panview_core::{ResampleQuality, ViewerConfig, ViewerError};

// ---------------------------------------------------------------------------
// ResampleQuality
// ---------------------------------------------------------------------------

#[test]
fn test_quality_display() {
    let names: Vec<String> = ResampleQuality::ALL.iter().map(|q| q.to_string()).collect();
    assert_eq!(names, ["Nearest", "Bilinear", "Hamming", "Bicubic", "Lanczos"]);
}

#[test]
fn test_quality_default_is_nearest() {
    assert_eq!(ResampleQuality::default(), ResampleQuality::Nearest);
}

#[test]
fn test_quality_order_weakest_to_strongest() {
    let levels: Vec<u8> = ResampleQuality::ALL.iter().map(|q| q.level()).collect();
    assert_eq!(levels, [0, 1, 2, 3, 4]);
}

// ---------------------------------------------------------------------------
// ViewerConfig
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_values() {
    let c = ViewerConfig::default();
    assert_eq!(c.zoom_scale, 1.2);
    assert_eq!(c.min_level, 0.1);
    assert_eq!(c.max_level, 3.0);
    assert_eq!(c.quality, ResampleQuality::Nearest);
    assert_eq!(c.background, "#999999");
    assert!(!c.zoom_to_cursor);
    assert!(c.validate().is_ok());
    assert_eq!(c.background_rgb().unwrap(), [0x99, 0x99, 0x99]);
}

#[test]
fn test_config_json_round_trip() {
    let c = ViewerConfig {
        max_level: 20.0,
        quality: ResampleQuality::Lanczos,
        zoom_to_cursor: true,
        ..ViewerConfig::default()
    };
    let json = serde_json::to_string(&c).unwrap();
    let back: ViewerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_partial_config_uses_defaults() {
    let c: ViewerConfig = serde_json::from_str(r#"{"max_level": 20.0, "quality": "Hamming"}"#).unwrap();
    assert_eq!(c.max_level, 20.0);
    assert_eq!(c.quality, ResampleQuality::Hamming);
    assert_eq!(c.zoom_scale, 1.2);
    assert_eq!(c.background, "#999999");
}

#[test]
fn test_validate_rejects_inverted_bounds() {
    let c = ViewerConfig {
        min_level: 2.0,
        max_level: 1.0,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ViewerError::InvalidScaleBounds { .. })
    ));
}

#[test]
fn test_validate_rejects_non_positive_bounds() {
    let c = ViewerConfig {
        min_level: 0.0,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ViewerError::InvalidScaleBounds { .. })
    ));
}

#[test]
fn test_validate_rejects_zoom_step() {
    let c = ViewerConfig {
        zoom_scale: 1.0,
        ..ViewerConfig::default()
    };
    assert!(matches!(c.validate(), Err(ViewerError::InvalidZoomScale(_))));
}

#[test]
fn test_validate_rejects_background() {
    let c = ViewerConfig {
        background: "grey".into(),
        ..ViewerConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(matches!(err, ViewerError::InvalidColor(_)));
    assert!(err.to_string().contains("grey"));
}

#[test]
fn test_validate_rejects_huge_max_level() {
    let c = ViewerConfig {
        max_level: 1e6,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ViewerError::InvalidScaleBounds { .. })
    ));
}
