use super::*;
use crate::model::keyframe::KeyframeValue;

const DEFAULT_HEADER: &str = "Adobe After Effects 9.0 Keyframe Data\n\n\tUnits Per Second\t24\n\tSource Width\t1920\n\tSource Height\t1080\n\tSource Pixel Aspect Ratio\t1\n\tComp Pixel Aspect Ratio\t1\n\n";

fn vec3_layer(position: Option<Track<[f64; 3]>>, scale: Option<Track<[f64; 3]>>) -> Layer {
    Layer {
        transform: Some(Transform {
            position,
            scale,
            ..Transform::default()
        }),
        ..Layer::default()
    }
}

#[test]
fn color_effect_is_written_argb() {
    let mut layer = Layer::default();
    layer.insert_effect(
        "Fill #1",
        "Color #4",
        vec![
            Keyframe::new(22.0, KeyframeValue::Vector(vec![255.0, 0.0, 0.0, 255.0])),
            Keyframe::new(
                78.0,
                KeyframeValue::Vector(vec![117.605, 86.0801, 86.0801, 255.0]),
            ),
        ],
    );
    let text = encode(&KeyframeSource::new(24, vec![layer]));
    assert_eq!(
        text,
        format!(
            "{DEFAULT_HEADER}Layer\nEffects\tFill #1\tColor #4\n\tFrame\n\t22\t255\t255\t0\t0\t\n\t78\t255\t117.605\t86.0801\t86.0801\t\n\nEnd of Keyframe Data\n"
        )
    );
}

#[test]
fn time_remap_is_written_as_scalars() {
    let layer = Layer {
        time_remap: Some(vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(14.0, 24.6667),
            Keyframe::new(22.0, 0.0),
            Keyframe::new(35.0, 28.3333),
            Keyframe::new(680.0, 28.3333),
        ]),
        ..Layer::default()
    };
    let text = encode(&KeyframeSource::new(24, vec![layer]));
    assert_eq!(
        text,
        format!(
            "{DEFAULT_HEADER}Layer\nTime Remap\n\tFrame\n\t0\t0\t\n\t14\t24.6667\t\n\t22\t0\t\n\t35\t28.3333\t\n\t680\t28.3333\t\n\nEnd of Keyframe Data\n"
        )
    );
}

#[test]
fn multiple_layers_are_written_in_order() {
    let layers = vec![
        vec3_layer(
            Some(vec![
                Keyframe::new(20.0, [960.0, 640.0, 0.0]),
                Keyframe::new(53.0, [1940.0, 640.0, 0.0]),
            ]),
            None,
        ),
        vec3_layer(
            None,
            Some(vec![
                Keyframe::new(52.0, [100.0, 100.0, 100.0]),
                Keyframe::new(78.0, [50.0, 100.0, 100.0]),
            ]),
        ),
    ];
    let text = encode(&KeyframeSource::new(24, layers));
    assert_eq!(
        text,
        format!(
            "{DEFAULT_HEADER}Layer\nTransform\tPosition\n\tFrame\n\t20\t960\t640\t0\t\n\t53\t1940\t640\t0\t\n\nLayer\nTransform\tScale\n\tFrame\n\t52\t100\t100\t100\t\n\t78\t50\t100\t100\t\n\nEnd of Keyframe Data\n"
        )
    );
}

#[test]
fn transform_tracks_follow_fixed_order() {
    let layer = Layer {
        time_remap: Some(vec![Keyframe::new(0.0, 1.0)]),
        transform: Some(Transform {
            opacity: Some(vec![Keyframe::new(0.0, 50.0)]),
            scale: Some(vec![Keyframe::new(0.0, [1.0, 1.0, 1.0])]),
            rotation: Some(vec![Keyframe::new(0.0, 90.0)]),
            position: Some(vec![Keyframe::new(0.0, [2.0, 2.0, 0.0])]),
            anchor_point: Some(vec![Keyframe::new(0.0, [3.0, 3.0, 0.0])]),
        }),
        effects: None,
    };
    let text = encode(&KeyframeSource::new(24, vec![layer]));
    let headers: Vec<_> = text
        .lines()
        .filter(|l| l.starts_with("Time") || l.starts_with("Transform"))
        .collect();
    assert_eq!(
        headers,
        [
            "Time Remap",
            "Transform\tAnchor Point",
            "Transform\tPosition",
            "Transform\tRotation",
            "Transform\tScale",
            "Transform\tOpacity",
        ]
    );
}

#[test]
fn empty_layer_is_just_the_layer_line() {
    let text = encode(&KeyframeSource::new(30, vec![Layer::default()]));
    assert!(text.ends_with("\n\nLayer\nEnd of Keyframe Data\n"));
    assert!(text.contains("\tUnits Per Second\t30\n"));
}

#[test]
fn empty_transform_writes_no_blocks() {
    let layer = Layer {
        transform: Some(Transform::default()),
        ..Layer::default()
    };
    let text = encode(&KeyframeSource::new(30, vec![layer]));
    assert!(text.ends_with("\n\nLayer\nEnd of Keyframe Data\n"));
    assert!(!text.contains("Transform"));
}

#[test]
fn explicit_header_values_override_config() {
    let source = KeyframeSource {
        frame_rate: 25,
        comp_size: Some([720, 576]),
        source_pixel_aspect_ratio: Some(1.0926),
        comp_pixel_aspect_ratio: None,
        layers: vec![],
    };
    let config = EncodeConfig {
        comp_size: [1, 1],
        pixel_aspect_ratio: 0.9,
    };
    let text = encode_with(&source, &config);
    assert!(text.contains("\tSource Width\t720\n\tSource Height\t576\n"));
    assert!(text.contains("\tSource Pixel Aspect Ratio\t1.0926\n"));
    assert!(text.contains("\tComp Pixel Aspect Ratio\t0.9\n"));
}

#[test]
fn default_config_is_full_hd_square_pixels() {
    let config = EncodeConfig::default();
    assert_eq!(config.comp_size, [1920, 1080]);
    assert_eq!(config.pixel_aspect_ratio, 1.0);
}

#[test]
fn document_encode_uses_its_own_header() {
    let doc = Document {
        frame_rate: 24,
        comp_size: [1920, 1280],
        source_pixel_aspect_ratio: 1.0,
        comp_pixel_aspect_ratio: 1.0,
        layers: vec![],
    };
    assert_eq!(
        doc.encode(),
        encode(&KeyframeSource::from(doc.clone())),
    );
    assert!(doc.encode().contains("\tSource Height\t1280\n"));
}

#[test]
fn source_json_requires_frame_rate_and_layers() {
    let src = KeyframeSource::from_json(r#"{"frameRate": 24, "layers": [{}]}"#).unwrap();
    assert_eq!(src, KeyframeSource::new(24, vec![Layer::default()]));
    assert!(KeyframeSource::from_json(r#"{"layers": []}"#).is_err());
}

#[test]
fn other_vector_lengths_are_written_as_is() {
    let mut layer = Layer::default();
    layer.insert_effect(
        "Point",
        "Center",
        vec![Keyframe::new(0.0, KeyframeValue::Vector(vec![10.0, 20.0]))],
    );
    let text = encode(&KeyframeSource::new(24, vec![layer]));
    assert!(text.contains("Effects\tPoint\tCenter\n\tFrame\n\t0\t10\t20\t\n\n"));
}
