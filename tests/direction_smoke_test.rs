#[cfg(test)]
mod tests {
    use pose_direction::registry::Registry;
    use pose_direction::types::LandmarkFrame;

    // End-to-end: OpenPose JSON in, (label, code) out, through the registry.

    #[test]
    fn classify_face_from_json() {
        // Degraded 4-point face with the nose roughly centered
        let raw = r#"{
            "people": [
                { "face_keypoints_2d": [10.0, 0.0, 1.0, 20.0, 0.0, 1.0, 15.0, 0.0, 1.0, 14.0, 0.0, 1.0] }
            ]
        }"#;
        let frame = LandmarkFrame::from_json_str(raw).expect("valid frame JSON");

        let registry = Registry::with_builtin();
        let pipeline = registry.build("face").expect("face classifier registered");
        let result = pipeline.classify(&frame);

        assert!(result.code() != -1, "got '{}'", result.label());
    }

    #[test]
    fn classify_body_from_frame_batch() {
        // A POSE_KEYPOINT value is a list of frames; the first one is used.
        let raw = r#"[
            {
                "people": [
                    { "pose_keypoints_2d": [100.0, 100.0, 0.9,
                                            0.0, 0.0, 0.0,
                                            0.0, 0.0, 0.0,
                                            0.0, 0.0, 0.0,
                                            0.0, 0.0, 0.0,
                                            60.0, 100.0, 0.9,
                                            140.0, 100.0, 0.9] }
                ]
            },
            { "people": [] }
        ]"#;
        let frame = LandmarkFrame::from_json_str(raw).expect("valid batch JSON");

        let registry = Registry::with_builtin();
        let pipeline = registry.build("body").expect("body classifier registered");
        let result = pipeline.classify(&frame);

        assert_eq!(result.label(), "forward");
        assert_eq!(result.code(), 0);
    }

    #[test]
    fn empty_people_is_missing_keypoints() {
        let frame = LandmarkFrame::from_json_str(r#"{"people": []}"#).expect("valid JSON");
        let registry = Registry::with_builtin();

        for spec in registry.specs() {
            let pipeline = registry.build(spec.id).expect("registered");
            let result = pipeline.classify(&frame);
            assert_eq!(result.label(), "missing keypoints");
            assert_eq!(result.code(), -1);
        }
    }

    #[test]
    fn registry_exposes_host_contract() {
        let registry = Registry::with_builtin();

        let ids: Vec<&str> = registry.specs().map(|s| s.id).collect();
        assert_eq!(ids, vec!["face", "body"]);

        for spec in registry.specs() {
            assert_eq!(spec.input_name, "pose_kps");
            assert_eq!(spec.input_type, "POSE_KEYPOINT");
            assert_eq!(spec.output_names, ["direction", "direction_code"]);
            assert!(spec.always_changed);
        }

        assert!(registry.build("unknown").is_none());
        assert!(registry.spec("unknown").is_none());
    }

    #[test]
    fn change_token_never_compares_equal() {
        let registry = Registry::with_builtin();
        let pipeline = registry.build("face").expect("registered");

        // NaN sentinel: a caching host sees a "changed" value on every tick
        let token = pipeline.change_token();
        assert!(token.is_nan());
        assert!(token != token);
    }

    #[test]
    fn truncated_trailing_triple_is_dropped() {
        // Eleven flat values = three complete points, below the face minimum
        let raw = r#"{
            "people": [
                { "face_keypoints_2d": [10.0, 0.0, 1.0, 20.0, 0.0, 1.0, 15.0, 0.0, 1.0, 14.0, 0.0] }
            ]
        }"#;
        let frame = LandmarkFrame::from_json_str(raw).expect("valid JSON");
        assert_eq!(frame.people[0].face.as_ref().map(|f| f.len()), Some(3));

        let registry = Registry::with_builtin();
        let result = registry.build("face").expect("registered").classify(&frame);
        assert_eq!(result.code(), -1);
    }
}
